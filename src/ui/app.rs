//! App controller: routes user actions to the mounted component
//!
//! Holds the repository and platform explicitly; every dispatch is
//! followed by a full re-render by the caller.

use crate::error::{PortalError, Result};
use crate::i18n::Language;
use crate::model::{Employee, FieldUpdate};
use crate::persistence::{EmployeeRepository, KeyValueStore};
use crate::platform::Platform;
use crate::settings::AppConfig;

use super::form::EmployeeForm;
use super::list::EmployeeList;
use super::render;
use super::shell::{Route, Shell};

/// User or browser event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `hashchange` with the new fragment
    RouteChanged(String),
    SetLanguage(Language),
    SetPage(usize),
    OpenEdit(u64),
    UpdateDraft(FieldUpdate),
    CancelEdit,
    CommitEdit,
    Delete(u64),
    UpdateForm(FieldUpdate),
    SubmitForm,
    /// Click inside an element that swallows it (modal body)
    Ignore,
}

impl Action {
    /// Parse a click's `data-action` / `data-arg` pair
    pub fn from_click(action: &str, arg: &str) -> Result<Self> {
        let invalid = |field: &'static str| PortalError::InvalidValue {
            field,
            value: arg.to_string(),
        };
        let parsed = match action {
            "set-language" => Action::SetLanguage(Language::from_str(arg).ok_or_else(|| invalid("language"))?),
            "set-page" => Action::SetPage(arg.parse().map_err(|_| invalid("page"))?),
            "open-edit" => Action::OpenEdit(arg.parse().map_err(|_| invalid("id"))?),
            "delete" => Action::Delete(arg.parse().map_err(|_| invalid("id"))?),
            "cancel-edit" => Action::CancelEdit,
            "commit-edit" => Action::CommitEdit,
            "submit-form" => Action::SubmitForm,
            "none" => Action::Ignore,
            other => {
                return Err(PortalError::InvalidValue {
                    field: "action",
                    value: other.to_string(),
                });
            }
        };
        Ok(parsed)
    }

    /// Parse an input event from a control with `data-scope`, `name` and `value`
    pub fn from_input(scope: &str, name: &str, value: &str) -> Result<Self> {
        let update = FieldUpdate::parse(name, value)?;
        match scope {
            "edit" => Ok(Action::UpdateDraft(update)),
            "form" => Ok(Action::UpdateForm(update)),
            other => Err(PortalError::InvalidValue {
                field: "scope",
                value: other.to_string(),
            }),
        }
    }
}

/// Whole-application state
pub struct App<S, P> {
    shell: Shell,
    list: EmployeeList,
    form: EmployeeForm,
    repo: EmployeeRepository<S>,
    platform: P,
}

impl<S: KeyValueStore, P: Platform> App<S, P> {
    /// Build the app for an initial collection and fragment
    pub fn new(
        config: &AppConfig,
        repo: EmployeeRepository<S>,
        platform: P,
        employees: Vec<Employee>,
        fragment: &str,
    ) -> Self {
        let shell = Shell::new(config.default_language, fragment);
        let mut list = EmployeeList::new(employees, config.page_size);
        list.lang = shell.lang();
        Self {
            shell,
            list,
            form: EmployeeForm::new(),
            repo,
            platform,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn list(&self) -> &EmployeeList {
        &self.list
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn repository(&self) -> &EmployeeRepository<S> {
        &self.repo
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Apply one action. A failed list operation leaves the collection as stored;
    /// a failed submit keeps the draft unless an id was already minted.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::RouteChanged(fragment) => {
                match self.shell.on_hash_change(&fragment) {
                    Route::Employees => self.list.reload(&self.repo)?,
                    Route::Add => self.form.reset(),
                }
                Ok(())
            }
            Action::SetLanguage(lang) => {
                self.shell.set_language(lang);
                self.list.lang = lang;
                Ok(())
            }
            Action::SetPage(page) => self.list.set_page(page),
            Action::OpenEdit(id) => self.list.open_edit(id),
            Action::UpdateDraft(update) => {
                self.list.update_draft_field(update);
                Ok(())
            }
            Action::CancelEdit => {
                self.list.cancel_edit();
                Ok(())
            }
            Action::CommitEdit => self.list.commit_edit(&self.repo),
            Action::Delete(id) => self.list.delete(id, &self.repo, &self.platform).map(|_| ()),
            Action::UpdateForm(update) => {
                self.form.update_field(update);
                Ok(())
            }
            Action::SubmitForm => self.form.submit(&self.repo, &self.platform).map(|_| ()),
            Action::Ignore => Ok(()),
        }
    }

    /// Dispatch and log failures instead of returning them
    pub fn handle(&mut self, action: Action) {
        let label = format!("{:?}", action);
        if let Err(e) = self.dispatch(action) {
            log::warn!("{} failed: {}", label, e);
        }
    }

    /// Full page markup for the current state
    pub fn render(&self) -> String {
        render::page(&self.shell, &self.list, &self.form)
    }
}
