//! HTML markup for the shell, list, edit modal and form
//!
//! Interactive elements carry `data-action` / `data-arg` attributes and
//! inputs carry `data-scope` (`edit` or `form`) plus the field `name`; the
//! browser entry point turns those into [`Action`](super::app::Action)s.

use std::fmt::Write;

use crate::i18n::{Language, Text};
use crate::model::{Department, Employee, EmployeeDraft, Position};

use super::form::EmployeeForm;
use super::list::EmployeeList;
use super::shell::{Route, Shell};

/// Escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Header, routed view and footer
pub fn page(shell: &Shell, list: &EmployeeList, form: &EmployeeForm) -> String {
    let mut html = String::new();
    html.push_str(&header(shell));
    html.push_str("<main>");
    match shell.route() {
        Route::Add => html.push_str(&form_view(form)),
        Route::Employees => html.push_str(&list_view(list)),
    }
    html.push_str("</main>");
    html.push_str(&footer(shell.lang()));
    html
}

pub fn header(shell: &Shell) -> String {
    let lang = shell.lang();
    let active = |route: Route| {
        if shell.fragment() == route.fragment() {
            " class=\"active\""
        } else {
            ""
        }
    };

    let mut html = String::from("<header><img src=\"/ing_footer.png\" alt=\"Logo\" class=\"logo\"/><nav>");
    let _ = write!(
        html,
        "<a href=\"{}\"{}>{}</a><a href=\"{}\"{}>{}</a>",
        Route::Employees.fragment(),
        active(Route::Employees),
        escape(Text::EmployeeList.translate(lang)),
        Route::Add.fragment(),
        active(Route::Add),
        escape(Text::AddEmployee.translate(lang)),
    );

    html.push_str("<span class=\"lang-switcher\">");
    for (i, option) in Language::ALL.iter().enumerate() {
        if i > 0 {
            html.push_str("<span>|</span>");
        }
        let class = if *option == lang { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<button data-action=\"set-language\" data-arg=\"{code}\"{class}>{code}</button>",
            code = option.code(),
        );
    }
    html.push_str("</span></nav></header>");
    html
}

pub fn footer(lang: Language) -> String {
    format!(
        "<footer><img src=\"/ing_footer.png\" alt=\"ING Footer Logo\" class=\"logo\"/><p>{}</p></footer>",
        escape(Text::Footer.translate(lang))
    )
}

/// Employee table, pagination and (when open) the edit modal
pub fn list_view(list: &EmployeeList) -> String {
    let lang = list.lang;
    let columns = [
        Text::FirstName,
        Text::LastName,
        Text::DateOfBirth,
        Text::EmploymentDate,
        Text::Phone,
        Text::Email,
        Text::Department,
        Text::Position,
        Text::Actions,
    ];

    let mut html = String::from("<div class=\"table-wrapper\"><table><thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", escape(column.translate(lang)));
    }
    html.push_str("</tr></thead><tbody>");

    for emp in list.current_page_view() {
        html.push_str("<tr>");
        let cells = [
            (Text::FirstName, emp.first_name.as_str()),
            (Text::LastName, emp.last_name.as_str()),
            (Text::DateOfBirth, emp.date_of_birth.as_str()),
            (Text::EmploymentDate, emp.employment_date.as_str()),
            (Text::Phone, emp.phone.as_deref().unwrap_or("")),
            (Text::Email, emp.email.as_deref().unwrap_or("")),
            (Text::Department, emp.department.as_str()),
            (Text::Position, emp.position.as_str()),
        ];
        for (label, value) in cells {
            let _ = write!(
                html,
                "<td data-label=\"{}\">{}</td>",
                escape(label.translate(lang)),
                escape(value)
            );
        }
        let _ = write!(
            html,
            "<td data-label=\"{actions}\" class=\"actions\">\
             <button class=\"edit-btn\" data-action=\"open-edit\" data-arg=\"{id}\">{edit}</button>\
             <button class=\"delete-btn\" data-action=\"delete\" data-arg=\"{id}\">{delete}</button>\
             </td></tr>",
            actions = escape(Text::Actions.translate(lang)),
            id = emp.id,
            edit = escape(Text::Edit.translate(lang)),
            delete = escape(Text::Delete.translate(lang)),
        );
    }
    html.push_str("</tbody></table>");
    html.push_str(&pagination(list));
    html.push_str("</div>");

    if let Some(draft) = list.edit_draft() {
        html.push_str(&edit_modal(draft, lang));
    }
    html
}

/// One button per page, current page disabled; nothing for a single page
pub fn pagination(list: &EmployeeList) -> String {
    let pages = list.page_count();
    if pages <= 1 {
        return String::new();
    }
    let mut html = String::from("<div class=\"pagination\">");
    for page in 1..=pages {
        let disabled = if page == list.current_page() { " disabled" } else { "" };
        let _ = write!(
            html,
            "<button data-action=\"set-page\" data-arg=\"{page}\"{disabled}>{page}</button>"
        );
    }
    html.push_str("</div>");
    html
}

fn edit_modal(draft: &Employee, lang: Language) -> String {
    let mut html = String::from(
        "<div class=\"modal-backdrop\" data-action=\"cancel-edit\"><div class=\"modal\" data-action=\"none\">",
    );
    let _ = write!(html, "<h3>{}</h3>", escape(Text::EditTitle.translate(lang)));
    let scope = "edit";
    html.push_str(&text_input(scope, "firstName", "text", &draft.first_name, Text::FirstName.translate(lang), true));
    html.push_str(&text_input(scope, "lastName", "text", &draft.last_name, Text::LastName.translate(lang), true));
    html.push_str(&text_input(scope, "dateOfBirth", "date", &draft.date_of_birth, "", true));
    html.push_str(&text_input(scope, "employmentDate", "date", &draft.employment_date, "", true));
    html.push_str(&text_input(scope, "phone", "text", draft.phone.as_deref().unwrap_or(""), Text::Phone.translate(lang), false));
    html.push_str(&text_input(scope, "email", "text", draft.email.as_deref().unwrap_or(""), Text::Email.translate(lang), false));
    html.push_str(&department_select(scope, draft.department));
    html.push_str(&position_select(scope, draft.position));
    let _ = write!(
        html,
        "<div class=\"modal-actions\">\
         <button data-action=\"cancel-edit\">{}</button>\
         <button class=\"edit-btn\" data-action=\"commit-edit\">{}</button>\
         </div></div></div>",
        escape(Text::Cancel.translate(lang)),
        escape(Text::Save.translate(lang)),
    );
    html
}

/// Add-employee form in the form's own language
pub fn form_view(form: &EmployeeForm) -> String {
    let lang = form.lang;
    let d: &EmployeeDraft = form.draft();
    let scope = "form";
    let labelled = |label: Text, control: String| {
        format!("<label>{}:{}</label>", escape(label.translate(lang)), control)
    };

    let mut html = String::from("<div class=\"form-container\">");
    let _ = write!(html, "<h2>{}</h2>", escape(Text::AddEmployee.translate(lang)));
    html.push_str("<form data-action=\"submit-form\">");
    html.push_str(&labelled(Text::FirstName, text_input(scope, "firstName", "text", &d.first_name, "", true)));
    html.push_str(&labelled(Text::LastName, text_input(scope, "lastName", "text", &d.last_name, "", true)));
    html.push_str(&labelled(Text::DateOfBirth, text_input(scope, "dateOfBirth", "date", &d.date_of_birth, "", true)));
    html.push_str(&labelled(Text::EmploymentDate, text_input(scope, "employmentDate", "date", &d.employment_date, "", true)));
    html.push_str(&labelled(Text::Phone, text_input(scope, "phone", "text", &d.phone, "", false)));
    html.push_str(&labelled(Text::Email, text_input(scope, "email", "text", &d.email, "", false)));
    html.push_str(&labelled(Text::Department, department_select(scope, d.department)));
    html.push_str(&labelled(Text::Position, position_select(scope, d.position)));
    let _ = write!(
        html,
        "<button type=\"submit\">{}</button></form></div>",
        escape(Text::Save.translate(lang))
    );
    html
}

fn text_input(scope: &str, name: &str, kind: &str, value: &str, placeholder: &str, required: bool) -> String {
    let mut html = format!(
        "<input data-scope=\"{scope}\" name=\"{name}\" type=\"{kind}\" value=\"{}\"",
        escape(value)
    );
    if !placeholder.is_empty() {
        let _ = write!(html, " placeholder=\"{}\"", escape(placeholder));
    }
    if required {
        html.push_str(" required");
    }
    html.push_str("/>");
    html
}

fn select<'a>(scope: &str, name: &str, options: impl Iterator<Item = (&'a str, bool)>) -> String {
    let mut html = format!("<select data-scope=\"{scope}\" name=\"{name}\">");
    for (value, selected) in options {
        let selected = if selected { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{value}\"{selected}>{value}</option>");
    }
    html.push_str("</select>");
    html
}

fn department_select(scope: &str, current: Department) -> String {
    select(
        scope,
        "department",
        Department::ALL.iter().map(|d| (d.as_str(), *d == current)),
    )
}

fn position_select(scope: &str, current: Position) -> String {
    select(
        scope,
        "position",
        Position::ALL.iter().map(|p| (p.as_str(), *p == current)),
    )
}
