//! Shell: language selection and hash routing

use crate::consts::{ROUTE_ADD, ROUTE_EMPLOYEES};
use crate::i18n::Language;

/// Mounted view, derived from the location fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Employees,
    Add,
}

impl Route {
    /// `#/add` mounts the form; anything else is the list
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment == ROUTE_ADD {
            Route::Add
        } else {
            Route::Employees
        }
    }

    pub fn fragment(&self) -> &'static str {
        match self {
            Route::Employees => ROUTE_EMPLOYEES,
            Route::Add => ROUTE_ADD,
        }
    }
}

/// Shell state
#[derive(Debug, Clone, Default)]
pub struct Shell {
    lang: Language,
    route: Route,
    /// Raw fragment, used to highlight the active nav link
    fragment: String,
}

impl Shell {
    pub fn new(lang: Language, fragment: &str) -> Self {
        Self {
            lang,
            route: Route::from_fragment(fragment),
            fragment: fragment.to_string(),
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn set_language(&mut self, lang: Language) {
        if self.lang != lang {
            log::info!("Language switched to {}", lang.code());
        }
        self.lang = lang;
    }

    /// Apply a `hashchange`; every change remounts the routed view
    pub fn on_hash_change(&mut self, fragment: &str) -> Route {
        self.fragment = fragment.to_string();
        let route = Route::from_fragment(fragment);
        if route != self.route {
            log::info!("Route {:?} -> {:?}", self.route, route);
        }
        self.route = route;
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_fragment() {
        assert_eq!(Route::from_fragment("#/add"), Route::Add);
        assert_eq!(Route::from_fragment("#/employees"), Route::Employees);
        assert_eq!(Route::from_fragment(""), Route::Employees);
        assert_eq!(Route::from_fragment("#/edit/5"), Route::Employees);
    }

    #[test]
    fn test_hash_change_transitions() {
        let mut shell = Shell::new(Language::En, "");
        assert_eq!(shell.route(), Route::Employees);
        assert_eq!(shell.on_hash_change("#/add"), Route::Add);
        assert_eq!(shell.fragment(), "#/add");
        assert_eq!(shell.on_hash_change("#/employees"), Route::Employees);
    }

    #[test]
    fn test_language_is_shell_local() {
        let mut shell = Shell::default();
        shell.set_language(Language::Tr);
        assert_eq!(shell.lang(), Language::Tr);
        shell.on_hash_change("#/add");
        assert_eq!(shell.lang(), Language::Tr);
    }
}
