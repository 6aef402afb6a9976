//! Employee Portal entry point
//!
//! Handles platform-specific initialization and wires DOM events to the app.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

    use employee_portal::AppConfig;
    use employee_portal::persistence::EmployeeRepository;
    use employee_portal::persistence::web::{LocalStorage, fetch_seed};
    use employee_portal::platform::web::{BrowserPlatform, current_fragment};
    use employee_portal::ui::{Action, App};

    type PortalApp = App<LocalStorage, BrowserPlatform>;

    /// Element the app renders into
    const ROOT_ID: &str = "app";

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Employee Portal starting...");

        let config = AppConfig::load();
        let store = match LocalStorage::open() {
            Ok(store) => store,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        let repo = EmployeeRepository::new(store, config.storage_key.clone());

        let seed_url = config.seed_url.clone();
        let employees = match repo.load_or_seed(|| async move { fetch_seed(&seed_url).await }).await {
            Ok(employees) => employees,
            Err(e) => {
                log::error!("Failed to load employees: {}", e);
                Vec::new()
            }
        };

        let app = Rc::new(RefCell::new(App::new(
            &config,
            repo,
            BrowserPlatform,
            employees,
            &current_fragment(),
        )));

        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }
        let Some(root) = document.get_element_by_id(ROOT_ID) else {
            log::error!("No #{} element", ROOT_ID);
            return;
        };

        render(&app, &root);
        setup_hash_routing(app.clone(), root.clone());
        setup_click_handler(app.clone(), root.clone());
        setup_input_handlers(app.clone(), root.clone());
        setup_submit_handler(app, root);

        log::info!("Employee Portal running!");
    }

    /// Full re-render of the current state
    fn render(app: &Rc<RefCell<PortalApp>>, root: &Element) {
        root.set_inner_html(&app.borrow().render());
    }

    fn setup_hash_routing(app: Rc<RefCell<PortalApp>>, root: Element) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            app.borrow_mut()
                .handle(Action::RouteChanged(current_fragment()));
            render(&app, &root);
        });
        let _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Delegated clicks: nearest ancestor carrying `data-action`
    fn setup_click_handler(app: Rc<RefCell<PortalApp>>, root: Element) {
        let root_clone = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(el) = target.closest("[data-action]").ok().flatten() else {
                return;
            };
            let name = el.get_attribute("data-action").unwrap_or_default();
            // Forms act on submit so native required-field checks run first
            if name == "submit-form" {
                return;
            }
            let arg = el.get_attribute("data-arg").unwrap_or_default();
            match Action::from_click(&name, &arg) {
                Ok(Action::Ignore) => return,
                Ok(action) => app.borrow_mut().handle(action),
                Err(e) => {
                    log::warn!("{}", e);
                    return;
                }
            }
            render(&app, &root_clone);
        });
        let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(app: Rc<RefCell<PortalApp>>, root: Element) {
        for event_name in ["input", "change"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let Some(scope) = target.get_attribute("data-scope") else {
                    return;
                };
                let name = target.get_attribute("name").unwrap_or_default();
                let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                    input.value()
                } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
                    select.value()
                } else {
                    return;
                };
                // No re-render: the control already shows the new value
                match Action::from_input(&scope, &name, &value) {
                    Ok(action) => app.borrow_mut().handle(action),
                    Err(e) => log::warn!("{}", e),
                }
            });
            let _ = root.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_submit_handler(app: Rc<RefCell<PortalApp>>, root: Element) {
        let root_clone = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            app.borrow_mut().handle(Action::SubmitForm);
            render(&app, &root_clone);
        });
        let _ = root.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Employee Portal (native) starting...");
    log::info!("Native mode prints the seed as a table - run with `trunk serve` for the web version");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "static/employees.json".to_string());
    if let Err(e) = native::print_first_page(&path) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use employee_portal::persistence::{EmployeeRepository, MemoryStore};
    use employee_portal::platform::HeadlessPlatform;
    use employee_portal::ui::App;
    use employee_portal::{AppConfig, PortalError, Result};

    /// Seed an in-memory store from `path` and print page 1
    pub fn print_first_page(path: &str) -> Result<()> {
        let config = AppConfig::load();
        let seed = std::fs::read_to_string(path).map_err(|e| PortalError::SeedFetch {
            url: path.to_string(),
            reason: e.to_string(),
        })?;

        let repo = EmployeeRepository::new(MemoryStore::new(), config.storage_key.clone());
        let employees = repo.install_seed(&seed)?;
        let app = App::new(&config, repo, HeadlessPlatform, employees, "");
        let list = app.list();

        println!(
            "{:<6} {:<14} {:<14} {:<12} {:<12} {:<10} {:<8}",
            "Id", "First Name", "Last Name", "Born", "Employed", "Dept", "Position"
        );
        for emp in list.current_page_view() {
            println!(
                "{:<6} {:<14} {:<14} {:<12} {:<12} {:<10} {:<8}",
                emp.id,
                emp.first_name,
                emp.last_name,
                emp.date_of_birth,
                emp.employment_date,
                emp.department.as_str(),
                emp.position.as_str()
            );
        }
        println!(
            "\nPage {}/{} ({} employees)",
            list.current_page(),
            list.page_count().max(1),
            list.employees().len()
        );
        Ok(())
    }
}
