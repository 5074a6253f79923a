use crate::dialog::{SignInDialog, SignInModal};
use crate::menu::{build_menu, MenuEntry};
use crate::session::{use_session, Session};
use crate::Route;
use dioxus::prelude::*;

/// Builds the menu for a router location, using its rendered path
fn route_menu<D>(route: &Route, session: &Session, dialog: Option<D>) -> Vec<MenuEntry<D>> {
    let path = route.to_string();
    build_menu(Some(path.as_str()), Some(session), dialog)
}

/// Layout drawn above every page: the menu, a divider, then the routed page
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let dialog = try_use_context::<SignInDialog>();

    let entries = route_menu(&route, &session.read(), dialog);

    let items = entries.into_iter().map(|entry| {
        let label = entry.label;
        match entry.page() {
            Some(page) => rsx! {
                li { key: "{label}",
                    Link { to: Route::from(page), "{label}" }
                }
            },
            None => rsx! {
                li { key: "{label}",
                    button {
                        r#type: "button",
                        onclick: move |_| entry.activate(),
                        "{label}"
                    }
                }
            },
        }
    });

    rsx! {
        nav { id: "navbar",
            ul { {items} }
        }
        hr {}
        if dialog.is_some() {
            SignInModal {}
        }
        Outlet::<Route> {}
    }
}
