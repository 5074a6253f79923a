use crate::session::{use_session, Session};
use dioxus::prelude::*;

#[component]
pub fn Account() -> Element {
    let mut session = use_session();
    let user = session.read().user().cloned();

    rsx! {
        div { id: "account-page",
            h1 { "My Account" }
            match user {
                Some(user) => rsx! {
                    p {
                        strong { "Name:" }
                        " {user.name()}"
                    }
                    if user.is_admin() {
                        p { "Administrator" }
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            log::info!("Signing out");
                            session.set(Session::Anonymous);
                        },
                        "Sign out"
                    }
                },
                None => rsx! {
                    p { "You are not signed in. Use Log In in the navigation bar." }
                },
            }
        }
    }
}
