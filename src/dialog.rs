//! Sign-in dialog
//!
//! The navigation bar only needs something it can ask to open the dialog, which is
//! what [`DialogController`] captures. [`SignInDialog`] is the handle the
//! application shares through the Dioxus context, and [`SignInModal`] draws it.

use crate::session::{use_session, Session, User};
use dioxus::prelude::*;

/// Something able to present the sign-in dialog
pub trait DialogController {
    fn open_dialog(&self);
}

/// Open/closed state of the sign-in dialog
#[derive(Clone, Copy, PartialEq)]
pub struct SignInDialog {
    open: Signal<bool>,
}

impl SignInDialog {
    pub fn new(open: Signal<bool>) -> Self {
        SignInDialog { open }
    }

    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    #[cfg(test)]
    fn peek_open(&self) -> bool {
        *self.open.peek()
    }

    pub fn close(&self) {
        let mut open = self.open;
        open.set(false);
    }
}

impl DialogController for SignInDialog {
    fn open_dialog(&self) {
        let mut open = self.open;
        open.set(true);
    }
}

/// Modal asking for a name; binds the session on submit
///
/// No credentials are checked here.
#[component]
pub fn SignInModal() -> Element {
    let dialog = use_context::<SignInDialog>();
    let mut session = use_session();
    let mut name_input = use_signal(String::new);
    let mut admin_input = use_signal(|| false);

    if !dialog.is_open() {
        return rsx! {};
    }

    rsx! {
        div { id: "sign-in-dialog", class: "modal",
            form {
                onsubmit: move |event| {
                    event.prevent_default();
                    let name = name_input.read().trim().to_string();
                    if name.is_empty() {
                        log::warn!("Ignoring sign-in with an empty name");
                        return;
                    }
                    let is_admin = *admin_input.read();
                    log::info!("Signed in as {} (admin: {})", name, is_admin);
                    session.set(Session::Authenticated(User::new(name, is_admin)));
                    name_input.set(String::new());
                    admin_input.set(false);
                    dialog.close();
                },
                h2 { "Log In" }
                label { r#for: "sign-in-name", "Name :" }
                input {
                    r#type: "text",
                    id: "sign-in-name",
                    value: "{name_input}",
                    oninput: move |event| name_input.set(event.value()),
                }
                label { r#for: "sign-in-admin", "Administrator" }
                input {
                    r#type: "checkbox",
                    id: "sign-in-admin",
                    checked: admin_input(),
                    onchange: move |event| admin_input.set(event.checked()),
                }
                button { r#type: "submit", "Sign in" }
                button {
                    r#type: "button",
                    onclick: move |_| dialog.close(),
                    "Cancel"
                }
            }
        }
    }
}
