//! Visitor session shared across the web interface
//!
//! The root component provides a `Signal<Session>` through the Dioxus context;
//! views read it with [`use_session`].

use dioxus::prelude::*;

/// An authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    name: String,
    is_admin: bool,
}

impl User {
    pub fn new(name: impl Into<String>, is_admin: bool) -> Self {
        User {
            name: name.into(),
            is_admin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the user administers the site
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// Authentication state of the current visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// Returns the signed-in user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}

/// Returns the session signal provided by [`App`](crate::App)
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
