//! Navigation menu decision logic
//!
//! This module decides which entries the top navigation bar shows, independently
//! of how they are drawn. The [`Navbar`](crate::views::Navbar) component feeds it
//! the current path, the session and the sign-in dialog handle, then renders
//! whatever [`build_menu`] returns.

use crate::dialog::DialogController;
use crate::session::Session;

/// Path fragment on which anonymous visitors are not offered the login control
///
/// Matched anywhere in the path, so `/superadmin-panel` counts as well.
const ADMIN_PATH_FRAGMENT: &str = "admin";

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Tickers,
    Admin,
    Account,
}

impl Page {
    /// Returns the router path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Tickers => "/tickers",
            Page::Admin => "/admin",
            Page::Account => "/me",
        }
    }

    /// Returns the label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "MarketWatch",
            Page::Tickers => "Tickers",
            Page::Admin => "Admin",
            Page::Account => "My Account",
        }
    }
}

/// What a menu entry does when activated
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind<D> {
    /// Navigates to a page
    Link(Page),
    /// Opens the sign-in dialog through the carried controller, if any
    LogIn(Option<D>),
}

/// A single item of the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<D> {
    pub label: &'static str,
    pub kind: EntryKind<D>,
}

impl<D> MenuEntry<D> {
    fn link(page: Page) -> Self {
        MenuEntry {
            label: page.label(),
            kind: EntryKind::Link(page),
        }
    }

    fn log_in(dialog: Option<D>) -> Self {
        MenuEntry {
            label: "Log In",
            kind: EntryKind::LogIn(dialog),
        }
    }

    /// Returns the page this entry links to, `None` for the login control
    pub fn page(&self) -> Option<Page> {
        match &self.kind {
            EntryKind::Link(page) => Some(*page),
            EntryKind::LogIn(_) => None,
        }
    }
}

impl<D: DialogController> MenuEntry<D> {
    /// Runs the entry's action
    ///
    /// Only the login control has one: it asks the dialog controller to open the
    /// sign-in dialog. Links are followed by the router, not here.
    pub fn activate(&self) {
        match &self.kind {
            EntryKind::LogIn(Some(dialog)) => dialog.open_dialog(),
            EntryKind::LogIn(None) => {
                log::warn!("Log In activated but no sign-in dialog is available");
            }
            EntryKind::Link(_) => {}
        }
    }
}

/// Builds the ordered list of navigation entries
///
/// The three fixed links always come first. A signed-in user who is not an
/// administrator gets a link to their account, administrators get nothing more.
/// Anonymous visitors get the login control unless the current path contains
/// `admin` anywhere (case-sensitive). A missing session counts as anonymous and
/// a missing path as one outside the admin area.
pub fn build_menu<D>(
    route: Option<&str>,
    session: Option<&Session>,
    dialog: Option<D>,
) -> Vec<MenuEntry<D>> {
    let mut entries = vec![
        MenuEntry::link(Page::Home),
        MenuEntry::link(Page::Tickers),
        MenuEntry::link(Page::Admin),
    ];

    match session.and_then(Session::user) {
        Some(user) => {
            if !user.is_admin() {
                entries.push(MenuEntry::link(Page::Account));
            }
        }
        None => {
            let on_admin_path = route.is_some_and(|path| path.contains(ADMIN_PATH_FRAGMENT));
            if !on_admin_path {
                entries.push(MenuEntry::log_in(dialog));
            }
        }
    }

    log::debug!(
        "Menu for route {:?}: {:?}",
        route,
        entries.iter().map(|e| e.label).collect::<Vec<_>>()
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct CountingDialog {
        opened: Rc<Cell<u32>>,
    }

    impl DialogController for CountingDialog {
        fn open_dialog(&self) {
            self.opened.set(self.opened.get() + 1);
        }
    }

    impl PartialEq for CountingDialog {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.opened, &other.opened)
        }
    }

    fn member() -> Session {
        Session::Authenticated(User::new("alice", false))
    }

    fn admin() -> Session {
        Session::Authenticated(User::new("root", true))
    }

    fn is_log_in(entry: &MenuEntry<CountingDialog>) -> bool {
        matches!(entry.kind, EntryKind::LogIn(_))
    }

    fn trailing(entries: &[MenuEntry<CountingDialog>]) -> Option<&MenuEntry<CountingDialog>> {
        entries.get(3)
    }

    #[test]
    fn test_fixed_entries_always_first() {
        let routes = [None, Some("/"), Some("/admin"), Some("/tickers"), Some("/me")];
        let sessions = [None, Some(Session::Anonymous), Some(member()), Some(admin())];
        for route in routes {
            for session in &sessions {
                let entries = build_menu(route, session.as_ref(), Some(CountingDialog::default()));
                let pages: Vec<_> = entries.iter().take(3).map(MenuEntry::page).collect();
                assert_eq!(
                    pages,
                    vec![Some(Page::Home), Some(Page::Tickers), Some(Page::Admin)]
                );
                assert!(entries.len() <= 4);
            }
        }
    }

    #[test]
    fn test_fixed_entry_labels_and_paths() {
        let entries = build_menu::<CountingDialog>(Some("/"), None, None);
        assert_eq!(entries[0].label, "MarketWatch");
        assert_eq!(entries[1].label, "Tickers");
        assert_eq!(entries[2].label, "Admin");
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Tickers.path(), "/tickers");
        assert_eq!(Page::Admin.path(), "/admin");
        assert_eq!(Page::Account.path(), "/me");
    }

    #[test]
    fn test_member_gets_account_link_on_any_route() {
        for route in [None, Some("/"), Some("/tickers"), Some("/admin/users")] {
            let entries = build_menu(route, Some(&member()), Some(CountingDialog::default()));
            let last = trailing(&entries).unwrap();
            assert_eq!(last.page(), Some(Page::Account));
            assert_eq!(last.label, "My Account");
            assert!(!is_log_in(last));
        }
    }

    #[test]
    fn test_admin_gets_no_trailing_entry() {
        for route in [None, Some("/"), Some("/tickers"), Some("/admin/users")] {
            let entries = build_menu(route, Some(&admin()), Some(CountingDialog::default()));
            assert_eq!(entries.len(), 3);
        }
    }

    #[test]
    fn test_anonymous_gets_log_in_outside_admin() {
        for session in [None, Some(Session::Anonymous)] {
            for route in [None, Some("/"), Some("/tickers"), Some("/me"), Some("/Admin")] {
                let entries = build_menu(route, session.as_ref(), Some(CountingDialog::default()));
                let last = trailing(&entries).unwrap();
                assert!(is_log_in(last));
                assert_eq!(last.label, "Log In");
                assert_eq!(last.page(), None);
            }
        }
    }

    #[test]
    fn test_anonymous_on_admin_substring_gets_nothing() {
        for route in ["/admin", "/admin/users", "/superadmin", "/superadmin-panel"] {
            let entries = build_menu(Some(route), None, Some(CountingDialog::default()));
            assert_eq!(entries.len(), 3, "route {route}");
        }
    }

    #[test]
    fn test_admin_match_is_case_sensitive() {
        for route in ["/Admin", "/ADMIN/users", "/SuperAdmin"] {
            let entries = build_menu(Some(route), None, Some(CountingDialog::default()));
            assert!(trailing(&entries).is_some_and(is_log_in), "route {route}");
        }
        for route in ["/tickers/admin-notes", "/superadmin"] {
            let entries = build_menu(Some(route), None, Some(CountingDialog::default()));
            assert_eq!(entries.len(), 3, "route {route}");
        }
    }

    #[test]
    fn test_scenario_table() {
        let cases: [(&str, Option<Session>, Option<Page>, bool); 5] = [
            ("/", None, None, true),
            ("/admin", None, None, false),
            ("/tickers", Some(member()), Some(Page::Account), false),
            ("/admin/users", Some(admin()), None, false),
            ("/superadmin-panel", None, None, false),
        ];
        for (route, session, page, log_in) in cases {
            let entries = build_menu(Some(route), session.as_ref(), Some(CountingDialog::default()));
            assert_eq!(trailing(&entries).and_then(MenuEntry::page), page, "route {route}");
            assert_eq!(
                trailing(&entries).is_some_and(is_log_in),
                log_in,
                "route {route}"
            );
        }
    }

    #[test]
    fn test_log_in_activation_opens_dialog_once() {
        let dialog = CountingDialog::default();
        let entries = build_menu(Some("/"), None, Some(dialog.clone()));
        entries[3].activate();
        assert_eq!(dialog.opened.get(), 1);
        entries[3].activate();
        assert_eq!(dialog.opened.get(), 2);
    }

    #[test]
    fn test_link_activation_does_not_open_dialog() {
        let dialog = CountingDialog::default();
        let entries = build_menu(Some("/"), None, Some(dialog.clone()));
        for entry in &entries[..3] {
            entry.activate();
        }
        assert_eq!(dialog.opened.get(), 0);
    }

    #[test]
    fn test_log_in_without_dialog_is_noop() {
        let entries = build_menu::<CountingDialog>(Some("/tickers"), None, None);
        assert_eq!(entries[3].kind, EntryKind::LogIn(None));
        let before = entries.clone();
        entries[3].activate();
        assert_eq!(entries, before);
        assert_eq!(entries[3].kind, EntryKind::LogIn(None));
    }

    #[test]
    fn test_build_menu_is_deterministic() {
        let dialog = CountingDialog::default();
        let first = build_menu(Some("/tickers"), Some(&member()), Some(dialog.clone()));
        let second = build_menu(Some("/tickers"), Some(&member()), Some(dialog.clone()));
        assert_eq!(first, second);
        assert_eq!(dialog.opened.get(), 0);
    }
}
