//! Web interface components for the MarketWatch application
//!
//! This module contains the Dioxus components that make up the web interface:
//! the navigation bar layout and the pages it links to.

/// Navigation bar layout component
mod navbar;
pub use navbar::Navbar;

/// Landing page component
mod home;
pub use home::Home;

/// Ticker listing component
mod tickers;
pub use tickers::Tickers;

/// Administration components
mod admin;
pub use admin::{Admin, AdminTable};

/// Signed-in user page component
mod account;
pub use account::Account;

/// Catch-all component for unknown paths
mod not_found;
pub use not_found::PageNotFound;
