use crate::session::use_session;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let signed_in = session.read().is_authenticated();
    let greeting = match session.read().user() {
        Some(user) => format!("Welcome back, {}", user.name()),
        None => "Welcome to MarketWatch".to_string(),
    };

    rsx! {
        div { id: "home-page",
            h1 { "MarketWatch" }
            p { "{greeting}" }
            if !signed_in {
                p { "Log in to keep track of your portfolios and alerts." }
            }
            Link { to: Route::Tickers {}, "Browse tickers" }
        }
    }
}
