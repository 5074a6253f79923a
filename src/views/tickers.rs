use dioxus::prelude::*;

#[component]
pub fn Tickers() -> Element {
    rsx! {
        div { id: "tickers-page",
            h1 { "Tickers" }
            p { "No tickers loaded yet." }
        }
    }
}
