use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { id: "not-found-page",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
        }
    }
}
