use dioxus::prelude::*;

use crate::components::EmptyContent;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "mb-6",
            h2 { class: "text-xl font-semibold text-white", "Page not found" }
            p { class: "text-sm text-slate-400 mt-1 font-mono", "{path}" }
        }
        EmptyContent { title: "Nothing here" }
    }
}
