use dioxus::prelude::*;

#[component]
pub fn EmptyContent(title: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-16 text-slate-500",
            p { class: "text-sm font-medium", "{title}" }
        }
    }
}
