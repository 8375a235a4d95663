use dioxus::prelude::*;

use crate::go;

/// Page heading with a trail of `(label, path)` links. The last crumb, or any
/// crumb without a path, is plain text.
#[component]
pub fn Breadcrumbs(heading: String, links: Vec<(String, Option<String>)>, children: Element) -> Element {
    let router = navigator();
    let last = links.len().saturating_sub(1);

    rsx! {
        div { class: "flex items-end justify-between mb-6",
            div {
                h2 { class: "text-xl font-semibold text-white", "{heading}" }
                div { class: "flex items-center gap-2 text-sm text-slate-500 mt-1",
                    for (idx, (label, path)) in links.into_iter().enumerate() {
                        if idx > 0 {
                            span { class: "text-slate-700", "•" }
                        }
                        match path {
                            Some(path) if idx < last => rsx! {
                                button {
                                    class: "hover:text-slate-300 transition-colors",
                                    onclick: move |_| go(router, Some(path.clone())),
                                    "{label}"
                                }
                            },
                            _ => rsx! { span { class: "text-slate-400", "{label}" } },
                        }
                    }
                }
            }
            {children}
        }
    }
}
