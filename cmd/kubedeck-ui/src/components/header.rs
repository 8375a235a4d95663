use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_view::namespace;
use pkg_view::nav::{self, nav_items};
use pkg_view::session::Session;
use tracing::warn;

use crate::{api, go};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Popover {
    Notifications,
    Account,
}

#[component]
pub fn Header() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let namespaces = use_resource(|| async move {
        match api::get_namespaces().await {
            Ok(names) => names,
            Err(e) => {
                warn!("Failed to load namespaces: {}", e);
                Vec::new()
            }
        }
    });
    let mut query = use_signal(String::new);
    let mut popover = use_signal(|| None::<Popover>);
    let router = navigator();

    let options = namespace::options(&namespaces.read().as_ref().cloned().unwrap_or_default());
    let current_id = namespace::current(&session.read())
        .map(|o| o.id)
        .unwrap_or_default();
    let items = nav_items();
    let hits: Vec<(String, String, String)> = nav::search(&items, &query.read())
        .into_iter()
        .map(|item| (item.path.clone(), item.path.clone(), format!("{} / {}", item.group, item.title)))
        .collect();
    let stretch = session.read().stretch();

    let mut toggle_popover = move |which: Popover| {
        let next = if *popover.read() == Some(which) { None } else { Some(which) };
        popover.set(next);
    };

    rsx! {
        header { class: "header-blur sticky top-0 z-30 h-16 border-b border-slate-800 flex items-center gap-6 px-8",
            // Search
            div { class: "relative w-64",
                span { class: "absolute left-2.5 top-1/2 -translate-y-1/2 text-slate-500",
                    Icon { width: 14, height: 14, icon: LdSearch }
                }
                input {
                    class: "w-full bg-slate-900 border border-slate-800 rounded-md pl-8 pr-3 py-1.5 text-xs text-slate-300 outline-none focus:border-blue-500 transition-colors",
                    placeholder: "Search...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                if !hits.is_empty() {
                    ul { class: "popover left-0 bg-slate-900 border border-slate-700 rounded-md py-1",
                        for (key, path, label) in hits {
                            li {
                                key: "{key}",
                                class: "px-3 py-1.5 text-xs text-slate-300 hover:bg-slate-800 cursor-pointer",
                                onclick: move |_| {
                                    query.set(String::new());
                                    go(router, Some(path.clone()));
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }

            // Namespace
            div { class: "flex-1 flex items-center",
                select {
                    class: "w-64 bg-slate-900 border border-slate-800 rounded-md px-2.5 py-1.5 text-xs text-slate-300 outline-none focus:border-blue-500 transition-colors",
                    value: "{current_id}",
                    onchange: move |evt| namespace::select_value(&mut session.write(), &evt.value()),
                    option { value: "", selected: current_id.is_empty(), "namespace" }
                    for opt in options {
                        option {
                            key: "{opt.id}",
                            value: "{opt.id}",
                            selected: opt.id == current_id,
                            "{opt.label}"
                        }
                    }
                }
            }

            // Actions
            div { class: "flex items-center justify-end gap-1",
                div { class: "relative",
                    button {
                        class: "p-2 rounded-lg text-slate-400 hover:text-white hover:bg-slate-800 transition-colors",
                        title: "Notifications",
                        onclick: move |_| toggle_popover(Popover::Notifications),
                        Icon { width: 18, height: 18, icon: LdBell }
                    }
                    if *popover.read() == Some(Popover::Notifications) {
                        div { class: "popover bg-slate-900 border border-slate-700 rounded-md p-4 text-xs text-slate-400",
                            "No notifications"
                        }
                    }
                }
                button {
                    class: if stretch {
                        "p-2 rounded-lg text-blue-400 bg-blue-500/10 transition-colors"
                    } else {
                        "p-2 rounded-lg text-slate-400 hover:text-white hover:bg-slate-800 transition-colors"
                    },
                    title: "Stretch layout",
                    onclick: move |_| session.write().toggle_stretch(),
                    Icon { width: 18, height: 18, icon: LdSettings }
                }
                div { class: "relative",
                    button {
                        class: "p-2 rounded-lg text-slate-400 hover:text-white hover:bg-slate-800 transition-colors",
                        title: "Account",
                        onclick: move |_| toggle_popover(Popover::Account),
                        Icon { width: 18, height: 18, icon: LdUser }
                    }
                    if *popover.read() == Some(Popover::Account) {
                        div { class: "popover bg-slate-900 border border-slate-700 rounded-md p-4",
                            p { class: "text-sm text-white", "admin" }
                            p { class: "text-xs text-slate-500 mt-0.5", "cluster administrator" }
                        }
                    }
                }
            }
        }
    }
}
