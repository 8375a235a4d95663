use dioxus::prelude::*;
use pkg_view::actions::{secret_list_path, RowAction};
use pkg_view::columns::format_create_time;
use pkg_view::session::Session;
use tracing::warn;

use crate::components::{Breadcrumbs, EmptyContent};
use crate::{api, go};

/// Read-only view of one secret, looked up by name in the session namespace.
#[component]
pub fn SecretDetails(name: String) -> Element {
    let session = use_context::<Signal<Session>>();
    let router = navigator();
    let secrets = use_resource(move || {
        let ns = session.read().namespace().to_string();
        async move {
            api::get_secrets(ns).await.unwrap_or_else(|e| {
                warn!("Failed to load secrets: {}", e);
                Vec::new()
            })
        }
    });

    let found = secrets
        .read()
        .as_ref()
        .and_then(|rows| rows.iter().find(|r| r.name == name).cloned());
    let loading = secrets.read().is_none();
    let pod_target = found.as_ref().and_then(|r| RowAction::OpenPod.target(r));

    rsx! {
        Breadcrumbs {
            heading: "{name}",
            links: vec![
                ("Secret".to_string(), Some(secret_list_path())),
                (name.clone(), None),
            ],
            button {
                class: "px-3 py-1.5 rounded-md text-sm text-slate-300 border border-slate-700 hover:bg-slate-800",
                onclick: move |_| go(router, Some(secret_list_path())),
                "Back"
            }
        }

        if loading {
            p { class: "text-sm text-slate-500", "Loading..." }
        } else if let Some(row) = found {
            div { class: "bg-slate-900 border border-slate-800 rounded-xl p-6 grid grid-cols-2 gap-y-4 gap-x-8 text-sm",
                Field { label: "Name", value: row.name.clone() }
                Field { label: "Namespace", value: row.namespace.clone() }
                Field { label: "Type", value: row.secret_type.clone() }
                Field { label: "Create at", value: format_create_time(&row.create_time) }
                Field { label: "Complete", value: row.is_complete.to_string() }
                div {
                    p { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "Pods" }
                    button {
                        class: "mt-1 text-blue-400 hover:underline",
                        onclick: move |_| go(router, pod_target.clone()),
                        "Show pods"
                    }
                }
            }
        } else {
            EmptyContent { title: "Secret not found" }
        }
    }
}

#[component]
fn Field(label: String, value: String) -> Element {
    rsx! {
        div {
            p { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "{label}" }
            p { class: "mt-1 text-slate-200", "{value}" }
        }
    }
}
