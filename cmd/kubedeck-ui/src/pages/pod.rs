use dioxus::prelude::*;
use pkg_view::actions::secret_list_path;
use pkg_view::pods::related_pods;
use tracing::warn;

use crate::api;
use crate::components::Breadcrumbs;

const TH: &str = "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold";

/// Pods belonging to `name` in `namespace`.
#[component]
pub fn PodDetails(namespace: String, name: String) -> Element {
    // Re-fetch when the router reuses this page for another namespace.
    let pods = use_resource(use_reactive!(|namespace| async move {
        api::get_pods(namespace).await.unwrap_or_else(|e| {
            warn!("Failed to load pods: {}", e);
            Vec::new()
        })
    }));
    let data = pods.read();
    let rows: Vec<_> = data
        .as_ref()
        .map(|all| related_pods(all, &name).into_iter().cloned().collect())
        .unwrap_or_default();

    rsx! {
        Breadcrumbs {
            heading: "{name}",
            links: vec![
                ("Secret".to_string(), Some(secret_list_path())),
                (namespace.clone(), None),
                (name.clone(), None),
            ],
            span { class: "text-xs text-slate-500 font-mono", "{namespace}/{name}" }
        }

        div { class: "bg-slate-900 border border-slate-800 rounded-xl overflow-hidden",
            table { class: "w-full",
                thead {
                    tr { class: "border-b border-slate-800",
                        th { class: TH, "Name" }
                        th { class: TH, "Status" }
                        th { class: TH, "Node" }
                        th { class: TH, "ID" }
                    }
                }
                tbody {
                    if data.is_none() {
                        tr { td { colspan: "4", class: "text-center py-16 text-slate-500 text-sm", "Loading..." } }
                    } else if rows.is_empty() {
                        tr { td { colspan: "4", class: "text-center py-16 text-slate-500 text-sm", "No pods found" } }
                    } else {
                        for pod in rows {
                            tr { key: "{pod.id}-{pod.name}", class: "border-b border-slate-800/50 hover:bg-slate-800/30 transition-colors",
                                td { class: "px-5 py-3 text-sm text-slate-300 font-medium", "{pod.name}" }
                                td { class: "px-5 py-3", StatusBadge { status: pod.status.clone() } }
                                td { class: "px-5 py-3 text-xs text-slate-500", "{pod.node_id.as_deref().unwrap_or(\"-\")}" }
                                td { class: "px-5 py-3 text-xs font-mono text-slate-600", "{pod.id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: String) -> Element {
    let cls = match status.as_str() {
        "Running" | "Succeeded" => "bg-emerald-500/10 text-emerald-400 border border-emerald-500/20",
        "Pending" | "Scheduled" => "bg-amber-500/10 text-amber-400 border border-amber-500/20",
        "Failed" | "Terminated" => "bg-red-500/10 text-red-400 border border-red-500/20",
        _ => "bg-slate-500/10 text-slate-400 border border-slate-500/20",
    };
    rsx! {
        span { class: "inline-block px-2.5 py-0.5 rounded-full text-[11px] font-medium {cls}", "{status}" }
    }
}
