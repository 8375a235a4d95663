use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_view::nav::nav_items;
use pkg_view::session::Session;
use tracing::{info, warn};

mod api;
#[cfg(feature = "server")]
mod backend;
mod components;
#[cfg(feature = "server")]
mod config;
mod pages;

use components::Header;
use pages::*;

// ============================================================
// Routes
// ============================================================
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[redirect("/", || Route::SecretList {})]
        #[route("/secret")]
        SecretList {},
        #[route("/secret/new")]
        SecretNew {},
        #[route("/secret/:name")]
        SecretDetails { name: String },
        #[route("/pod/:namespace/:name")]
        PodDetails { namespace: String, name: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Navigate to a path produced by `pkg_view::actions`. `None` means the
/// action has no target and nothing happens.
pub(crate) fn go(nav: Navigator, target: Option<String>) {
    let Some(path) = target else {
        return;
    };
    match path.parse::<Route>() {
        Ok(route) => {
            info!("navigate: {}", path);
            nav.push(route);
        }
        Err(e) => warn!("Cannot navigate to {}: {}", path, e),
    }
}

// ============================================================
// Assets
// ============================================================
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    // Install the logger before launch so startup messages are printed.
    dioxus::logger::initialize_default();

    #[cfg(feature = "server")]
    {
        if let Err(e) = config::load().and_then(backend::install) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

// ============================================================
// Layout
// ============================================================
#[component]
fn Layout() -> Element {
    let mut session = use_signal(Session::default);
    let route: Route = use_route();
    use_context_provider(move || session);

    // Pick up the server's default namespace once, unless the user already chose one.
    let defaults = use_resource(|| async move { api::get_default_namespace().await.ok() });
    let mut defaults_applied = use_signal(|| false);
    use_effect(move || {
        if let Some(Some(ns)) = defaults.read().as_ref() {
            if !*defaults_applied.peek() {
                defaults_applied.set(true);
                if !ns.is_empty() && !session.peek().has_namespace() {
                    session.write().update_namespace(ns.clone());
                }
            }
        }
    });

    let current = route.to_string();
    let entries: Vec<(String, String, &'static str, &'static str)> = nav_items()
        .into_iter()
        .map(|item| {
            let cls = if current == item.path {
                "flex items-center gap-2 pl-5 pr-3 py-1.5 rounded-lg text-[13px] font-medium text-blue-400 bg-blue-500/10"
            } else {
                "flex items-center gap-2 pl-5 pr-3 py-1.5 rounded-lg text-[13px] font-medium text-slate-500 hover:text-slate-300 hover:bg-slate-800/60 transition-all"
            };
            (item.path.clone(), item.path, cls, item.title)
        })
        .collect();
    let router = navigator();

    rsx! {
        div { class: "flex min-h-screen",
            // Sidebar
            nav { class: "w-56 bg-slate-900 border-r border-slate-800 fixed top-0 left-0 bottom-0 flex flex-col",
                div { class: "px-5 py-5 border-b border-slate-800",
                    h1 { class: "text-lg font-bold text-white tracking-tight", "kubedeck" }
                    p { class: "text-[10px] text-slate-500 uppercase tracking-widest mt-0.5", "management" }
                }

                div { class: "flex-1 px-3 py-3 space-y-0.5 overflow-y-auto",
                    p { class: "text-[10px] text-slate-500 uppercase tracking-widest px-2 mb-1.5 flex items-center gap-1.5",
                        Icon { width: 12, height: 12, icon: LdKeyRound }
                        span { "Secret" }
                    }
                    for (key, path, cls, title) in entries {
                        button {
                            key: "{key}",
                            class: cls,
                            onclick: move |_| go(router, Some(path.clone())),
                            span { "{title}" }
                        }
                    }
                }
            }

            // Main
            div { class: "ml-56 flex-1 flex flex-col min-h-screen",
                Header {}
                main { class: "flex-1 p-8",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
