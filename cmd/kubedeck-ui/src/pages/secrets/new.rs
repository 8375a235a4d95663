use dioxus::prelude::*;
use pkg_view::actions::{new_secret_path, secret_list_path};
use pkg_view::form::{NewSecretForm, SECRET_TYPES};
use pkg_view::session::Session;
use tracing::{info, warn};

use crate::components::Breadcrumbs;
use crate::{api, go};

const INPUT: &str = "w-full bg-slate-950 border border-slate-800 rounded-md px-3 py-2 text-sm text-slate-300 outline-none focus:border-blue-500 transition-colors";
const LABEL: &str = "block text-[11px] uppercase tracking-wider text-slate-500 font-semibold mb-1.5";

#[component]
pub fn SecretNew() -> Element {
    let session = use_context::<Signal<Session>>();
    let mut form = use_signal(|| NewSecretForm::new(session.peek().namespace()));
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let router = navigator();

    // Track the header namespace selector.
    use_effect(move || {
        let ns = session.read().namespace().to_string();
        form.write().namespace = ns;
    });

    let submit = move |_: MouseEvent| async move {
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(format!("{:#}", e)));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        match api::create_secret(request).await {
            Ok(created) => {
                info!("Secret {}/{} created", created.namespace, created.name);
                go(router, Some(secret_list_path()));
            }
            Err(e) => {
                warn!("Create secret failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    };

    let f = form();
    let busy = *saving.read();

    rsx! {
        Breadcrumbs {
            heading: "Create a new secret",
            links: vec![
                ("Secret".to_string(), Some(secret_list_path())),
                ("New".to_string(), Some(new_secret_path())),
            ],
            button {
                class: "px-3 py-1.5 rounded-md text-sm text-slate-300 border border-slate-700 hover:bg-slate-800",
                onclick: move |_| go(router, Some(secret_list_path())),
                "Cancel"
            }
        }

        div { class: "max-w-2xl bg-slate-900 border border-slate-800 rounded-xl p-6 space-y-5",
            div {
                label { class: LABEL, "Name" }
                input {
                    class: INPUT,
                    value: "{f.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
            }
            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: LABEL, "Namespace" }
                    input {
                        class: INPUT,
                        value: "{f.namespace}",
                        oninput: move |evt| form.write().namespace = evt.value(),
                    }
                }
                div {
                    label { class: LABEL, "Type" }
                    select {
                        class: INPUT,
                        onchange: move |evt| form.write().secret_type = evt.value(),
                        for t in SECRET_TYPES.iter().copied() {
                            option { key: "{t}", value: "{t}", selected: t == f.secret_type, "{t}" }
                        }
                    }
                }
            }
            div {
                label { class: LABEL, "Data" }
                textarea {
                    class: "{INPUT} font-mono h-40",
                    placeholder: "KEY=value",
                    value: "{f.data}",
                    oninput: move |evt| form.write().data = evt.value(),
                }
            }
            if let Some(msg) = error() {
                p { class: "text-sm text-red-400", "{msg}" }
            }
            div { class: "flex justify-end",
                button {
                    class: "px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-500 disabled:opacity-50 transition-colors",
                    disabled: busy,
                    onclick: submit,
                    if busy { "Creating..." } else { "Create" }
                }
            }
        }
    }
}
