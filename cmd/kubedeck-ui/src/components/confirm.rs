use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    content: String,
    action_label: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            onclick: move |_| on_close.call(()),
            div { class: "bg-slate-900 border border-slate-700 rounded-xl w-96 p-6 shadow-xl",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "text-base font-semibold text-white mb-2", "{title}" }
                p { class: "text-sm text-slate-400 mb-6", "{content}" }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "px-3 py-1.5 rounded-md text-sm text-slate-300 border border-slate-700 hover:bg-slate-800",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-3 py-1.5 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-500",
                        onclick: move |_| on_confirm.call(()),
                        "{action_label}"
                    }
                }
            }
        }
    }
}
