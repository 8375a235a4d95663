use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_constants::grid::PAGE_SIZE_OPTIONS;
use pkg_types::secret::SecretRow;
use pkg_view::actions::{new_secret_path, secret_list_path, RowAction};
use pkg_view::columns::Column;
use pkg_view::filter::RowField;
use pkg_view::identity::row_id;
use pkg_view::list::SecretListState;
use pkg_view::session::Session;
use tracing::warn;

use crate::components::{Breadcrumbs, ConfirmDialog, EmptyContent};
use crate::{api, go};

const TH: &str = "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold";
const BTN: &str = "px-2.5 py-1 rounded-md text-xs border transition-colors";

#[component]
pub fn SecretList() -> Element {
    let session = use_context::<Signal<Session>>();
    let mut state = use_signal(SecretListState::default);
    let mut show_columns = use_signal(|| false);
    let router = navigator();

    let secrets = use_resource(move || {
        let ns = session.read().namespace().to_string();
        async move {
            match api::get_secrets(ns.clone()).await {
                Ok(rows) => rows,
                Err(e) => {
                    warn!("Failed to load secrets for '{}': {}", ns, e);
                    Vec::new()
                }
            }
        }
    });

    use_effect(move || {
        if let Some(rows) = secrets.read().as_ref() {
            state.write().rows_changed(rows);
        }
    });

    let loading = secrets.read().is_none();
    let rows: Vec<SecretRow> = secrets.read().as_ref().cloned().unwrap_or_default();
    let stretch = session.read().stretch();

    let st = state.read();
    let visible = st.visible_rows(&rows);
    let total = visible.len();
    let page: Vec<SecretRow> = st.page_rows(&visible).into_iter().cloned().collect();
    let page_ids: Vec<String> = page.iter().map(row_id).collect();
    let overlay = st.overlay(&rows, &visible);
    let columns = st.columns.visible();
    let column_toggles: Vec<(Column, bool)> = st
        .columns
        .togglable()
        .into_iter()
        .map(|c| (c, st.columns.is_visible(c)))
        .collect();
    let facet_buttons: Vec<(RowField, String, bool)> = [RowField::Namespace, RowField::IsComplete]
        .into_iter()
        .flat_map(|field| {
            let allowed = st
                .filters
                .facet(field)
                .map(|f| f.allowed.clone())
                .unwrap_or_default();
            field
                .options(&rows)
                .into_iter()
                .map(move |v| {
                    let on = allowed.contains(&v);
                    (field, v, on)
                })
                .collect::<Vec<_>>()
        })
        .collect();
    let chips = st.filters.chips();
    let can_reset = st.filters.can_reset();
    let results = st.results_label(total);
    let delete_label = st.delete_label();
    let confirm_open = st.confirm_open();
    let confirm_message = st.confirm_message();
    let all_selected = !page_ids.is_empty() && st.selection.all_selected(&page_ids);
    let selected: Vec<bool> = page_ids.iter().map(|id| st.selection.contains(id)).collect();
    let query = st.query.clone();
    let page_size = st.pagination.page_size();
    let page_label = st.pagination.label(total);
    let has_prev = st.pagination.page() > 0;
    let has_next = st.pagination.page() + 1 < st.pagination.page_count(total);
    drop(st);

    let container = if stretch { "w-full" } else { "max-w-6xl mx-auto" };
    let colspan = (columns.len() + 1).to_string();

    rsx! {
        div { class: container,
            Breadcrumbs {
                heading: "List",
                links: vec![
                    ("Secret".to_string(), Some(secret_list_path())),
                    ("List".to_string(), None),
                ],
                button {
                    class: "flex items-center gap-1.5 px-3 py-1.5 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-500 transition-colors",
                    onclick: move |_| go(router, Some(new_secret_path())),
                    Icon { width: 14, height: 14, icon: LdPlus }
                    "New Secret"
                }
            }

            div { class: "bg-slate-900 border border-slate-800 rounded-xl overflow-hidden",
                // Toolbar
                div { class: "flex flex-wrap items-center gap-2 px-5 py-3 border-b border-slate-800",
                    for (field, value, on) in facet_buttons {
                        button {
                            key: "{field.label()}-{value}",
                            class: if on {
                                "px-2.5 py-1 rounded-md text-xs border transition-colors border-blue-500 text-blue-400 bg-blue-500/10"
                            } else {
                                "px-2.5 py-1 rounded-md text-xs border transition-colors border-slate-700 text-slate-400 hover:bg-slate-800"
                            },
                            onclick: move |_| state.write().toggle_filter(field, &value),
                            "{field.label()}: {value}"
                        }
                    }
                    div { class: "flex-1" }
                    input {
                        class: "w-56 bg-slate-950 border border-slate-800 rounded-md px-3 py-1.5 text-xs text-slate-300 outline-none focus:border-blue-500 transition-colors",
                        placeholder: "Search...",
                        value: "{query}",
                        oninput: move |evt| state.write().set_query(evt.value()),
                    }
                    if let Some(label) = delete_label {
                        button {
                            class: "{BTN} flex items-center gap-1.5 border-red-500/40 text-red-400 hover:bg-red-500/10",
                            onclick: move |_| state.write().open_confirm(),
                            Icon { width: 12, height: 12, icon: LdTrash2 }
                            "{label}"
                        }
                    }
                    div { class: "relative",
                        button {
                            class: "{BTN} border-slate-700 text-slate-400 hover:bg-slate-800",
                            onclick: move |_| {
                                let open = *show_columns.read();
                                show_columns.set(!open);
                            },
                            "Columns"
                        }
                        if *show_columns.read() {
                            div { class: "popover bg-slate-900 border border-slate-700 rounded-md p-3 space-y-1.5",
                                for (column, on) in column_toggles {
                                    label {
                                        key: "{column.field()}",
                                        class: "flex items-center gap-2 text-xs text-slate-300 cursor-pointer",
                                        input {
                                            r#type: "checkbox",
                                            checked: on,
                                            onchange: move |_| {
                                                state.write().toggle_column(column);
                                            },
                                        }
                                        "{column.header()}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Filters result
                if can_reset {
                    div { class: "flex flex-wrap items-center gap-2 px-5 py-2.5 border-b border-slate-800 text-xs",
                        span { class: "text-slate-300 font-medium mr-2", "{results}" }
                        for (field, value) in chips {
                            span {
                                key: "chip-{field.label()}-{value}",
                                class: "flex items-center gap-1 px-2 py-0.5 rounded-full bg-slate-800 text-slate-300",
                                "{field.label()}: {value}"
                                button {
                                    class: "text-slate-500 hover:text-white",
                                    onclick: move |_| state.write().remove_filter(field, &value),
                                    "×"
                                }
                            }
                        }
                        button {
                            class: "text-red-400 hover:text-red-300",
                            onclick: move |_| state.write().reset_filters(),
                            "Clear"
                        }
                    }
                }

                table { class: "w-full",
                    thead {
                        tr { class: "border-b border-slate-800",
                            th { class: "px-5 py-2.5 w-10",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    disabled: page_ids.is_empty(),
                                    onchange: {
                                        let ids = page_ids.clone();
                                        move |_| state.write().selection.toggle_page(&ids)
                                    },
                                }
                            }
                            for column in columns.iter() {
                                th { key: "{column.field()}", class: TH, "{column.header()}" }
                            }
                        }
                    }
                    tbody {
                        if loading {
                            tr { td { colspan: "{colspan}", class: "text-center py-16 text-slate-500 text-sm", "Loading..." } }
                        } else if let Some(overlay) = overlay {
                            tr { td { colspan: "{colspan}", EmptyContent { title: overlay.title().to_string() } } }
                        } else {
                            for (row, checked) in page.into_iter().zip(selected) {
                                SecretGridRow {
                                    key: "{row_id(&row)}",
                                    row,
                                    columns: columns.clone(),
                                    selected: checked,
                                    on_select: move |id: String| state.write().selection.toggle(&id),
                                }
                            }
                        }
                    }
                }

                // Pagination
                div { class: "flex items-center justify-end gap-4 px-5 py-2.5 border-t border-slate-800 text-xs text-slate-400",
                    label { class: "flex items-center gap-2",
                        "Rows per page:"
                        select {
                            class: "bg-slate-950 border border-slate-800 rounded px-1.5 py-0.5 text-slate-300",
                            onchange: move |evt| match evt.value().parse::<usize>() {
                                Ok(size) => state.write().pagination.set_page_size(size),
                                Err(e) => warn!("Bad page size '{}': {}", evt.value(), e),
                            },
                            for size in PAGE_SIZE_OPTIONS.iter().copied() {
                                option { key: "{size}", value: "{size}", selected: size == page_size, "{size}" }
                            }
                        }
                    }
                    span { "{page_label}" }
                    button {
                        class: "px-2 py-1 rounded hover:bg-slate-800 disabled:opacity-40",
                        disabled: !has_prev,
                        onclick: move |_| state.write().pagination.prev(),
                        "‹"
                    }
                    button {
                        class: "px-2 py-1 rounded hover:bg-slate-800 disabled:opacity-40",
                        disabled: !has_next,
                        onclick: move |_| state.write().pagination.next(total),
                        "›"
                    }
                }
            }

            ConfirmDialog {
                open: confirm_open,
                title: "Delete",
                content: confirm_message,
                action_label: "Delete",
                on_close: move |_| state.write().close_confirm(),
                on_confirm: move |_| state.write().confirm_delete(),
            }
        }
    }
}

#[component]
fn SecretGridRow(
    row: SecretRow,
    columns: Vec<Column>,
    selected: bool,
    on_select: EventHandler<String>,
) -> Element {
    let router = navigator();
    let id = row_id(&row);
    let pod_target = RowAction::OpenPod.target(&row);
    let menu: Vec<(RowAction, Option<String>)> = RowAction::MENU
        .iter()
        .map(|a| (*a, a.target(&row)))
        .collect();
    let cells: Vec<(Column, String)> = columns
        .iter()
        .map(|c| (*c, c.cell(&row).unwrap_or_default()))
        .collect();

    rsx! {
        tr {
            class: if selected {
                "grid-row-selected border-b border-slate-800/50 transition-colors"
            } else {
                "border-b border-slate-800/50 hover:bg-slate-800/30 transition-colors"
            },
            td { class: "px-5 py-3",
                input {
                    r#type: "checkbox",
                    checked: selected,
                    onchange: move |_| on_select.call(id.clone()),
                }
            }
            for (column, text) in cells {
                match column {
                    Column::Name => {
                        let target = pod_target.clone();
                        rsx! {
                            td { key: "{column.field()}", class: "px-5 py-3",
                                button {
                                    class: "text-sm font-medium text-slate-200 hover:text-blue-400 hover:underline",
                                    onclick: move |_| go(router, target.clone()),
                                    "{text}"
                                }
                            }
                        }
                    }
                    Column::Actions => rsx! {
                        td { key: "{column.field()}", class: "px-5 py-3 text-right whitespace-nowrap",
                            for (action, target) in menu.clone() {
                                button {
                                    key: "{action.label()}",
                                    class: "p-1.5 rounded-md text-slate-500 hover:text-white hover:bg-slate-800",
                                    title: action.label(),
                                    onclick: move |_| go(router, target.clone()),
                                    if action == RowAction::View {
                                        Icon { width: 14, height: 14, icon: LdEye }
                                    } else {
                                        Icon { width: 14, height: 14, icon: LdPencil }
                                    }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        td { key: "{column.field()}", class: "px-5 py-3 text-xs text-slate-400", "{text}" }
                    },
                }
            }
        }
    }
}
