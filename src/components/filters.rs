use dioxus::prelude::*;

use crate::constants::PAGE_SIZE_OPTIONS;
use crate::models::{FilterState, DISPOSITION_OPTIONS};

/// Sidebar filter editor. Edits the draft filter; nothing is fetched until
/// the apply button fires `on_apply`.
#[component]
pub fn Filters(
    mut filters: Signal<FilterState>,
    mut page_size: Signal<u32>,
    on_apply: EventHandler<MouseEvent>,
    is_loading: bool,
) -> Element {
    let current = filters.read().clone();

    rsx! {
        div { class: "flex flex-col gap-4",
            h3 { class: "text-sm font-semibold text-gray-700", "Filtros" }

            div {
                label { class: "block text-xs font-medium text-gray-700 mb-1", "Data Início" }
                input {
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    r#type: "date",
                    value: "{current.start_date}",
                    oninput: move |e| filters.write().start_date = e.value(),
                }
            }

            div {
                label { class: "block text-xs font-medium text-gray-700 mb-1", "Data Fim" }
                input {
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    r#type: "date",
                    value: "{current.end_date}",
                    oninput: move |e| filters.write().end_date = e.value(),
                }
            }

            div {
                label { class: "block text-xs font-medium text-gray-700 mb-1", "Nome da Lista" }
                input {
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100",
                    r#type: "text",
                    placeholder: "Buscar por nome...",
                    value: "{current.lista_nome}",
                    disabled: current.sem_lista,
                    oninput: move |e| filters.write().lista_nome = e.value(),
                }
            }

            label { class: "flex items-center gap-2 text-sm text-gray-700",
                input {
                    r#type: "checkbox",
                    checked: current.sem_lista,
                    onchange: move |e| filters.write().sem_lista = e.checked(),
                }
                "Somente sem lista"
            }

            div {
                label { class: "block text-xs font-medium text-gray-700 mb-1", "Status" }
                select {
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    onchange: move |e| filters.write().disposition = e.value(),
                    for (value, label) in DISPOSITION_OPTIONS.iter() {
                        option {
                            value: "{value}",
                            selected: current.disposition == *value,
                            "{label}"
                        }
                    }
                }
            }

            div {
                label { class: "block text-xs font-medium text-gray-700 mb-1", "Itens por página" }
                select {
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    onchange: move |e| {
                        if let Ok(size) = e.value().parse::<u32>() {
                            page_size.set(size);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS.iter() {
                        option {
                            value: "{size}",
                            selected: page_size() == *size,
                            "{size}"
                        }
                    }
                }
            }

            button {
                class: "w-full py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                disabled: is_loading,
                onclick: move |e| on_apply.call(e),
                if is_loading { "Carregando..." } else { "Aplicar Filtros" }
            }
        }
    }
}
