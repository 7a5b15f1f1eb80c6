use dioxus::prelude::*;

use crate::components::common::LoadingSpinner;
use crate::models::{PaginationMeta, Recording};

/// Paginated recordings table. Renders the table-view page handed to it and
/// reports page changes and export requests back to the controller.
#[component]
pub fn RecordingsTable(
    data: Vec<Recording>,
    pagination: PaginationMeta,
    on_page_change: EventHandler<u32>,
    on_export: EventHandler<MouseEvent>,
    is_loading: bool,
    is_exporting: bool,
) -> Element {
    let current_page = pagination.current_page;

    rsx! {
        div { id: "recordings-table", class: "bg-white rounded-lg shadow-md flex flex-col",
            // Header
            div { class: "flex items-center justify-between p-4 border-b",
                h2 { class: "text-lg font-semibold", "Gravações" }
                button {
                    class: "flex items-center gap-2 text-sm font-medium text-green-700 bg-green-50 hover:bg-green-100 border border-green-200 px-3 py-1.5 rounded-lg transition-colors disabled:opacity-50",
                    disabled: is_exporting || is_loading,
                    onclick: move |e| on_export.call(e),
                    if is_exporting { "Gerando Excel..." } else { "Exportar Excel" }
                }
            }

            if is_loading {
                div { class: "p-8", LoadingSpinner {} }
            } else if data.is_empty() {
                div { class: "text-center text-gray-500 p-8", "Nenhuma gravação encontrada" }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "w-full",
                        thead { class: "bg-gray-50 border-b",
                            tr {
                                for header in ["Data/Hora", "Origem", "Destino", "Duração", "Tempo Falado", "Status", "Lista", "Campanha", "Agente"] {
                                    th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody { class: "bg-white divide-y divide-gray-200",
                            for recording in data.iter() {
                                RecordingRow {
                                    key: "{recording.id}",
                                    recording: recording.clone(),
                                }
                            }
                        }
                    }
                }

                // Pagination footer
                div { class: "flex items-center justify-between p-4 border-t",
                    span { class: "text-sm text-gray-500",
                        "Página {pagination.current_page} de {pagination.total_pages}"
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "px-4 py-2 text-sm border rounded-lg hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: !pagination.has_prev,
                            onclick: move |_| on_page_change.call(current_page - 1),
                            "Anterior"
                        }
                        button {
                            class: "px-4 py-2 text-sm border rounded-lg hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: !pagination.has_next,
                            onclick: move |_| on_page_change.call(current_page + 1),
                            "Próxima"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordingRow(recording: Recording) -> Element {
    let lista = recording.lista_nome.as_deref().unwrap_or("—");
    let disposition_class = disposition_color_class(&recording.disposition);

    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-sm text-gray-900", "{recording.calldate}" }
            td { class: "px-4 py-3 text-sm text-gray-900", "{recording.src}" }
            td { class: "px-4 py-3 text-sm text-gray-900", "{recording.dst}" }
            td { class: "px-4 py-3 text-sm text-gray-900", "{recording.duration}" }
            td { class: "px-4 py-3 text-sm text-gray-900", "{recording.billsec}" }
            td { class: "px-4 py-3 text-sm",
                span {
                    class: "px-2 py-1 text-xs rounded-full {disposition_class}",
                    "{recording.disposition}"
                }
            }
            td { class: "px-4 py-3 text-sm text-gray-600", "{lista}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{recording.cml_nome}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{recording.usr_nome}" }
        }
    }
}

/// Get color class for disposition badge
fn disposition_color_class(disposition: &str) -> &'static str {
    match disposition {
        "ANSWERED" => "bg-green-100 text-green-800",
        "NO ANSWER" | "BUSY" => "bg-yellow-100 text-yellow-800",
        "FAILED" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}
