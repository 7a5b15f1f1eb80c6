use dioxus::prelude::*;

use crate::export;
use crate::models::{list_totals, ListStat};
use crate::state::{show_notification, NotificationType};

/// Per-list performance table with its own spreadsheet export. Renders
/// nothing when there are no list stats for the filter.
#[component]
pub fn ListStatsTable(data: Vec<ListStat>) -> Element {
    let mut is_exporting = use_signal(|| false);

    if data.is_empty() {
        return rsx! {};
    }

    let (total_quantity, total_dialed) = list_totals(&data);
    let total_answered: i64 = data.iter().map(|l| l.total_atendido).sum();

    let export_data = data.clone();
    let handle_export = move |_| {
        if *is_exporting.peek() {
            return;
        }
        is_exporting.set(true);
        let stats = export_data.clone();
        spawn(async move {
            match export::export_list_stats(&stats).await {
                Ok(true) => {
                    show_notification("Planilha de listas gerada.", NotificationType::Success);
                }
                Ok(false) => {
                    show_notification("Sem listas para exportar.", NotificationType::Warning);
                }
                Err(err) => {
                    tracing::error!(%err, "list stats export failed");
                    show_notification(
                        "Ocorreu um erro ao exportar as listas.",
                        NotificationType::Error,
                    );
                }
            }
            is_exporting.set(false);
        });
    };

    rsx! {
        div { class: "space-y-4 mb-8",
            div { class: "flex items-center justify-between px-1",
                h3 { class: "font-semibold text-lg text-gray-800", "Detalhes de Performance por Lista" }
                button {
                    class: "flex items-center gap-2 text-sm font-medium text-green-700 bg-green-50 hover:bg-green-100 border border-green-200 px-3 py-1.5 rounded-lg transition-colors disabled:opacity-50",
                    disabled: *is_exporting.read(),
                    onclick: handle_export,
                    if *is_exporting.read() { "Gerando..." } else { "Exportar Excel" }
                }
            }

            div { class: "bg-white rounded-lg shadow-md overflow-hidden",
                div { class: "overflow-x-auto",
                    table { class: "w-full",
                        thead { class: "bg-gray-50 border-b",
                            tr {
                                for header in ["Nome da Lista", "Data", "Qtd. Total", "Total Discado", "Total Atendido", "Criador"] {
                                    th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody { class: "bg-white divide-y divide-gray-200",
                            for stat in data.iter() {
                                ListStatRow {
                                    key: "{stat.id}",
                                    stat: stat.clone(),
                                }
                            }
                        }
                        tfoot { class: "bg-gray-50 border-t",
                            tr {
                                td { class: "px-4 py-3 text-sm font-semibold text-gray-700", "Total" }
                                td { class: "px-4 py-3" }
                                td { class: "px-4 py-3 text-sm font-semibold text-gray-900", "{total_quantity}" }
                                td { class: "px-4 py-3 text-sm font-semibold text-blue-600", "{total_dialed}" }
                                td { class: "px-4 py-3 text-sm font-semibold text-green-600", "{total_answered}" }
                                td { class: "px-4 py-3" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListStatRow(stat: ListStat) -> Element {
    let name = if stat.lista_nome.chars().count() > 40 {
        let truncated: String = stat.lista_nome.chars().take(40).collect();
        format!("{truncated}...")
    } else {
        stat.lista_nome.clone()
    };

    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3",
                div { class: "text-sm font-medium text-gray-900", title: "{stat.lista_nome}", "{name}" }
                div { class: "text-xs text-gray-500", "{stat.emp_nome}" }
            }
            td { class: "px-4 py-3 text-sm text-gray-500", "{stat.lista_data}" }
            td { class: "px-4 py-3 text-sm font-medium text-gray-900", "{stat.lista_quantidade}" }
            td { class: "px-4 py-3 text-sm font-medium text-blue-600", "{stat.total_discado}" }
            td { class: "px-4 py-3 text-sm font-medium text-green-600", "{stat.total_atendido}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{stat.usr_nome}" }
        }
    }
}
