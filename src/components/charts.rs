use dioxus::prelude::*;

use crate::components::common::Card;
use crate::constants::CHART_COLORS;
use crate::models::{ListStat, Recording, DISPOSITION_OPTIONS};

/// CSS bar charts over the aggregate view: disposition breakdown and
/// per-list dialing performance. Pure render of the data handed in.
#[component]
pub fn Charts(data: Vec<Recording>, lists_data: Vec<ListStat>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8",
            DispositionChart { data }
            ListPerformanceChart { lists_data }
        }
    }
}

#[component]
fn DispositionChart(data: Vec<Recording>) -> Element {
    let total = data.len();
    // skip the "all" option; the remaining entries are the outcome vocabulary
    let bars: Vec<(String, usize, usize, &str)> = DISPOSITION_OPTIONS
        .iter()
        .skip(1)
        .enumerate()
        .map(|(i, (value, label))| {
            let count = data.iter().filter(|r| r.disposition == *value).count();
            let width = if total > 0 { count * 100 / total } else { 0 };
            (label.to_string(), count, width, CHART_COLORS[i % CHART_COLORS.len()])
        })
        .collect();

    rsx! {
        Card {
            h3 { class: "font-semibold mb-4", "Distribuição por Status" }
            if total == 0 {
                div { class: "text-center text-gray-500 py-8", "Sem dados para o filtro atual" }
            } else {
                div { class: "space-y-3",
                    for (label, count, width, color) in bars.into_iter() {
                        div { key: "{label}",
                            div { class: "flex justify-between text-sm mb-1",
                                span { class: "text-gray-600", "{label}" }
                                span { class: "text-gray-500", "{count}" }
                            }
                            div { class: "w-full bg-gray-100 rounded-full h-3 overflow-hidden",
                                div {
                                    class: "h-full rounded-full transition-all duration-300",
                                    style: "width: {width}%; background-color: {color}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListPerformanceChart(lists_data: Vec<ListStat>) -> Element {
    let mut top: Vec<ListStat> = lists_data;
    top.sort_by(|a, b| b.total_discado.cmp(&a.total_discado));
    top.truncate(8);
    let max_dialed = top.iter().map(|l| l.total_discado).max().unwrap_or(0);

    let bars: Vec<(ListStat, i64, i64)> = top
        .into_iter()
        .map(|list| {
            let dialed_width = bar_width(list.total_discado, max_dialed);
            let answered_width = bar_width(list.total_atendido, max_dialed);
            (list, dialed_width, answered_width)
        })
        .collect();

    rsx! {
        Card {
            h3 { class: "font-semibold mb-4", "Discado x Atendido por Lista" }
            if bars.is_empty() {
                div { class: "text-center text-gray-500 py-8", "Nenhuma lista no período" }
            } else {
                div { class: "space-y-3",
                    for (list, dialed_width, answered_width) in bars.into_iter() {
                        div { key: "{list.id}",
                            div { class: "flex justify-between text-sm mb-1",
                                span { class: "text-gray-600 truncate", title: "{list.lista_nome}",
                                    "{list.lista_nome}"
                                }
                                span { class: "text-gray-500",
                                    "{list.total_atendido}/{list.total_discado}"
                                }
                            }
                            div { class: "w-full bg-gray-100 rounded-full h-3 overflow-hidden relative",
                                div {
                                    class: "h-full bg-blue-400 rounded-full absolute",
                                    style: "width: {dialed_width}%",
                                }
                                div {
                                    class: "h-full bg-green-500 rounded-full absolute",
                                    style: "width: {answered_width}%",
                                }
                            }
                        }
                    }
                    div { class: "flex gap-4 text-sm text-gray-600 justify-center pt-2",
                        div { class: "flex items-center gap-2",
                            div { class: "w-3 h-3 bg-blue-400 rounded" }
                            span { "Discado" }
                        }
                        div { class: "flex items-center gap-2",
                            div { class: "w-3 h-3 bg-green-500 rounded" }
                            span { "Atendido" }
                        }
                    }
                }
            }
        }
    }
}

// minimum 2% so small lists stay visible
fn bar_width(value: i64, max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    (value * 100 / max).max(2)
}
