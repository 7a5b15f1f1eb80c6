use dioxus::prelude::*;

use crate::components::charts::Charts;
use crate::components::common::StatsCard;
use crate::components::filters::Filters;
use crate::components::list_stats_table::ListStatsTable;
use crate::components::recordings_table::RecordingsTable;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::export;
use crate::models::{list_totals, CallStats, FilterState, ListStat, PaginationMeta, Recording};
use crate::state::dashboard::load_dashboard;
use crate::state::{show_notification, NotificationType};

/// The dashboard controller: owns the filter, pagination and export state,
/// runs the load cycle, and hands derived values to the presentation
/// components.
#[component]
pub fn Dashboard() -> Element {
    // Paginated data for the table only
    let mut table_data = use_signal(Vec::<Recording>::new);
    // Full-filter data for KPIs and charts
    let mut dashboard_data = use_signal(Vec::<Recording>::new);
    let mut call_stats = use_signal(CallStats::default);
    let mut lists_data = use_signal(Vec::<ListStat>::new);

    let mut current_page = use_signal(|| 1u32);
    let mut total_pages = use_signal(|| 1u32);
    let page_size = use_signal(|| DEFAULT_PAGE_SIZE);

    let mut loading = use_signal(|| false);
    let exporting = use_signal(|| false);
    let exporting_table = use_signal(|| false);

    // Draft edited in the sidebar; nothing reloads until it is applied.
    let filters = use_signal(FilterState::default);
    let mut applied_filters = use_signal(FilterState::default);

    // Guards against a superseded load cycle clobbering newer state: only
    // the most recent generation may commit.
    let mut load_generation = use_signal(|| 0u64);

    // Load cycle: re-fires whenever the applied filter, page, or page size
    // changes.
    use_effect(move || {
        let filter = applied_filters()
            .with_page(current_page())
            .with_limit(page_size());

        let generation = *load_generation.peek() + 1;
        load_generation.set(generation);
        loading.set(true);

        spawn(async move {
            let load = load_dashboard(&filter).await;

            if *load_generation.peek() != generation {
                // a newer cycle is in flight; drop this stale result
                return;
            }

            table_data.set(load.table_records);
            total_pages.set(load.total_pages);
            dashboard_data.set(load.aggregate_records);
            call_stats.set(load.stats);
            lists_data.set(load.list_stats);
            loading.set(false);
        });
    });

    let apply_filters = move |_| {
        current_page.set(1);
        applied_filters.set(filters.peek().applied());
    };

    let change_page = move |page: u32| {
        current_page.set(page.max(1));
        scroll_to_table();
    };

    let handle_export = {
        let mut exporting = exporting;
        move |_| {
            if *exporting.peek() {
                return;
            }
            exporting.set(true);
            let filter = applied_filters.peek().clone();
            let stats = call_stats.peek().clone();
            let lists = lists_data.peek().clone();
            spawn(async move {
                match export::export_general_report(&filter, &stats, &lists).await {
                    Ok(true) => {
                        show_notification("Relatório gerado com sucesso.", NotificationType::Success);
                    }
                    Ok(false) => {
                        show_notification(
                            "Sem dados para exportar com os filtros atuais.",
                            NotificationType::Warning,
                        );
                    }
                    Err(err) => {
                        tracing::error!(%err, "general report export failed");
                        show_notification(
                            "Ocorreu um erro ao gerar o relatório.",
                            NotificationType::Error,
                        );
                    }
                }
                exporting.set(false);
            });
        }
    };

    let handle_export_table = {
        let mut exporting_table = exporting_table;
        move |_| {
            if *exporting_table.peek() {
                return;
            }
            exporting_table.set(true);
            let filter = applied_filters.peek().clone();
            spawn(async move {
                match export::export_recordings_table(&filter).await {
                    Ok(true) => {
                        show_notification("Planilha de gravações gerada.", NotificationType::Success);
                    }
                    Ok(false) => {
                        show_notification("Sem dados para exportar.", NotificationType::Warning);
                    }
                    Err(err) => {
                        tracing::error!(%err, "recordings table export failed");
                        show_notification(
                            "Ocorreu um erro ao exportar as gravações.",
                            NotificationType::Error,
                        );
                    }
                }
                exporting_table.set(false);
            });
        }
    };

    let pagination = PaginationMeta::new(current_page(), page_size(), total_pages());
    let stats = call_stats.read().clone();
    let (total_listas, total_discado) = list_totals(&lists_data.read());
    let rate_trend = if stats.success_rate > 50 {
        "Performance positiva"
    } else {
        "Atenção necessária"
    };

    rsx! {
        div { class: "min-h-screen bg-gray-100 flex",
            // Sidebar
            aside { class: "w-80 p-4 border-r bg-white hidden lg:block",
                div { class: "flex items-center gap-3 px-2 mb-6",
                    span { class: "text-2xl", "\u{1F4CA}" }
                    h1 { class: "text-xl font-bold text-gray-800", "CallMetrics" }
                }
                Filters {
                    filters,
                    page_size,
                    on_apply: apply_filters,
                    is_loading: loading(),
                }
            }

            // Main content
            main { class: "flex-1 p-4 lg:p-8 overflow-y-auto",
                header { class: "mb-8 flex flex-col md:flex-row md:items-center justify-between gap-4 bg-white p-4 rounded-lg shadow-sm",
                    div {
                        h2 { class: "text-2xl font-bold text-gray-900", "Dashboard de Ligações" }
                        p { class: "text-gray-500 text-sm",
                            "Analise gravações, tempo falado e status das chamadas."
                        }
                    }
                    button {
                        class: "flex items-center gap-2 bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded-lg font-medium transition-colors shadow-sm disabled:opacity-50",
                        disabled: loading() || exporting(),
                        onclick: handle_export,
                        if exporting() { "Gerando Excel..." } else { "Exportar Relatório Geral" }
                    }
                }

                // KPI cards over the full-filter aggregate
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mb-8",
                    StatsCard {
                        title: "Atendidas",
                        value: stats.answered_count.to_string(),
                        icon: "\u{1F4DE}",
                        color: "blue",
                    }
                    StatsCard {
                        title: "Taxa de Atendimento",
                        value: format!("{}%", stats.success_rate),
                        icon: "\u{0025}",
                        color: "green",
                        trend: Some(rate_trend.to_string()),
                    }
                    StatsCard {
                        title: "Duração Média",
                        value: stats.avg_duration.clone(),
                        icon: "\u{23F1}",
                        color: "orange",
                    }
                    StatsCard {
                        title: "Total em Listas",
                        value: total_listas.to_string(),
                        icon: "\u{1F4C2}",
                        color: "blue",
                    }
                    StatsCard {
                        title: "Total Discado",
                        value: total_discado.to_string(),
                        icon: "\u{1F4E4}",
                        color: "green",
                    }
                    StatsCard {
                        title: "Recebidas",
                        value: stats.total.to_string(),
                        icon: "\u{1F4E5}",
                        color: "red",
                    }
                }

                if !loading() {
                    Charts {
                        data: dashboard_data.read().clone(),
                        lists_data: lists_data.read().clone(),
                    }
                    ListStatsTable { data: lists_data.read().clone() }
                }

                div { class: "min-h-96",
                    RecordingsTable {
                        data: table_data.read().clone(),
                        pagination,
                        on_page_change: change_page,
                        on_export: handle_export_table,
                        is_loading: loading(),
                        is_exporting: exporting_table(),
                    }
                }
            }
        }
    }
}

/// Cosmetic: bring the table back into view after a page change.
fn scroll_to_table() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("recordings-table"))
        {
            element.scroll_into_view();
        }
    }
}
