//! Load-cycle orchestration for the dashboard.
//!
//! One filter state drives three parallel fetches (paginated table page,
//! full-filter aggregate, top-N list stats). The three settled results are
//! merged into a single [`DashboardLoad`] value, which the controller
//! component commits in one place.

use crate::api::client::ApiError;
use crate::api::{lists, recordings};
use crate::constants::{AGGREGATE_FETCH_LIMIT, LIST_STATS_LIMIT};
use crate::models::{ApiResponse, CallStats, FilterState, ListStat, Recording};

/// The three view updates produced by one load cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardLoad {
    pub table_records: Vec<Recording>,
    pub total_pages: u32,
    pub aggregate_records: Vec<Recording>,
    pub stats: CallStats,
    pub list_stats: Vec<ListStat>,
}

/// Fires the three requests concurrently and merges whatever settled.
/// Never fails: a transport error anywhere degrades to an empty dashboard.
pub async fn load_dashboard(filters: &FilterState) -> DashboardLoad {
    let table_filters = filters.clone();
    // page 1 at a large ceiling, intended to capture the whole filtered set
    // for KPI math; sets beyond the ceiling are undercounted
    let aggregate_filters = filters.with_page(1).with_limit(AGGREGATE_FETCH_LIMIT);
    let list_filters = filters.with_page(1).with_limit(LIST_STATS_LIMIT);

    let (table, aggregate, list_stats) = futures::join!(
        recordings::fetch_recordings(&table_filters),
        recordings::fetch_recordings(&aggregate_filters),
        lists::fetch_list_stats(&list_filters),
    );

    merge_load(table, aggregate, list_stats)
}

/// Merges the three settled responses into the derived views.
///
/// Policy (see DESIGN.md): a `success:false` envelope resets only its own
/// view; a transport error on any request fails the whole cycle and resets
/// everything, so the dashboard never mixes fresh and unreachable data.
pub fn merge_load(
    table: Result<ApiResponse<Recording>, ApiError>,
    aggregate: Result<ApiResponse<Recording>, ApiError>,
    list_stats: Result<ApiResponse<ListStat>, ApiError>,
) -> DashboardLoad {
    let (table, aggregate, list_stats) = match (table, aggregate, list_stats) {
        (Ok(table), Ok(aggregate), Ok(list_stats)) => (table, aggregate, list_stats),
        (table, aggregate, list_stats) => {
            for err in [
                table.err(),
                aggregate.err(),
                list_stats.err(),
            ]
            .into_iter()
            .flatten()
            {
                tracing::error!(%err, "dashboard load cycle failed");
            }
            return DashboardLoad::default();
        }
    };

    let mut load = DashboardLoad::default();

    if table.success {
        load.total_pages = table.pagination.total_pages;
        load.table_records = table.data;
    }

    if aggregate.success {
        load.stats = CallStats::from_records(&aggregate.data, aggregate.pagination.total);
        load.aggregate_records = aggregate.data;
    }

    if list_stats.success {
        load.list_stats = list_stats.data;
    }

    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::list_stat::sample_list_stat;
    use crate::models::recording::sample_recording;
    use crate::models::PaginationData;

    fn ok_response<T>(data: Vec<T>, total: i64, total_pages: u32) -> Result<ApiResponse<T>, ApiError> {
        Ok(ApiResponse {
            success: true,
            data,
            pagination: PaginationData {
                page: 1,
                limit: 15,
                total,
                total_pages,
                has_next_page: total_pages > 1,
                has_prev_page: false,
            },
            message: None,
            error: None,
        })
    }

    fn failed_response<T>() -> Result<ApiResponse<T>, ApiError> {
        Ok(ApiResponse {
            success: false,
            data: Vec::new(),
            pagination: PaginationData::default(),
            message: Some("internal error".to_string()),
            error: None,
        })
    }

    #[test]
    fn merge_commits_all_three_views() {
        let table = ok_response(vec![sample_recording(1, "ANSWERED", "00:01:00")], 30, 2);
        let aggregate = ok_response(
            vec![
                sample_recording(1, "ANSWERED", "00:01:00"),
                sample_recording(2, "NO ANSWER", "00:00:00"),
            ],
            30,
            1,
        );
        let lists = ok_response(vec![sample_list_stat(1, "Base_SP", 1000, 600)], 1, 1);

        let load = merge_load(table, aggregate, lists);
        assert_eq!(load.table_records.len(), 1);
        assert_eq!(load.total_pages, 2);
        assert_eq!(load.aggregate_records.len(), 2);
        assert_eq!(load.stats.total, 30);
        assert_eq!(load.stats.success_rate, 50);
        assert_eq!(load.list_stats.len(), 1);
    }

    #[test]
    fn soft_failure_resets_only_its_own_view() {
        let table = ok_response(vec![sample_recording(1, "ANSWERED", "00:01:00")], 1, 1);
        let aggregate = failed_response::<Recording>();
        let lists = ok_response(vec![sample_list_stat(1, "Base_SP", 1000, 600)], 1, 1);

        let load = merge_load(table, aggregate, lists);
        // the two successful views commit normally
        assert_eq!(load.table_records.len(), 1);
        assert_eq!(load.list_stats.len(), 1);
        // the failed view resets to its own empty default
        assert!(load.aggregate_records.is_empty());
        assert_eq!(load.stats, CallStats::default());
    }

    #[test]
    fn soft_failure_on_lists_resets_lists_only() {
        let table = ok_response(vec![sample_recording(1, "ANSWERED", "00:01:00")], 1, 1);
        let aggregate = ok_response(vec![sample_recording(1, "ANSWERED", "00:01:00")], 1, 1);
        let lists = failed_response::<ListStat>();

        let load = merge_load(table, aggregate, lists);
        assert_eq!(load.table_records.len(), 1);
        assert_eq!(load.stats.answered_count, 1);
        assert!(load.list_stats.is_empty());
    }

    #[test]
    fn transport_error_resets_everything() {
        let table = ok_response(vec![sample_recording(1, "ANSWERED", "00:01:00")], 1, 1);
        let aggregate: Result<ApiResponse<Recording>, ApiError> =
            Err(ApiError::Network("connection refused".to_string()));
        let lists = ok_response(vec![sample_list_stat(1, "Base_SP", 1000, 600)], 1, 1);

        let load = merge_load(table, aggregate, lists);
        assert_eq!(load, DashboardLoad::default());
        assert!(load.table_records.is_empty());
        assert_eq!(load.stats, CallStats::default());
    }
}
