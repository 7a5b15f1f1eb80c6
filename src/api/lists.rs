use crate::api::client::{api_client, ApiError};
use crate::api::mock;
use crate::constants::{ENDPOINT_LISTAS, USE_MOCK_DATA};
use crate::models::{ApiResponse, FilterState, ListStat};

/// Builds the `/listas` query. The no-list flag does not apply here; the
/// name filter is always forwarded when present.
pub fn lists_query(filters: &FilterState) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if !filters.start_date.is_empty() {
        query.push(("data_inicio".into(), format!("{} 00:00:01", filters.start_date)));
    }
    if !filters.end_date.is_empty() {
        query.push(("data_fim".into(), format!("{} 23:59:59", filters.end_date)));
    }
    if !filters.lista_nome.is_empty() {
        query.push(("lista_nome".into(), filters.lista_nome.clone()));
    }

    query.push(("page".into(), filters.page.to_string()));
    query.push(("limit".into(), filters.limit.to_string()));
    query
}

pub async fn fetch_list_stats(filters: &FilterState) -> Result<ApiResponse<ListStat>, ApiError> {
    if USE_MOCK_DATA {
        return Ok(mock::generate_list_stats(filters));
    }

    let query = lists_query(filters);
    tracing::debug!(limit = filters.limit, "fetching list stats");
    api_client().get_query(ENDPOINT_LISTAS, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_query_ignores_sem_lista() {
        let mut filters = FilterState::default();
        filters.sem_lista = true;
        filters.lista_nome = "Base_SP".to_string();

        let query = lists_query(&filters);
        assert!(query.iter().all(|(k, _)| k != "sem_lista"));
        assert!(query.iter().any(|(k, v)| k == "lista_nome" && v == "Base_SP"));
    }
}
