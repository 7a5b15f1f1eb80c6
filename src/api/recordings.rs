use crate::api::client::{api_client, ApiError};
use crate::api::mock;
use crate::constants::{ENDPOINT_GRAVACOES, USE_MOCK_DATA};
use crate::models::{ApiResponse, FilterState, Recording};

/// Builds the `/gravacoes` query from the filter state.
///
/// Dates are sent with full-day time bounds so the backend filter is
/// inclusive. `sem_lista` and `lista_nome` are mutually exclusive: the flag
/// wins and the name is dropped from the request.
pub fn recordings_query(filters: &FilterState) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if !filters.start_date.is_empty() {
        query.push(("data_inicio".into(), format!("{} 00:00:01", filters.start_date)));
    }
    if !filters.end_date.is_empty() {
        query.push(("data_fim".into(), format!("{} 23:59:59", filters.end_date)));
    }

    if filters.sem_lista {
        query.push(("sem_lista".into(), "true".into()));
    } else if !filters.lista_nome.is_empty() {
        query.push(("lista_nome".into(), filters.lista_nome.clone()));
    }

    if !filters.disposition.is_empty() {
        query.push(("disposition".into(), filters.disposition.clone()));
    }

    query.push(("page".into(), filters.page.to_string()));
    query.push(("limit".into(), filters.limit.to_string()));
    query
}

pub async fn fetch_recordings(filters: &FilterState) -> Result<ApiResponse<Recording>, ApiError> {
    if USE_MOCK_DATA {
        return Ok(mock::generate_recordings(filters));
    }

    let query = recordings_query(filters);
    tracing::debug!(page = filters.page, limit = filters.limit, "fetching recordings");
    api_client().get_query(ENDPOINT_GRAVACOES, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn dates_get_full_day_bounds() {
        let mut filters = FilterState::default();
        filters.start_date = "2024-01-01".to_string();
        filters.end_date = "2024-01-31".to_string();

        let query = recordings_query(&filters);
        assert_eq!(value_of(&query, "data_inicio"), Some("2024-01-01 00:00:01"));
        assert_eq!(value_of(&query, "data_fim"), Some("2024-01-31 23:59:59"));
    }

    #[test]
    fn empty_dates_are_omitted() {
        let query = recordings_query(&FilterState::default());
        assert!(value_of(&query, "data_inicio").is_none());
        assert!(value_of(&query, "data_fim").is_none());
        assert_eq!(value_of(&query, "page"), Some("1"));
    }

    #[test]
    fn sem_lista_suppresses_lista_nome() {
        let mut filters = FilterState::default();
        filters.sem_lista = true;
        filters.lista_nome = "Base_SP".to_string();

        let query = recordings_query(&filters);
        assert_eq!(value_of(&query, "sem_lista"), Some("true"));
        assert!(value_of(&query, "lista_nome").is_none());
    }

    #[test]
    fn lista_nome_sent_when_flag_unset() {
        let mut filters = FilterState::default();
        filters.lista_nome = "Base_SP".to_string();

        let query = recordings_query(&filters);
        assert!(value_of(&query, "sem_lista").is_none());
        assert_eq!(value_of(&query, "lista_nome"), Some("Base_SP"));
    }

    #[test]
    fn page_and_limit_always_present() {
        let filters = FilterState::default().with_page(3).with_limit(50);
        let query = recordings_query(&filters);
        assert_eq!(value_of(&query, "page"), Some("3"));
        assert_eq!(value_of(&query, "limit"), Some("50"));
    }
}
