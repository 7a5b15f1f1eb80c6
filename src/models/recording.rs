use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::duration::{format_seconds, parse_duration};

pub const DISPOSITION_ANSWERED: &str = "ANSWERED";

/// Disposition filter options shown in the sidebar: wire value + label.
pub const DISPOSITION_OPTIONS: [(&str, &str); 5] = [
    ("", "Todas"),
    ("ANSWERED", "Atendida"),
    ("NO ANSWER", "Não Atendida"),
    ("BUSY", "Ocupado"),
    ("FAILED", "Falha"),
];

/// One call-detail record as returned by `/gravacoes`.
///
/// Immutable once fetched; the paginated table and the aggregate view each
/// hold their own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub id: i64,
    pub calldate: String,
    pub src: String,
    pub dst: String,
    /// Total ring + talk time, `"H:M:S"` or `"M:S"`.
    pub duration: String,
    /// Billable talk time, same encoding.
    pub billsec: String,
    pub disposition: String,
    pub gravacao: Option<String>,
    pub destino: String,
    pub cml_nome: String,
    pub lista_nome: Option<String>,
    pub cml_id: i64,
    pub tipomailing: String,
    pub usr_nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_importacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_insercao: Option<String>,
}

/// Pagination block reported by the API inside every list envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Uniform response envelope for `/gravacoes` and `/listas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: PaginationData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pagination metadata derived for the table footer. Never authoritative:
/// recomputed on every load from the reported total-page count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(current_page: u32, per_page: u32, total_pages: u32) -> Self {
        PaginationMeta {
            current_page,
            per_page,
            total_pages,
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
        }
    }
}

/// The single source of query truth shared by every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// `YYYY-MM-DD`, empty = unset.
    pub start_date: String,
    pub end_date: String,
    pub lista_nome: String,
    pub disposition: String,
    /// Only records with no associated list. Suppresses `lista_nome` in the
    /// outgoing query when set.
    pub sem_lista: bool,
    pub page: u32,
    pub limit: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            start_date: String::new(),
            end_date: String::new(),
            lista_nome: String::new(),
            disposition: String::new(),
            sem_lista: false,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// Applying filters always restarts from the first page.
    pub fn applied(&self) -> Self {
        self.with_page(1)
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut filters = self.clone();
        filters.page = page.max(1);
        filters
    }

    pub fn with_limit(&self, limit: u32) -> Self {
        let mut filters = self.clone();
        filters.limit = limit.max(1);
        filters
    }
}

/// KPI snapshot derived from the aggregate view. Recomputed wholesale on
/// every load cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStats {
    /// Grand total for the filter as reported by the server, not the length
    /// of the aggregate fetch.
    pub total: i64,
    pub answered_count: usize,
    pub avg_duration: String,
    pub success_rate: u32,
}

impl Default for CallStats {
    fn default() -> Self {
        CallStats {
            total: 0,
            answered_count: 0,
            avg_duration: format_seconds(0),
            success_rate: 0,
        }
    }
}

impl CallStats {
    pub fn from_records(records: &[Recording], server_total: i64) -> Self {
        if records.is_empty() {
            return CallStats {
                total: server_total,
                ..CallStats::default()
            };
        }

        let answered = records
            .iter()
            .filter(|r| r.disposition == DISPOSITION_ANSWERED)
            .count();
        let total_seconds: u64 = records
            .iter()
            .map(|r| u64::from(parse_duration(&r.duration)))
            .sum();

        CallStats {
            total: server_total,
            answered_count: answered,
            avg_duration: format_seconds((total_seconds / records.len() as u64) as u32),
            success_rate: (answered * 100 / records.len()) as u32,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_recording(id: i64, disposition: &str, duration: &str) -> Recording {
    Recording {
        id,
        calldate: "2024-01-15 10:30:00".to_string(),
        src: "1140001000".to_string(),
        dst: "11988887777".to_string(),
        duration: duration.to_string(),
        billsec: "00:00:40".to_string(),
        disposition: disposition.to_string(),
        gravacao: None,
        destino: "11988887777".to_string(),
        cml_nome: "Campanha Sul".to_string(),
        lista_nome: Some("Base_SP".to_string()),
        cml_id: 3,
        tipomailing: "frio".to_string(),
        usr_nome: "Maria".to_string(),
        data_importacao: None,
        data_atualizacao: None,
        data_insercao: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_empty_set_never_divide_by_zero() {
        let stats = CallStats::from_records(&[], 0);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.answered_count, 0);
        assert_eq!(stats.avg_duration, "0m 0s");
        assert_eq!(stats.success_rate, 0);
    }

    #[test]
    fn stats_use_server_total_not_fetched_length() {
        let records = vec![
            sample_recording(1, "ANSWERED", "00:01:00"),
            sample_recording(2, "NO ANSWER", "00:00:00"),
        ];
        let stats = CallStats::from_records(&records, 5000);
        assert_eq!(stats.total, 5000);
        assert_eq!(stats.answered_count, 1);
        assert_eq!(stats.success_rate, 50);
        assert_eq!(stats.avg_duration, "0m 30s");
    }

    #[test]
    fn fully_answered_scenario() {
        // 40 answered records totalling 4000s -> 100s average, 100% rate.
        let records: Vec<Recording> = (0..40)
            .map(|i| sample_recording(i, "ANSWERED", "00:01:40"))
            .collect();
        let stats = CallStats::from_records(&records, 40);
        assert_eq!(stats.answered_count, 40);
        assert_eq!(stats.success_rate, 100);
        assert_eq!(stats.avg_duration, "1m 40s");
    }

    #[test]
    fn success_rate_floors() {
        let records = vec![
            sample_recording(1, "ANSWERED", "00:01:00"),
            sample_recording(2, "NO ANSWER", "00:00:00"),
            sample_recording(3, "BUSY", "00:00:00"),
        ];
        let stats = CallStats::from_records(&records, 3);
        assert_eq!(stats.success_rate, 33);
    }

    #[test]
    fn applying_filters_resets_page() {
        let mut filters = FilterState::default();
        filters.page = 7;
        filters.disposition = "ANSWERED".to_string();
        let applied = filters.applied();
        assert_eq!(applied.page, 1);
        assert_eq!(applied.disposition, "ANSWERED");
    }

    #[test]
    fn changing_page_keeps_filters() {
        let mut filters = FilterState::default();
        filters.lista_nome = "Base_SP".to_string();
        let paged = filters.with_page(4);
        assert_eq!(paged.page, 4);
        assert_eq!(paged.lista_nome, "Base_SP");
        // page is clamped to >= 1
        assert_eq!(filters.with_page(0).page, 1);
    }

    #[test]
    fn pagination_meta_invariants() {
        let meta = PaginationMeta::new(1, 15, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        let meta = PaginationMeta::new(3, 15, 3);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn envelope_tolerates_missing_optional_fields() {
        let json = r#"{"success":true,"data":[],"pagination":{"page":1,"limit":15,"total":0,"totalPages":0,"hasNextPage":false,"hasPrevPage":false}}"#;
        let resp: ApiResponse<Recording> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_empty());
        assert!(resp.message.is_none());
    }
}
