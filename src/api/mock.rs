//! Filter-aware mock data, served when `USE_MOCK_DATA` is on so the
//! dashboard can be exercised without the real backend.

use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{
    ApiResponse, CompatibleDataResponse, FilterState, ListStat, MailingImportResponse,
    MailingsListResponse, PaginationData, Recording,
};

// Fixed seed keeps the pool stable across the three parallel fetches of a
// load cycle, so table, KPIs and charts agree with each other.
const MOCK_SEED: u64 = 0x5eed_ca11;
const MOCK_POOL_SIZE: usize = 480;

const MOCK_LISTS: [&str; 4] = ["Base_SP", "Mailing_RJ", "Retorno_Quente", "Base_Sul"];
const MOCK_CAMPAIGNS: [&str; 3] = ["Campanha Sul", "Campanha Varejo", "Reativação"];
const MOCK_AGENTS: [&str; 5] = ["Maria", "Carlos", "Ana", "João", "Paula"];
const MOCK_MAILING_TYPES: [&str; 2] = ["frio", "quente"];

fn pick_disposition(roll: u32) -> &'static str {
    match roll {
        0..=54 => "ANSWERED",
        55..=84 => "NO ANSWER",
        85..=94 => "BUSY",
        _ => "FAILED",
    }
}

fn duration_string(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn recording_pool() -> Vec<Recording> {
    let mut rng = StdRng::seed_from_u64(MOCK_SEED);
    let now = Utc::now();

    (0..MOCK_POOL_SIZE as i64)
        .map(|i| {
            let disposition = pick_disposition(rng.gen_range(0..100));
            let talk_seconds = if disposition == "ANSWERED" {
                rng.gen_range(20..600)
            } else {
                0
            };
            let ring_seconds = talk_seconds + rng.gen_range(5..35);
            let calldate = now
                - Duration::days(rng.gen_range(0..30))
                - Duration::minutes(rng.gen_range(0..1440));
            // every sixth record dialed outside any list
            let lista_nome = if i % 6 == 0 {
                None
            } else {
                Some(MOCK_LISTS[rng.gen_range(0..MOCK_LISTS.len())].to_string())
            };

            Recording {
                id: 1000 + i,
                calldate: calldate.format("%Y-%m-%d %H:%M:%S").to_string(),
                src: format!("11400010{:02}", rng.gen_range(0..100)),
                dst: format!("119{:08}", rng.gen_range(0..100_000_000)),
                duration: duration_string(ring_seconds),
                billsec: duration_string(talk_seconds),
                disposition: disposition.to_string(),
                gravacao: Some(format!("rec-{i}.wav")),
                destino: format!("119{:08}", rng.gen_range(0..100_000_000)),
                cml_nome: MOCK_CAMPAIGNS[rng.gen_range(0..MOCK_CAMPAIGNS.len())].to_string(),
                lista_nome,
                cml_id: rng.gen_range(1..10),
                tipomailing: MOCK_MAILING_TYPES[rng.gen_range(0..MOCK_MAILING_TYPES.len())]
                    .to_string(),
                usr_nome: MOCK_AGENTS[rng.gen_range(0..MOCK_AGENTS.len())].to_string(),
                data_importacao: None,
                data_atualizacao: None,
                data_insercao: None,
            }
        })
        .collect()
}

fn matches_filters(record: &Recording, filters: &FilterState) -> bool {
    let date = &record.calldate[..10.min(record.calldate.len())];
    if !filters.start_date.is_empty() && date < filters.start_date.as_str() {
        return false;
    }
    if !filters.end_date.is_empty() && date > filters.end_date.as_str() {
        return false;
    }
    if !filters.disposition.is_empty() && record.disposition != filters.disposition {
        return false;
    }
    if filters.sem_lista {
        return record.lista_nome.is_none();
    }
    if !filters.lista_nome.is_empty() {
        return record
            .lista_nome
            .as_deref()
            .map(|name| {
                name.to_lowercase()
                    .contains(&filters.lista_nome.to_lowercase())
            })
            .unwrap_or(false);
    }
    true
}

fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> ApiResponse<T> {
    let total = items.len() as i64;
    let limit = limit.max(1);
    let total_pages = (items.len() as u32).div_ceil(limit);
    let start = ((page.max(1) - 1) * limit) as usize;
    let data: Vec<T> = items.into_iter().skip(start).take(limit as usize).collect();

    ApiResponse {
        success: true,
        data,
        pagination: PaginationData {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
        message: None,
        error: None,
    }
}

pub fn generate_recordings(filters: &FilterState) -> ApiResponse<Recording> {
    let matching: Vec<Recording> = recording_pool()
        .into_iter()
        .filter(|record| matches_filters(record, filters))
        .collect();
    paginate(matching, filters.page, filters.limit)
}

pub fn generate_list_stats(filters: &FilterState) -> ApiResponse<ListStat> {
    let mut rng = StdRng::seed_from_u64(MOCK_SEED ^ 1);

    let matching: Vec<ListStat> = MOCK_LISTS
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            filters.lista_nome.is_empty()
                || name
                    .to_lowercase()
                    .contains(&filters.lista_nome.to_lowercase())
        })
        .map(|(i, name)| {
            let quantity = rng.gen_range(400..3000);
            let dialed = rng.gen_range(100..quantity);
            let answered = rng.gen_range(0..dialed);
            ListStat {
                id: i as i64 + 1,
                lista_id: format!("L{:03}", i + 1),
                lista_nome: name.to_string(),
                lista_data: (Utc::now() - Duration::days(i as i64 * 3))
                    .format("%Y-%m-%d")
                    .to_string(),
                lista_quantidade: quantity,
                total_discado: dialed,
                total_atendido: answered,
                total_digito: answered / 3,
                emp_nome: "Portas de Aço".to_string(),
                usr_nome: MOCK_AGENTS[i % MOCK_AGENTS.len()].to_string(),
            }
        })
        .collect();

    paginate(matching, filters.page, filters.limit)
}

pub fn mock_import_result(batch_len: usize) -> MailingImportResponse {
    let new = (batch_len * 8 / 10) as i64;
    MailingImportResponse {
        success: true,
        total_novos_malling: new,
        total_duplicados_logs: batch_len as i64 - new,
        message: None,
    }
}

pub fn mock_mailings_list() -> MailingsListResponse {
    MailingsListResponse {
        success: true,
        mailings: vec![
            "Mailing_A".to_string(),
            "Mailing_B".to_string(),
            "Base_SP".to_string(),
            "Mailing_RJ".to_string(),
        ],
    }
}

pub fn mock_compatible_data(page: u32) -> CompatibleDataResponse {
    CompatibleDataResponse {
        success: true,
        dados: Vec::new(),
        total_pages: 1,
        total: 0,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_honors_disposition_filter() {
        let mut filters = FilterState::default();
        filters.disposition = "BUSY".to_string();
        filters.limit = 1000;

        let response = generate_recordings(&filters);
        assert!(response.success);
        assert!(!response.data.is_empty());
        assert!(response.data.iter().all(|r| r.disposition == "BUSY"));
    }

    #[test]
    fn generator_honors_no_list_filter() {
        let mut filters = FilterState::default();
        filters.sem_lista = true;
        filters.lista_nome = "Base_SP".to_string();
        filters.limit = 1000;

        let response = generate_recordings(&filters);
        assert!(response.data.iter().all(|r| r.lista_nome.is_none()));
    }

    #[test]
    fn pagination_counts_are_consistent() {
        let filters = FilterState::default().with_page(2).with_limit(50);
        let response = generate_recordings(&filters);

        assert_eq!(response.data.len(), 50);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(
            response.pagination.total_pages,
            (response.pagination.total as u32).div_ceil(50)
        );
        assert!(response.pagination.has_prev_page);
    }

    #[test]
    fn pool_is_stable_across_calls() {
        let filters = FilterState::default().with_limit(10);
        let a = generate_recordings(&filters);
        let b = generate_recordings(&filters);
        assert_eq!(a.data, b.data);
        assert_eq!(a.pagination.total, b.pagination.total);
    }

    #[test]
    fn list_stats_filter_by_name() {
        let mut filters = FilterState::default();
        filters.lista_nome = "base".to_string();
        filters.limit = 100;

        let response = generate_list_stats(&filters);
        assert!(!response.data.is_empty());
        assert!(response
            .data
            .iter()
            .all(|l| l.lista_nome.to_lowercase().contains("base")));
    }
}
