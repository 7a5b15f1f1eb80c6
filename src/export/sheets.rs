//! Row and sheet shaping for the spreadsheet exports. Pure functions so the
//! workbook contents are testable without touching a file or the network.

use chrono::NaiveDateTime;

use crate::models::{list_totals, CallStats, FilterState, ListStat, Recording};

pub const SUMMARY_SHEET: &str = "Resumo";
pub const RECORDINGS_SHEET: &str = "Gravações Detalhadas";
pub const LIST_SHEET: &str = "Performance Listas";

/// Marker written when the no-list filter is active and a record carries no
/// list name.
pub const NO_LIST_MARKER: &str = "SEM LISTA";

pub const RECORDING_HEADERS: [&str; 11] = [
    "ID",
    "Data/Hora",
    "Origem",
    "Destino",
    "Duração",
    "Tempo Falado",
    "Status",
    "Lista",
    "Campanha",
    "Agente",
    "Mailing",
];

pub const LIST_HEADERS: [&str; 8] = [
    "ID Lista",
    "Nome da Lista",
    "Data Criação",
    "Quantidade Total",
    "Total Discado",
    "Total Atendido",
    "Criador",
    "Empresa",
];

/// `"2024-01-15 10:30:00"` -> `"15/01/2024 10:30:00"`; anything unparseable
/// passes through unchanged.
pub fn format_calldate(calldate: &str) -> String {
    NaiveDateTime::parse_from_str(calldate, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| calldate.to_string())
}

fn format_list_date(date: &str) -> String {
    let day_part = date.get(..10).unwrap_or(date);
    chrono::NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn recording_row(record: &Recording, sem_lista: bool) -> Vec<String> {
    let lista = record.lista_nome.clone().unwrap_or_else(|| {
        if sem_lista {
            NO_LIST_MARKER.to_string()
        } else {
            String::new()
        }
    });

    vec![
        record.id.to_string(),
        format_calldate(&record.calldate),
        record.src.clone(),
        record.dst.clone(),
        record.duration.clone(),
        record.billsec.clone(),
        record.disposition.clone(),
        lista,
        record.cml_nome.clone(),
        record.usr_nome.clone(),
        record.tipomailing.clone(),
    ]
}

/// Label/value rows for the KPI summary sheet, including both filter-date
/// bounds and the list totals.
pub fn summary_rows(
    stats: &CallStats,
    filters: &FilterState,
    list_stats: &[ListStat],
) -> Vec<(String, String)> {
    let (total_in_lists, total_dialed) = list_totals(list_stats);

    vec![
        ("Total de Registros (Filtro)".into(), stats.total.to_string()),
        ("Total Atendidas".into(), stats.answered_count.to_string()),
        ("Taxa de Atendimento".into(), format!("{}%", stats.success_rate)),
        ("Duração Média".into(), stats.avg_duration.clone()),
        ("Total em Listas".into(), total_in_lists.to_string()),
        ("Total Discado".into(), total_dialed.to_string()),
        (String::new(), String::new()),
        ("Filtro Data Início".into(), filters.start_date.clone()),
        ("Filtro Data Fim".into(), filters.end_date.clone()),
    ]
}

pub fn list_stat_row(stat: &ListStat) -> Vec<String> {
    vec![
        stat.lista_id.clone(),
        stat.lista_nome.clone(),
        format_list_date(&stat.lista_data),
        stat.lista_quantidade.to_string(),
        stat.total_discado.to_string(),
        stat.total_atendido.to_string(),
        stat.usr_nome.clone(),
        stat.emp_nome.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::list_stat::sample_list_stat;
    use crate::models::recording::sample_recording;

    #[test]
    fn recording_row_uses_list_name_when_present() {
        let record = sample_recording(1, "ANSWERED", "00:01:08");
        let row = recording_row(&record, false);
        assert_eq!(row.len(), RECORDING_HEADERS.len());
        assert_eq!(row[7], "Base_SP");
        assert_eq!(row[1], "15/01/2024 10:30:00");
    }

    #[test]
    fn recording_row_marks_no_list_under_flag() {
        let mut record = sample_recording(1, "ANSWERED", "00:01:08");
        record.lista_nome = None;
        assert_eq!(recording_row(&record, true)[7], NO_LIST_MARKER);
        assert_eq!(recording_row(&record, false)[7], "");
    }

    #[test]
    fn unparseable_calldate_passes_through() {
        assert_eq!(format_calldate("not a date"), "not a date");
    }

    #[test]
    fn summary_includes_filter_date_bounds() {
        let mut filters = FilterState::default();
        filters.start_date = "2024-01-01".to_string();
        filters.end_date = "2024-01-31".to_string();
        let stats = CallStats {
            total: 120,
            answered_count: 80,
            avg_duration: "1m 40s".to_string(),
            success_rate: 66,
        };

        let rows = summary_rows(&stats, &filters, &[sample_list_stat(1, "Base_SP", 1000, 600)]);
        assert!(rows.contains(&("Total de Registros (Filtro)".into(), "120".into())));
        assert!(rows.contains(&("Taxa de Atendimento".into(), "66%".into())));
        assert!(rows.contains(&("Total em Listas".into(), "1000".into())));
        assert!(rows.contains(&("Filtro Data Início".into(), "2024-01-01".into())));
        assert!(rows.contains(&("Filtro Data Fim".into(), "2024-01-31".into())));
    }

    #[test]
    fn list_stat_row_shape() {
        let row = list_stat_row(&sample_list_stat(2, "Base_RJ", 500, 200));
        assert_eq!(row.len(), LIST_HEADERS.len());
        assert_eq!(row[0], "L2");
        assert_eq!(row[2], "10/01/2024");
        assert_eq!(row[4], "200");
    }
}
