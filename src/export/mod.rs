//! Spreadsheet export flows. Each flow re-fetches the full filtered set at a
//! large limit instead of reusing already-rendered data, builds an `.xlsx`
//! workbook in memory, and hands the bytes to the platform download path.

pub mod sheets;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::api::client::ApiError;
use crate::api::recordings;
use crate::constants::AGGREGATE_FETCH_LIMIT;
use crate::models::{CallStats, FilterState, ListStat, Recording};
use sheets::{
    list_stat_row, recording_row, summary_rows, LIST_HEADERS, LIST_SHEET, RECORDINGS_SHEET,
    RECORDING_HEADERS, SUMMARY_SHEET,
};

#[cfg(target_arch = "wasm32")]
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("falha ao buscar dados: {0}")]
    Fetch(#[from] ApiError),
    #[error("falha ao montar planilha: {0}")]
    Workbook(#[from] XlsxError),
    #[error("falha ao salvar arquivo: {0}")]
    Save(String),
}

/// Full report: KPI summary, detailed recordings, and list performance when
/// list stats exist. Returns `Ok(false)` when the filter matches nothing.
pub async fn export_general_report(
    filters: &FilterState,
    stats: &CallStats,
    list_stats: &[ListStat],
) -> Result<bool, ExportError> {
    let records = fetch_all_records(filters).await?;

    let Some(bytes) = build_general_report(&records, stats, filters, list_stats)? else {
        return Ok(false);
    };

    let filename = format!("Relatorio_CallMetrics_{}.xlsx", date_stamp());
    save_bytes(&filename, bytes)?;
    tracing::info!(%filename, rows = records.len(), "general report exported");
    Ok(true)
}

/// Table-only export: a single detailed-recordings sheet.
pub async fn export_recordings_table(filters: &FilterState) -> Result<bool, ExportError> {
    let records = fetch_all_records(filters).await?;

    let Some(bytes) = build_recordings_workbook(&records, filters.sem_lista)? else {
        return Ok(false);
    };

    let filename = format!("Gravações_Detalhadas_{}.xlsx", date_stamp());
    save_bytes(&filename, bytes)?;
    tracing::info!(%filename, rows = records.len(), "recordings table exported");
    Ok(true)
}

/// Standalone export of the list-performance table.
pub async fn export_list_stats(list_stats: &[ListStat]) -> Result<bool, ExportError> {
    let Some(bytes) = build_list_stats_workbook(list_stats)? else {
        return Ok(false);
    };

    let filename = format!("Performance_Listas_{}.xlsx", date_stamp());
    save_bytes(&filename, bytes)?;
    tracing::info!(%filename, rows = list_stats.len(), "list performance exported");
    Ok(true)
}

/// Fresh unpaginated fetch for the current filter, ignoring whatever the
/// dashboard already holds, so the file never contains stale rows.
async fn fetch_all_records(filters: &FilterState) -> Result<Vec<Recording>, ApiError> {
    let export_filters = filters.with_page(1).with_limit(AGGREGATE_FETCH_LIMIT);
    let response = recordings::fetch_recordings(&export_filters).await?;
    Ok(if response.success { response.data } else { Vec::new() })
}

/// `None` means nothing to export; no workbook is constructed.
pub(crate) fn build_general_report(
    records: &[Recording],
    stats: &CallStats,
    filters: &FilterState,
    list_stats: &[ListStat],
) -> Result<Option<Vec<u8>>, XlsxError> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    write_rows(
        summary,
        &["Indicador", "Valor"],
        summary_rows(stats, filters, list_stats)
            .into_iter()
            .map(|(label, value)| vec![label, value]),
    )?;

    let detail = workbook.add_worksheet();
    detail.set_name(RECORDINGS_SHEET)?;
    write_rows(
        detail,
        &RECORDING_HEADERS,
        records.iter().map(|r| recording_row(r, filters.sem_lista)),
    )?;

    if !list_stats.is_empty() {
        let lists = workbook.add_worksheet();
        lists.set_name(LIST_SHEET)?;
        write_rows(lists, &LIST_HEADERS, list_stats.iter().map(list_stat_row))?;
    }

    workbook.save_to_buffer().map(Some)
}

pub(crate) fn build_recordings_workbook(
    records: &[Recording],
    sem_lista: bool,
) -> Result<Option<Vec<u8>>, XlsxError> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(RECORDINGS_SHEET)?;
    write_rows(
        sheet,
        &RECORDING_HEADERS,
        records.iter().map(|r| recording_row(r, sem_lista)),
    )?;

    workbook.save_to_buffer().map(Some)
}

pub(crate) fn build_list_stats_workbook(
    list_stats: &[ListStat],
) -> Result<Option<Vec<u8>>, XlsxError> {
    if list_stats.is_empty() {
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(LIST_SHEET)?;
    write_rows(sheet, &LIST_HEADERS, list_stats.iter().map(list_stat_row))?;

    workbook.save_to_buffer().map(Some)
}

fn write_rows<I>(sheet: &mut Worksheet, headers: &[&str], rows: I) -> Result<(), XlsxError>
where
    I: Iterator<Item = Vec<String>>,
{
    for (col, header) in headers.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }
    for (row, cells) in rows.enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet.write(row as u32 + 1, col as u16, cell.as_str())?;
        }
    }
    Ok(())
}

fn date_stamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Hands the workbook bytes to the platform: a Blob + anchor download on
/// wasm, a file next to the binary on native.
fn save_bytes(filename: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(XLSX_MIME);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Save("não foi possível criar o arquivo".to_string()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Save("não foi possível iniciar o download".to_string()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Save("documento indisponível".to_string()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Save("não foi possível criar o link".to_string()))?
            .dyn_into()
            .map_err(|_| ExportError::Save("não foi possível criar o link".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| ExportError::Save("documento indisponível".to_string()))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::fs::write(filename, &bytes).map_err(|e| ExportError::Save(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::list_stat::sample_list_stat;
    use crate::models::recording::sample_recording;

    #[test]
    fn empty_fetch_builds_no_workbook() {
        let filters = FilterState::default();
        let stats = CallStats::default();

        let result = build_general_report(&[], &stats, &filters, &[]).unwrap();
        assert!(result.is_none());

        assert!(build_recordings_workbook(&[], false).unwrap().is_none());
        assert!(build_list_stats_workbook(&[]).unwrap().is_none());
    }

    #[test]
    fn general_report_produces_workbook_bytes() {
        let records = vec![
            sample_recording(1, "ANSWERED", "00:01:40"),
            sample_recording(2, "NO ANSWER", "00:00:20"),
        ];
        let stats = CallStats::from_records(&records, 2);
        let filters = FilterState::default();
        let lists = vec![sample_list_stat(1, "Base_SP", 1000, 600)];

        let bytes = build_general_report(&records, &stats, &filters, &lists)
            .unwrap()
            .unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn list_sheet_skipped_when_no_list_stats() {
        let records = vec![sample_recording(1, "ANSWERED", "00:01:40")];
        let stats = CallStats::from_records(&records, 1);
        let filters = FilterState::default();

        let with_lists = build_general_report(
            &records,
            &stats,
            &filters,
            &[sample_list_stat(1, "Base_SP", 1000, 600)],
        )
        .unwrap()
        .unwrap();
        let without_lists = build_general_report(&records, &stats, &filters, &[])
            .unwrap()
            .unwrap();
        // the three-sheet workbook carries more entries than the two-sheet one
        assert!(with_lists.len() > without_lists.len());
    }

    #[test]
    fn table_workbook_is_single_sheet() {
        let records = vec![sample_recording(1, "ANSWERED", "00:01:40")];
        let bytes = build_recordings_workbook(&records, false).unwrap().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
