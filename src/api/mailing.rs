use crate::api::client::{api_client, ApiError};
use crate::api::mock;
use crate::constants::{
    ENDPOINT_MAILING_COMPATIBLE, ENDPOINT_MAILING_IMPORT, ENDPOINT_MAILING_LIST,
    UPLOAD_BATCH_SIZE, USE_MOCK_DATA,
};
use crate::models::{
    CompatibleDataResponse, CompatibleQuery, MailingImportResponse, MailingItem,
    MailingsListResponse,
};

/// Sends one batch of mailing rows as a raw JSON array body.
pub async fn upload_mailing_batch(rows: &[MailingItem]) -> Result<MailingImportResponse, ApiError> {
    if USE_MOCK_DATA {
        return Ok(mock::mock_import_result(rows.len()));
    }

    api_client().post(ENDPOINT_MAILING_IMPORT, rows).await
}

/// Uploads a whole mailing in `UPLOAD_BATCH_SIZE` chunks, accumulating the
/// per-batch new/duplicate counts. The first failing batch aborts the upload.
pub async fn upload_mailing(rows: &[MailingItem]) -> Result<MailingImportResponse, ApiError> {
    let mut total = MailingImportResponse {
        success: true,
        total_novos_malling: 0,
        total_duplicados_logs: 0,
        message: None,
    };

    for chunk in rows.chunks(UPLOAD_BATCH_SIZE) {
        let response = upload_mailing_batch(chunk).await?;
        merge_batch(&mut total, response);
    }

    tracing::info!(
        new = total.total_novos_malling,
        duplicates = total.total_duplicados_logs,
        "mailing upload finished"
    );
    Ok(total)
}

/// Folds one batch result into the running totals; the last non-empty
/// server message wins.
fn merge_batch(total: &mut MailingImportResponse, batch: MailingImportResponse) {
    total.total_novos_malling += batch.total_novos_malling;
    total.total_duplicados_logs += batch.total_duplicados_logs;
    if batch.message.is_some() {
        total.message = batch.message;
    }
}

pub async fn fetch_mailings_list(
    name: Option<&str>,
    date: Option<&str>,
) -> Result<MailingsListResponse, ApiError> {
    if USE_MOCK_DATA {
        return Ok(mock::mock_mailings_list());
    }

    let mut query = Vec::new();
    if let Some(name) = name {
        query.push(("name".to_string(), name.to_string()));
    }
    if let Some(date) = date {
        query.push(("date".to_string(), date.to_string()));
    }

    api_client().get_query(ENDPOINT_MAILING_LIST, &query).await
}

pub async fn fetch_compatible_data(
    mailings: Vec<String>,
    page: u32,
    limit: u32,
) -> Result<CompatibleDataResponse, ApiError> {
    if USE_MOCK_DATA {
        return Ok(mock::mock_compatible_data(page));
    }

    let body = CompatibleQuery { mailings, page, limit };
    api_client().post(ENDPOINT_MAILING_COMPATIBLE, &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn batch_results_accumulate() {
        let mut total = MailingImportResponse {
            success: true,
            total_novos_malling: 0,
            total_duplicados_logs: 0,
            message: None,
        };

        merge_batch(&mut total, mock::mock_import_result(1000));
        merge_batch(&mut total, mock::mock_import_result(1000));
        merge_batch(&mut total, mock::mock_import_result(500));

        assert_eq!(
            total.total_novos_malling + total.total_duplicados_logs,
            2500
        );
    }

    #[test]
    fn last_server_message_wins() {
        let mut total = MailingImportResponse {
            success: true,
            total_novos_malling: 0,
            total_duplicados_logs: 0,
            message: Some("primeiro lote".to_string()),
        };

        let silent = MailingImportResponse {
            success: true,
            total_novos_malling: 10,
            total_duplicados_logs: 0,
            message: None,
        };
        merge_batch(&mut total, silent);
        assert_eq!(total.message.as_deref(), Some("primeiro lote"));

        let noisy = MailingImportResponse {
            success: true,
            total_novos_malling: 10,
            total_duplicados_logs: 0,
            message: Some("lote parcial".to_string()),
        };
        merge_batch(&mut total, noisy);
        assert_eq!(total.message.as_deref(), Some("lote parcial"));
    }
}
