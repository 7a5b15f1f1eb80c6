use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One raw row of an uploaded mailing; columns vary per file.
pub type MailingItem = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailingImportResponse {
    pub success: bool,
    #[serde(rename = "totalNovosMalling")]
    pub total_novos_malling: i64,
    #[serde(rename = "totalDuplicadosLogs")]
    pub total_duplicados_logs: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailingsListResponse {
    pub success: bool,
    pub mailings: Vec<String>,
}

/// Body of `POST /mailing/compatible`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleQuery {
    pub mailings: Vec<String>,
    pub page: u32,
    pub limit: u32,
}

/// One compatible-mailing record: the known columns as typed optionals,
/// with any extra columns preserved in `extra` instead of being dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_malling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleDataResponse {
    pub success: bool,
    pub dados: Vec<CompatibleRecord>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: i64,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_record_keeps_unknown_columns() {
        let json = r#"{"telefone1":"11999990000","nome":"Ana","renda_estimada":"4500","score":812}"#;
        let record: CompatibleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.telefone1.as_deref(), Some("11999990000"));
        assert_eq!(record.nome.as_deref(), Some("Ana"));
        assert_eq!(record.extra.len(), 2);
        assert_eq!(record.extra["renda_estimada"], "4500");

        // round trip does not lose the extras
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["score"], 812);
        assert_eq!(back["telefone1"], "11999990000");
    }

    #[test]
    fn import_response_maps_wire_names() {
        let json = r#"{"success":true,"totalNovosMalling":800,"totalDuplicadosLogs":200}"#;
        let resp: MailingImportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_novos_malling, 800);
        assert_eq!(resp.total_duplicados_logs, 200);
        assert!(resp.message.is_none());
    }
}
