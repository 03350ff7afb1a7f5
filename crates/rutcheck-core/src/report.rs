use serde::{Deserialize, Serialize};

/// One row of the portal's history table: the trimmed text of every cell,
/// in document order. The column set belongs to the portal and can change
/// without notice, so no schema is imposed here.
pub type RowRecord = Vec<String>;

/// Request body for a lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RutRequest {
    pub rut: String,
}

/// Terminal output of one lookup
///
/// `error` carries failures reported at the portal level: a control that
/// never rendered, or the portal rejecting the identifier. Infrastructure
/// failures (browser launch, page load) never end up in this struct.
/// A rejected identifier and a populated name/table are not mutually
/// exclusive; the portal can show both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxStatusReport {
    pub rut: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub tabla: Vec<RowRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fila_mas_reciente: Option<RowRecord>,
}

impl TaxStatusReport {
    /// Report for a lookup that never got past the input form. Only the
    /// identifier and the error text are populated.
    pub fn failed(rut: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            rut: rut.into(),
            nombre: String::new(),
            error: Some(error.into()),
            tabla: Vec::new(),
            fila_mas_reciente: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_uses_portal_field_names() {
        let report = TaxStatusReport {
            rut: "12345678-9".to_string(),
            nombre: "ACME LTDA".to_string(),
            error: None,
            tabla: vec![vec!["a".to_string(), "b".to_string()]],
            fila_mas_reciente: Some(vec!["a".to_string(), "b".to_string()]),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rut"], "12345678-9");
        assert_eq!(json["nombre"], "ACME LTDA");
        assert!(json.get("tabla").is_some());
        assert!(json.get("fila_mas_reciente").is_some());
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let report = TaxStatusReport {
            rut: "12345678-9".to_string(),
            nombre: String::new(),
            error: None,
            tabla: Vec::new(),
            fila_mas_reciente: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("error").is_none());
        assert!(json.get("fila_mas_reciente").is_none());
        // Empty table still serializes as an empty array
        assert_eq!(json["tabla"], serde_json::json!([]));
    }

    #[test]
    fn test_failed_report_carries_only_the_error() {
        let report = TaxStatusReport::failed("98765432-1", "No se encontró el campo RUT");

        assert_eq!(report.rut, "98765432-1");
        assert_eq!(report.nombre, "");
        assert_eq!(report.error.as_deref(), Some("No se encontró el campo RUT"));
        assert!(report.tabla.is_empty());
        assert!(report.fila_mas_reciente.is_none());
    }

    #[test]
    fn test_request_roundtrip() {
        let req: RutRequest = serde_json::from_str(r#"{"rut":"11111111-1"}"#).unwrap();
        assert_eq!(req.rut, "11111111-1");

        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"rut\""));
    }

    #[test]
    fn test_report_deserializes_without_optional_fields() {
        let json = r#"{"rut":"1-9","nombre":"","tabla":[]}"#;
        let report: TaxStatusReport = serde_json::from_str(json).unwrap();
        assert!(report.error.is_none());
        assert!(report.fila_mas_reciente.is_none());
    }
}
