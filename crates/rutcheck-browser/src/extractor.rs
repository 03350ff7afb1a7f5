use crate::session::Session;
use crate::wait::wait_for_element;
use chromiumoxide::Page;
use rutcheck_core::RowRecord;
use std::time::Duration;

const ERROR_REGION: &str = "div.input-errors";
const NAME_LABEL: &str = "label.mb-1.font-body";
const EXPAND_BUTTON: &str = "button.open-btn";
const RESULTS_TABLE: &str = "table#DataTables_Table_0";

const ERROR_TIMEOUT: Duration = Duration::from_secs(5);
const NAME_TIMEOUT: Duration = Duration::from_secs(5);
const EXPAND_TIMEOUT: Duration = Duration::from_secs(5);
// The table is populated client-side after the rest of the page settles and
// needs the longest budget.
const TABLE_TIMEOUT: Duration = Duration::from_secs(15);

/// The name label carries this fixed prefix before the subject's name.
const NAME_LABEL_PREFIX: &str = "Nombre o Razón Social:";

/// Collects tbody rows as arrays of trimmed cell text.
const TABLE_ROWS_JS: &str = r##"(() => {
    const filas = [];
    const tbody = document.querySelector("#DataTables_Table_0 tbody");
    if (!tbody) return filas;
    for (const tr of tbody.querySelectorAll("tr")) {
        filas.push([...tr.querySelectorAll("td")].map(td => td.innerText.trim()));
    }
    return filas;
})()"##;

/// What the result page yielded. Every field degrades to its empty default
/// when the matching element never rendered.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub nombre: String,
    pub validation_error: Option<String>,
    pub tabla: Vec<RowRecord>,
}

/// Probe the result page.
///
/// Four independent best-effort probes; a timeout in one never aborts the
/// others. In particular a validation error does not stop the name and
/// table probes — the portal can reject an identifier and still render
/// partial data, and the two signals are reported independently.
pub async fn extract(session: &Session) -> ExtractionResult {
    let page = session.page();
    let mut result = ExtractionResult::default();

    if let Ok(region) = wait_for_element(page, ERROR_REGION, ERROR_TIMEOUT).await {
        if let Ok(Some(text)) = region.inner_text().await {
            let text = text.trim();
            if !text.is_empty() {
                tracing::info!("Portal rejected the rut: {}", text);
                result.validation_error = Some(text.to_string());
            }
        }
    }

    if let Ok(label) = wait_for_element(page, NAME_LABEL, NAME_TIMEOUT).await {
        if let Ok(Some(text)) = label.inner_text().await {
            result.nombre = strip_name_label(&text);
        }
    }

    // The full history only renders once expanded. The control is absent
    // when there is nothing extra to show, so a failed click is ignored.
    if let Ok(button) = wait_for_element(page, EXPAND_BUTTON, EXPAND_TIMEOUT).await {
        if let Err(e) = button.click().await {
            tracing::debug!("Expand control click failed (ignored): {}", e);
        }
    }

    if wait_for_element(page, RESULTS_TABLE, TABLE_TIMEOUT).await.is_ok() {
        match table_rows(page).await {
            Ok(rows) => {
                tracing::info!("Extracted {} table rows", rows.len());
                result.tabla = rows;
            }
            Err(e) => tracing::debug!("Table extraction failed, treating as empty: {}", e),
        }
    }

    result
}

async fn table_rows(page: &Page) -> std::result::Result<Vec<RowRecord>, String> {
    page.evaluate(TABLE_ROWS_JS)
        .await
        .map_err(|e| e.to_string())?
        .into_value::<Vec<RowRecord>>()
        .map_err(|e| e.to_string())
}

fn strip_name_label(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_prefix(NAME_LABEL_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_label_prefix() {
        assert_eq!(
            strip_name_label("Nombre o Razón Social: COMERCIAL EJEMPLO SPA"),
            "COMERCIAL EJEMPLO SPA"
        );
    }

    #[test]
    fn test_strips_prefix_without_surrounding_space() {
        assert_eq!(
            strip_name_label("  Nombre o Razón Social:PEREZ SOTO JUAN  "),
            "PEREZ SOTO JUAN"
        );
    }

    #[test]
    fn test_text_without_prefix_is_only_trimmed() {
        assert_eq!(strip_name_label("  SOLO UN NOMBRE  "), "SOLO UN NOMBRE");
    }

    #[test]
    fn test_prefix_alone_yields_empty_name() {
        assert_eq!(strip_name_label("Nombre o Razón Social:"), "");
    }

    #[test]
    fn test_extraction_defaults_are_empty() {
        let result = ExtractionResult::default();
        assert!(result.nombre.is_empty());
        assert!(result.validation_error.is_none());
        assert!(result.tabla.is_empty());
    }
}
