use crate::extractor::extract;
use crate::navigator::navigate;
use crate::session::{Session, SessionConfig};
use crate::Result;
use rutcheck_core::{select_most_recent, TaxStatusReport};
use std::path::Path;

/// Run one complete lookup for one rut.
///
/// Spawns an isolated browser session and moves strictly forward through
/// navigation, extraction and selection; no stage is retried. The session
/// is closed on every exit path before the result is returned, so a failed
/// stage can never leak a Chrome process.
///
/// Domain failures (missing controls, portal rejection) come back inside
/// the report; infrastructure failures (launch, page load) come back as
/// `Err`.
pub async fn lookup(
    chrome: &Path,
    config: &SessionConfig,
    portal_url: &str,
    rut: &str,
) -> Result<TaxStatusReport> {
    let session = Session::launch(chrome, config).await?;
    let result = run_stages(&session, portal_url, rut).await;
    session.close().await;
    result
}

async fn run_stages(session: &Session, portal_url: &str, rut: &str) -> Result<TaxStatusReport> {
    let outcome = navigate(session, portal_url, rut).await?;
    if let Some(message) = outcome.domain_error() {
        tracing::warn!("Navigation halted: {}", message);
        return Ok(TaxStatusReport::failed(rut, message));
    }

    let extraction = extract(session).await;
    let fila_mas_reciente = select_most_recent(&extraction.tabla).cloned();

    Ok(TaxStatusReport {
        rut: rut.to_string(),
        nombre: extraction.nombre,
        error: extraction.validation_error,
        tabla: extraction.tabla,
        fila_mas_reciente,
    })
}
