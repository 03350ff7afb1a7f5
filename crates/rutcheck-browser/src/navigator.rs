use crate::session::Session;
use crate::wait::wait_for_element;
use crate::{Error, Result};
use std::time::Duration;

/// Public lookup page, "Consulta Situación Tributaria de Terceros".
pub const PORTAL_URL: &str = "https://www2.sii.cl/stc/noauthz";

const RUT_FIELD: &str = "input.rut-form";
const SUBMIT_BUTTON: &str = r#"input[value="Consultar Situación Tributaria"]"#;

const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
const FIELD_TIMEOUT: Duration = Duration::from_secs(20);
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);

/// Result of driving the portal's input form.
///
/// The two missing-control outcomes are kept apart so a caller can tell
/// which control never rendered. Both halt the lookup; none of the probes
/// downstream run after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The form was filled and submitted.
    Ready,
    /// The rut input never appeared.
    FieldMissing,
    /// The submit control never appeared.
    SubmitMissing,
}

impl NavigationOutcome {
    /// Portal-facing error text for outcomes that halt the lookup
    pub fn domain_error(&self) -> Option<&'static str> {
        match self {
            NavigationOutcome::Ready => None,
            NavigationOutcome::FieldMissing => Some("No se encontró el campo RUT"),
            NavigationOutcome::SubmitMissing => Some("No se encontró el botón Consultar"),
        }
    }
}

/// Load the portal and submit one rut through its form.
///
/// A page that never loads is an infrastructure failure and surfaces as
/// `Err`; a page that loads but never shows the expected controls is a
/// portal-level outcome and surfaces as `FieldMissing`/`SubmitMissing`.
pub async fn navigate(session: &Session, portal_url: &str, rut: &str) -> Result<NavigationOutcome> {
    let page = session.page();

    tracing::info!("Loading {}", portal_url);
    match tokio::time::timeout(PAGE_LOAD_TIMEOUT, page.goto(portal_url)).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => return Err(Error::PageLoad(e.to_string())),
        Err(_) => {
            return Err(Error::PageLoad(format!(
                "{} did not load within {}s",
                portal_url,
                PAGE_LOAD_TIMEOUT.as_secs()
            )));
        }
    }

    let Ok(field) = wait_for_element(page, RUT_FIELD, FIELD_TIMEOUT).await else {
        return Ok(NavigationOutcome::FieldMissing);
    };

    // The rut goes in exactly as received; format validation belongs to the
    // portal, not to this side.
    field.click().await?;
    field.type_str(rut).await?;
    tracing::debug!("Filled rut field");

    let Ok(submit) = wait_for_element(page, SUBMIT_BUTTON, SUBMIT_TIMEOUT).await else {
        return Ok(NavigationOutcome::SubmitMissing);
    };

    submit.click().await?;
    tracing::info!("Query submitted");

    Ok(NavigationOutcome::Ready)
}
