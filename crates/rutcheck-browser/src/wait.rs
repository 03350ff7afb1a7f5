use chromiumoxide::{Element, Page};
use std::time::Duration;
use tokio::time::Instant;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The element never appeared within its wait budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElementTimeout;

/// Bounded wait for a selector.
///
/// The portal renders incrementally, so each element gets its own budget
/// instead of one page-level wait: polls `find_element` until the deadline
/// and reports a timeout the caller maps to its own outcome (a hard failure
/// for required controls, a default value for optional ones).
pub(crate) async fn wait_for_element(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> std::result::Result<Element, ElementTimeout> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Ok(element);
        }
        if Instant::now() >= deadline {
            tracing::debug!(
                "No element matched {:?} within {}ms",
                selector,
                timeout.as_millis()
            );
            return Err(ElementTimeout);
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
