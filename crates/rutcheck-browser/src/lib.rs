//! Drives the SII "Consulta Situación Tributaria de Terceros" portal with a
//! disposable Chrome session and extracts a normalized report.
//!
//! One lookup is one strictly forward pipeline: launch an isolated session,
//! drive the input form, probe the result page, select the most recent table
//! row. There is no retry loop and no state shared between lookups.

mod chrome_finder;
mod error;
mod extractor;
mod navigator;
mod pipeline;
mod session;
mod wait;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use extractor::ExtractionResult;
pub use navigator::{NavigationOutcome, PORTAL_URL};
pub use pipeline::lookup;
pub use session::{Session, SessionConfig, WindowPlacement};
