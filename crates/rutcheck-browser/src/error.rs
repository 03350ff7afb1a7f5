use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chrome not found. Checked: {0}. Use --chrome-path to specify location.")]
    ChromeNotFound(String),

    #[error("Browser launch error: {0}")]
    Launch(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("Page load failed: {0}")]
    PageLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
