use anyhow::Result;
use indicatif::ProgressBar;
use rutcheck_browser::{lookup, ChromeFinder, SessionConfig, WindowPlacement};
use std::path::PathBuf;
use std::time::Duration;

pub fn execute(
    rut: &str,
    chrome_path: Option<PathBuf>,
    url: &str,
    visible: bool,
    off_screen: bool,
) -> Result<()> {
    let portal_url = url::Url::parse(url)
        .map_err(|e| anyhow::anyhow!("Invalid portal URL '{}': {}", url, e))?;

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        println!("🔍 Locating Chrome...");
        let chrome = ChromeFinder::new(chrome_path).find()?;
        println!("✅ Found Chrome at: {}", chrome.display());

        let mut config = SessionConfig::default();
        if visible || off_screen {
            config.headless = false;
        }
        if off_screen {
            config.window_placement = WindowPlacement::OffScreen;
        }

        tracing::info!("Querying {} for rut {}", portal_url, rut);

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Consultando situación tributaria de {rut}..."));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = lookup(&chrome, &config, portal_url.as_str(), rut).await;
        spinner.finish_and_clear();

        let report = result?;
        if let Some(error) = &report.error {
            println!("⚠️  Portal reported: {}", error);
        }

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    })
}
