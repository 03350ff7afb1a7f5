use anyhow::Result;
use rutcheck_browser::{ChromeFinder, SessionConfig};
use rutcheck_server::ServeState;
use std::net::SocketAddr;
use std::path::PathBuf;

pub fn execute(
    host: &str,
    port: u16,
    chrome_path: Option<PathBuf>,
    url: &str,
    max_sessions: usize,
) -> Result<()> {
    let portal_url = url::Url::parse(url)
        .map_err(|e| anyhow::anyhow!("Invalid portal URL '{}': {}", url, e))?;

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}:{}: {}", host, port, e))?;

    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        println!("🔍 Locating Chrome...");
        let chrome = ChromeFinder::new(chrome_path).find()?;
        println!("✅ Found Chrome at: {}", chrome.display());

        let state = ServeState::new(
            chrome,
            SessionConfig::default(),
            portal_url.as_str(),
            max_sessions,
        );

        println!("✓ Lookup endpoint listening on http://{}", addr);
        println!();
        println!("POST /consultar-rut with a JSON body: {{\"rut\": \"...\"}}");
        println!("Up to {} concurrent browser sessions", max_sessions);
        println!();
        println!("Press Ctrl+C to stop...");

        rutcheck_server::serve(addr, state).await?;

        println!("✅ Server stopped gracefully");
        Ok(())
    })
}
