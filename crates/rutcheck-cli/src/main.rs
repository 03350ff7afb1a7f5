use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rutcheck_browser::PORTAL_URL;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rutcheck")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Query the SII tax-status portal for a RUT",
    long_about = "Rutcheck drives the SII public portal (Consulta Situación Tributaria de \
                  Terceros) with a disposable headless Chrome session and returns the subject \
                  name, any portal validation error, and the most recent row of the history \
                  table, either as a one-shot command or behind an HTTP endpoint."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single lookup and print the report as JSON
    Query {
        /// Taxpayer identifier, exactly as the portal expects it
        #[arg(value_name = "RUT")]
        rut: String,

        /// Path to the Chrome/Chromium binary
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Portal URL to query
        #[arg(long, default_value = PORTAL_URL)]
        url: String,

        /// Run with a visible browser window instead of headless
        #[arg(long)]
        visible: bool,

        /// Park the visible window off-screen (implies --visible)
        #[arg(long)]
        off_screen: bool,
    },

    /// Expose the lookup as an HTTP endpoint (POST /consultar-rut)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Path to the Chrome/Chromium binary
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Portal URL to query
        #[arg(long, default_value = PORTAL_URL)]
        url: String,

        /// Maximum number of concurrent browser sessions
        #[arg(long, default_value_t = 4)]
        max_sessions: usize,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            rut,
            chrome_path,
            url,
            visible,
            off_screen,
        } => commands::query::execute(&rut, chrome_path, &url, visible, off_screen),
        Commands::Serve {
            host,
            port,
            chrome_path,
            url,
            max_sessions,
        } => commands::serve::execute(&host, port, chrome_path, &url, max_sessions),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("rutcheck_cli=debug,rutcheck_browser=debug,rutcheck_server=debug")
    } else {
        EnvFilter::new("rutcheck_cli=info,rutcheck_browser=info,rutcheck_server=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
