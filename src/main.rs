#![forbid(unsafe_code)]

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cimeika_snapshot::serve::{DEFAULT_PORT, ServeConfig};
use cimeika_snapshot::snapshot::DEFAULT_TITLE;
use cimeika_snapshot::{serve_cmd, snapshot_cmd};

#[derive(Parser, Debug)]
#[command(name = "cimeika-snapshot")]
#[command(about = "Render chat transcripts into self-contained HTML snapshots", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set CIMEIKA_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a chat transcript from stdin and write an HTML snapshot
    #[command(after_help = "Examples:\n  cat chat.txt | cimeika-snapshot snapshot out.html --title \"Мій чат\" --tags\n  cimeika-snapshot snapshot out.html --tags < chat.txt")]
    Snapshot {
        /// Output HTML file (overwritten if it exists)
        output: PathBuf,
        /// Page title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
        /// Add the seven CIMEIKA tags at the top
        #[arg(long)]
        tags: bool,
    },

    /// Serve a directory of snapshots over HTTP
    Serve {
        /// Directory to serve
        #[arg(long, env = "CIMEIKA_DIR", default_value = ".")]
        dir: PathBuf,
        /// Port to listen on
        #[arg(long, env = "CIMEIKA_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, env = "CIMEIKA_BIND", default_value = "0.0.0.0")]
        bind: IpAddr,
        /// TOML file with extra `[descriptions]` for the listing page
        #[arg(long, env = "CIMEIKA_DESCRIPTIONS")]
        descriptions: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("CIMEIKA_LOG").unwrap_or_else(|_| {
        if verbose {
            "cimeika_snapshot=debug".to_string()
        } else {
            "cimeika_snapshot=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Snapshot { output, title, tags } => snapshot_cmd::run(output, title, tags),
        Commands::Serve { dir, port, bind, descriptions } => {
            ServeConfig::from_args(dir, bind, port, descriptions.as_deref()).and_then(serve_cmd::run)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
