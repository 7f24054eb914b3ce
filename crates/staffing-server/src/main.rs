use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "staffing-server",
    about = "HTTP API for the staffing request lifecycle",
    version
)]
struct Cli {
    /// Data root (default: auto-detect from .staffing/ upward, else cwd)
    #[arg(long, env = "STAFFING_ROOT")]
    root: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "STAFFING_PORT", default_value_t = 8080)]
    port: u16,
}

/// Resolve the data root directory.
///
/// Priority:
/// 1. `--root` flag / `STAFFING_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.staffing/`
/// 3. Fall back to `cwd`
fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        if dir.join(staffing_core::paths::STAFFING_DIR).is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let root = resolve_root(cli.root.as_deref());

    staffing_server::serve(root, cli.port).await
}
