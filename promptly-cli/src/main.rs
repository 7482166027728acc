use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod key;
mod list;
mod run;

#[derive(Parser, Debug)]
#[command(name = "promptly")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Promptly - single-shot Gemini prompt tools from the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available tools
    List(list::ListArgs),
    /// Run a tool against a prompt
    Run(run::RunArgs),
    /// Manage the stored API key
    Key(key::KeyArgs),
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::List(args) => list::run(args),
        Command::Run(args) => run::run(args).await,
        Command::Key(args) => key::run(args),
    }
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Create trace directory in user's home
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".promptly").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("promptly.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    // Setup tracing subscriber with file output; stdout stays clean for
    // tool results.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
