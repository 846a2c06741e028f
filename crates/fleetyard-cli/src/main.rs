use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fleetyard_cli::commands::{demo, products};
use fleetyard_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Container fleet loading simulator")]
struct Cli {
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the fixed loading, transfer and replacement scenario.
    Demo,
    /// List refrigerated products and their minimum storage temperatures.
    Products,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => demo::handle_demo(cli.format),
        Command::Products => products::handle_products(cli.format),
    }
}

/// Logs and hazard alerts go to stderr so reports on stdout stay clean.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
