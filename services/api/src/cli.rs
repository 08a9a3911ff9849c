use crate::commands::{run_import, run_template, ImportArgs, TemplateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use family_directory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Family Directory",
    about = "Serve the family directory API and bulk import listings from CSV",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Import listings from a CSV file and print the outcome
    Import(ImportArgs),
    /// Print the CSV header row expected for a listing kind
    Template(TemplateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Import(args) => run_import(args),
        Command::Template(args) => run_template(args),
    }
}
