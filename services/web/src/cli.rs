use crate::demo::{run_demo, run_handoff, DemoArgs, HandoffArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sav_clan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sav Oficial Web",
    about = "Serve the Sav Oficial clan site and exercise the recruitment flow from the command line",
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
    /// Validate one application and print the hand-off message
    Handoff(HandoffArgs),
    /// Run a scripted walk-through of the recruitment flow
    Demo(DemoArgs),
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
        Command::Handoff(args) => run_handoff(args),
        Command::Demo(args) => run_demo(args),
    }
}
