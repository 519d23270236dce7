use crate::demo::{run_assessment, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credence::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "credence")]
#[command(about = "Run and demonstrate the Credence misinformation-risk service", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (the default when no command is given)
    Serve(ServeArgs),
    /// Assess a claim or link once and print the verdict
    Assess(AssessArgs),
    /// Walk the assessment, report intake, and resource flows on the console
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind host, overriding APP_HOST
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Bind port, overriding APP_PORT
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    match Cli::parse().command {
        None => server::run(ServeArgs::default()).await,
        Some(Command::Serve(args)) => server::run(args).await,
        Some(Command::Assess(args)) => run_assessment(args),
        Some(Command::Demo(args)) => run_demo(args),
    }
}
