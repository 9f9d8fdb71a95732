use crate::report::{run_forecast, run_score, ForecastArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use resilience_index::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Resilience Index Platform",
    about = "Serve or sample the synthetic resilience-index analytics API",
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
    /// Print a generated composite score as JSON
    Score(ScoreArgs),
    /// Print a generated forecast series as JSON
    Forecast(ForecastArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed every request's generator identically for reproducible responses
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Forecast(args) => run_forecast(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "resilience-index-api",
            "serve",
            "--port",
            "9001",
            "--seed",
            "42",
        ])
        .expect("arguments parse");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9001));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.host, None);
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_optional() {
        let cli = Cli::try_parse_from(["resilience-index-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
