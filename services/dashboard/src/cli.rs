use crate::server;
use crate::summary::{run_summary, SummaryArgs};
use clap::{Args, Parser, Subcommand};
use hr_analytics::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "HR Analytics Dashboard",
    about = "Serve or summarize the HR analytics dashboard for an employee export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard (default command)
    Serve(ServeArgs),
    /// Print headcount and every report aggregate to stdout
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Employee CSV export to load at startup
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Field delimiter of the export (single character)
    #[arg(long, value_parser = crate::infra::parse_delimiter_arg)]
    pub(crate) delimiter: Option<u8>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Summary(args) => run_summary(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["hr-dashboard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_dataset_overrides() {
        let cli = Cli::try_parse_from([
            "hr-dashboard",
            "serve",
            "--port",
            "9000",
            "--dataset",
            "data/employees.csv",
            "--delimiter",
            ",",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.dataset, Some(PathBuf::from("data/employees.csv")));
                assert_eq!(args.delimiter, Some(b','));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn summary_parses_as_of_date() {
        let cli = Cli::try_parse_from(["hr-dashboard", "summary", "--as-of", "2025-01-01"])
            .expect("parses");

        match cli.command {
            Some(Command::Summary(args)) => {
                assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2025, 1, 1));
            }
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[test]
    fn multi_character_delimiter_is_rejected() {
        let result = Cli::try_parse_from(["hr-dashboard", "serve", "--delimiter", ";;"]);
        assert!(result.is_err());
    }
}
