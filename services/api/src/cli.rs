use crate::report::{run_decode, run_list, run_response_log_summary, ResponseLogSummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Eligibility Result Codes",
    about = "Serve and inspect eligibility inquiry result codes from the command line",
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
    /// Inspect the result-code catalog
    Codes {
        #[command(subcommand)]
        command: CodesCommand,
    },
    /// Summarize exported eligibility responses
    ResponseLog {
        #[command(subcommand)]
        command: ResponseLogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CodesCommand {
    /// Print every result code with its display label
    List,
    /// Decode a single wire value, failing when it is not a known code
    Decode {
        /// Wire value exactly as received (case-sensitive)
        value: String,
    },
}

#[derive(Subcommand, Debug)]
enum ResponseLogCommand {
    /// Tally result codes from a CSV export
    Summary(ResponseLogSummaryArgs),
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
        Command::Codes {
            command: CodesCommand::List,
        } => {
            run_list();
            Ok(())
        }
        Command::Codes {
            command: CodesCommand::Decode { value },
        } => run_decode(&value),
        Command::ResponseLog {
            command: ResponseLogCommand::Summary(args),
        } => run_response_log_summary(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["eligibility-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn decode_takes_raw_value() {
        let cli = Cli::try_parse_from(["eligibility-api", "codes", "decode", "PAYER_TIMEOUT"])
            .expect("parses");
        match cli.command {
            Some(Command::Codes {
                command: CodesCommand::Decode { value },
            }) => assert_eq!(value, "PAYER_TIMEOUT"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn response_log_summary_requires_csv_path() {
        assert!(Cli::try_parse_from(["eligibility-api", "response-log", "summary"]).is_err());
        let cli = Cli::try_parse_from([
            "eligibility-api",
            "response-log",
            "summary",
            "--csv",
            "responses.csv",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::ResponseLog {
                command: ResponseLogCommand::Summary(args),
            }) => {
                assert_eq!(args.csv.to_str(), Some("responses.csv"));
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
