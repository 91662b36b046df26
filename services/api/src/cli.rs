use crate::estimate::{run_estimate, run_jurisdictions, EstimateArgs, JurisdictionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use homebuyer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "homebuyer",
    about = "Estimate stamp duty, grants and upfront costs for Australian first-home buyers",
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
    /// Estimate the costs of a single purchase
    Estimate(EstimateArgs),
    /// List the jurisdictions and the duty schedules loaded for each
    Jurisdictions(JurisdictionsArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Jurisdictions(args) => run_jurisdictions(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homebuyer::purchase::{Jurisdiction, PropertyType};

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["homebuyer"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn estimate_flags_parse_into_domain_types() {
        let cli = Cli::try_parse_from([
            "homebuyer",
            "estimate",
            "--state",
            "qld",
            "--value",
            "700000",
            "--property-type",
            "newly-constructed",
            "--first-home",
            "--deposit",
            "70000",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Estimate(args)) => {
                assert_eq!(args.state, Jurisdiction::Qld);
                assert_eq!(args.property_type, PropertyType::NewlyConstructed);
                assert!(args.first_home);
                assert_eq!(args.loan_term, None);
            }
            other => panic!("expected estimate command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_state_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["homebuyer", "estimate", "--state", "NZ", "--value", "1"])
            .expect_err("unknown state");
        assert!(err.to_string().contains("unknown jurisdiction code"));
    }
}
