use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spendprint_core::Dashboard;
use spendprint_ingest::{parse_transactions_csv, Aggregates, DateContext, SnapshotBuilder};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "spendprint",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPENDPRINT_BUILD_SHA"), ")"),
    about = "Spending personality analytics from a transaction CSV"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute metrics, classify, and print every chart view
    Analyze {
        /// Transaction CSV (defaults to ./transactions.csv if present)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Total income for the period
        #[arg(long)]
        income: Option<f64>,

        /// Override essentials total instead of summing Essential-tier rows
        #[arg(long)]
        essentials: Option<f64>,

        /// Override secondary total instead of summing Secondary-tier rows
        #[arg(long)]
        secondary: Option<f64>,

        /// Override luxury total instead of summing Luxury-tier rows
        #[arg(long)]
        luxury: Option<f64>,

        /// Savings goal amount
        #[arg(long)]
        goal: Option<f64>,

        /// Months left to reach the goal (must be nonzero)
        #[arg(long)]
        months: Option<f64>,

        /// Planned discretionary budget for the comparison chart
        #[arg(long)]
        planned: Option<f64>,

        /// Print the dashboard as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Describe all five spending personalities
    Personalities,

    /// Manage ~/.spendprint/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

/// Overrides from the command line; `None` falls back to config
#[derive(Debug, Default)]
struct AnalyzeArgs {
    csv: Option<PathBuf>,
    income: Option<f64>,
    essentials: Option<f64>,
    secondary: Option<f64>,
    luxury: Option<f64>,
    goal: Option<f64>,
    months: Option<f64>,
    planned: Option<f64>,
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze {
            csv,
            income,
            essentials,
            secondary,
            luxury,
            goal,
            months,
            planned,
            json,
        } => {
            analyze(AnalyzeArgs {
                csv,
                income,
                essentials,
                secondary,
                luxury,
                goal,
                months,
                planned,
                json,
            })?;
        }

        Command::Personalities => {
            print!("{}", render::render_personalities());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let p = config::config_path()?;
                let cfg = config::load_config()?;
                println!("# {}", p.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Priority: RUST_LOG env var > --verbose flag > default (warn).
/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();
}

fn default_transactions_csv() -> PathBuf {
    PathBuf::from("transactions.csv")
}

fn aggregates_from(args: &AnalyzeArgs, profile: &config::ProfileSection) -> Aggregates {
    Aggregates {
        income: args.income.unwrap_or(profile.income),
        goal_amount: args.goal.unwrap_or(profile.goal_amount),
        months_remaining: args.months.unwrap_or(profile.months_remaining),
        essentials: args.essentials,
        secondary: args.secondary,
        luxury: args.luxury,
    }
}

fn build_dashboard(args: &AnalyzeArgs, cfg: &config::Config) -> Result<Dashboard> {
    let csv_path = args.csv.clone().unwrap_or_else(default_transactions_csv);
    if !csv_path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv_path.display());
    }

    let dates = DateContext::new(&cfg.profile.timezone)?;
    let txns = parse_transactions_csv(&csv_path, &dates)?;
    info!(count = txns.len(), path = %csv_path.display(), "loaded transactions");

    let input = SnapshotBuilder::new(&cfg.tiers).build(txns, &aggregates_from(args, &cfg.profile));
    input.validate().context("invalid analysis input")?;

    let planned = args.planned.unwrap_or(cfg.profile.planned_discretionary);
    Ok(Dashboard::build(&input, planned))
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let dashboard = build_dashboard(&args, &cfg)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::render_dashboard(&dashboard));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use spendprint_core::PersonalityType;

    fn fixture_csv() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("spendprint-ingest")
            .join("fixtures")
            .join("transactions.csv")
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_flags() {
        let args = "spendprint analyze --csv tx.csv --income 4000 --months 6 --json";
        let cli = Cli::try_parse_from(args.split_whitespace()).unwrap();
        match cli.command {
            Command::Analyze { csv, income, months, goal, json, .. } => {
                assert_eq!(csv, Some(PathBuf::from("tx.csv")));
                assert_eq!(income, Some(4000.0));
                assert_eq!(months, Some(6.0));
                assert_eq!(goal, None);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["spendprint", "personalities", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_flags_override_profile() {
        let cfg = config::Config::default();
        let args = AnalyzeArgs {
            income: Some(4000.0),
            essentials: Some(1000.0),
            ..Default::default()
        };
        let agg = aggregates_from(&args, &cfg.profile);
        assert_eq!(agg.income, 4000.0);
        assert_eq!(agg.goal_amount, cfg.profile.goal_amount);
        assert_eq!(agg.months_remaining, 12.0);
        assert_eq!(agg.essentials, Some(1000.0));
        assert_eq!(agg.luxury, None);
    }

    #[test]
    fn test_build_dashboard_from_fixture() {
        let cfg = config::Config::default();
        let args = AnalyzeArgs {
            csv: Some(fixture_csv()),
            income: Some(4000.0),
            goal: Some(3000.0),
            months: Some(6.0),
            ..Default::default()
        };
        let dash = build_dashboard(&args, &cfg).unwrap();
        assert_eq!(dash.personality, PersonalityType::LeisurelySpender);
        assert_eq!(dash.discretionary_comparison[0].planned, 10000.0);
    }

    #[test]
    fn test_zero_months_rejected() {
        let cfg = config::Config::default();
        let args = AnalyzeArgs {
            csv: Some(fixture_csv()),
            months: Some(0.0),
            ..Default::default()
        };
        let err = build_dashboard(&args, &cfg).unwrap_err();
        assert!(format!("{err:#}").contains("months remaining must be nonzero"));
    }

    #[test]
    fn test_missing_csv() {
        let cfg = config::Config::default();
        let args = AnalyzeArgs {
            csv: Some(PathBuf::from("/nonexistent/transactions.csv")),
            ..Default::default()
        };
        let err = build_dashboard(&args, &cfg).unwrap_err();
        assert!(err.to_string().contains("CSV not found"));
    }
}
