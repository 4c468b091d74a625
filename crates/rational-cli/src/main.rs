use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rational_cli::config::load_config;
use rational_cli::error::Result;
use rational_cli::report::{render_csv, render_summary, render_table};
use rational_core::{Distribution, Drainage, ZeroTimePolicy};

/// Rational-method runoff hydrograph for a single basin
#[derive(Parser, Debug)]
#[command(name = "rational", version, about)]
struct Cli {
    /// TOML file with [basin], [rainfall] and [flood] sections
    config: PathBuf,

    /// Output time step, overriding [flood].interval
    #[arg(long)]
    interval: Option<f64>,

    /// Handling of the t = 0 sample ("zero-flow" or "omit"), overriding [flood].policy
    #[arg(long)]
    policy: Option<ZeroTimePolicy>,

    /// Include rainfall and intensity columns
    #[arg(long)]
    detail: bool,

    /// Print CSV instead of a table
    #[arg(long)]
    csv: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let basin = config.basin()?;
    let rain = config.rain()?;

    let interval = cli.interval.unwrap_or(config.flood.interval);
    let policy = cli.policy.unwrap_or(config.flood.policy);

    log::info!(
        "basin: tc={} min, area={} ac, c={:.4}; rainfall: {} points over {}",
        basin.tc(),
        basin.area(),
        basin.runoff_coefficient(),
        rain.len(),
        rain.duration()
    );

    let table = basin.flood_table_with(&rain, interval, policy)?;

    if cli.csv {
        print!("{}", render_csv(&table));
        return Ok(());
    }

    print!("{}", render_table(&table, cli.detail));
    let hydrograph = Distribution::from_columns(table.time, table.flow)?;
    print!("\n{}", render_summary(&hydrograph));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_flag_uses_core_names() {
        let cli = Cli::try_parse_from(["rational", "run.toml", "--policy", "omit"]).unwrap();
        assert_eq!(cli.policy, Some(ZeroTimePolicy::Omit));
        let cli = Cli::try_parse_from(["rational", "run.toml", "--policy", "zero_flow"]).unwrap();
        assert_eq!(cli.policy, Some(ZeroTimePolicy::ZeroFlow));
        assert!(Cli::try_parse_from(["rational", "run.toml", "--policy", "skip"]).is_err());
    }
}
