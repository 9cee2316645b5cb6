use advection_fluxes::{error::SchemeResult, initialization, io::write_to_csv::write_to_csv};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

/// One-dimensional linear advection with explicit flux/slope-limited schemes
#[derive(Parser, Debug)]
#[command(name = "advection-fluxes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "1-D linear advection with explicit finite-volume schemes", long_about = None)]
struct Cli {
    /// JSON parameter file
    #[arg(default_value = "inputs/solverparam.json")]
    param_file: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn run(param_file: &str) -> SchemeResult<()> {
    let params = initialization::initialize_params_by_file(param_file)?;
    let mut solver = initialization::initialize_solver(&params)?;
    solver.solve()?;
    if let Some(output) = &params.output {
        write_to_csv(solver.solution.view(), &solver.mesh, output)?;
        info!("solution written to {}", output);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str())).init();
    if let Err(e) = run(&cli.param_file) {
        error!("{}: {}", cli.param_file, e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["advection-fluxes"]).unwrap();
        assert_eq!(cli.param_file, "inputs/solverparam.json");
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_arguments() {
        let cli =
            Cli::try_parse_from(["advection-fluxes", "case.json", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.param_file, "case.json");
        assert_eq!(cli.log_level, "debug");
    }
}
