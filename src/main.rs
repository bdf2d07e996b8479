use clap::Parser;
use colored::Colorize;
use ip_subnet_calc::cli::{run, Cli};
use ip_subnet_calc::config::Config;
use ip_subnet_calc::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{}: {e}", "warning".yellow());
    }
    log::info!("#Start main()");

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{}: {e}", "error".red());
            ExitCode::FAILURE
        }
    }
}
