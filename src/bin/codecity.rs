use clap::Parser;
use colored::Colorize;
use codecity_core::cli::{self, Cli};
use codecity_core::error::CityError;
use codecity_core::exit::CityExit;

fn main() -> CityExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::dispatch::execute(&cli) {
        Ok(()) => CityExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            e.downcast_ref::<CityError>()
                .map_or(CityExit::Error, CityExit::from)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
