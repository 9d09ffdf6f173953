use clap::Parser;
use route_count::args::Args;
use route_count::config::Config;
use route_count::{logging, presentation, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::init_tracing(config.verbosity) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let outcome = run::scan(&config)
        .and_then(|summary| presentation::print_results(&mut std::io::stdout().lock(), summary, &config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
