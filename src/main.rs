use std::process::ExitCode;

use mdhtml::cli::{parse_args, usage};
use mdhtml::logging::init_logging;
use mdhtml::{Markdown, run};

fn try_main() -> anyhow::Result<()> {
    let config = parse_args(std::env::args_os())?;

    init_logging(config.verbose)?;

    // Convert everything, bailing out on the first failure
    let summary = run(&config, Markdown::default())?;
    println!("Converted {} file(s).", summary.converted);

    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            if e
                .downcast_ref::<mdhtml::Error>()
                .is_some_and(mdhtml::Error::show_usage)
            {
                println!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}
