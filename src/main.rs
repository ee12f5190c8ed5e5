mod animation;
mod app;
mod cli;
mod config;
mod error;
mod logging;
mod source;

use app::App;
use error::AppError;

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logging::init_from_env() {
        eprintln!("ERROR: {e:#}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("exiting after error: {e:?}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut app = App::new(std::env::args_os(), io::stdout().lock(), io::stderr())?;
    let config = app.config();
    log::debug!(
        "animating {} frames ({:?}) every {:?}",
        config.frames,
        config.direction,
        config.interval
    );

    app.run()
}
