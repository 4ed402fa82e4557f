use primer::tour::{self, Config};
use std::{
    io::{self, Write},
    process::ExitCode,
};

fn main() -> ExitCode {
    env_logger::init();
    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = tour::run(&mut out, &config).and_then(|()| {
        if config.pause_at_end {
            tour::pause(io::stdin().lock(), &mut out)?;
        }
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
