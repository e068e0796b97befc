mod lessons;

use std::process::ExitCode;

use seqops::Console;
use settings::SETTINGS;

pub fn main() -> ExitCode {
    // Register a custom panic handler
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!(
            "The notebook has panicked. This is a bug. Please open an issue at {}, including the debug information below. Thanks!\n",
            env!("CARGO_PKG_REPOSITORY")
        );
        default_hook(info);
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut console = Console::stdout();
    let result = lessons::run(&mut console, &SETTINGS).and_then(|()| console.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Failed to write to the console: {error}");
            ExitCode::FAILURE
        },
    }
}
