use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

use cli::{Args, Context, prompts};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        prompts::warn(&format!("Failed to initialise logging: {e}"));
    }

    let result = if args.wants_form() && prompts::is_interactive() {
        tui::run(&args)
    } else {
        Context::new(args).run()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
