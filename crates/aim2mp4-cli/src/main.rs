use aim2mp4_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr when the
    // state dir is unwritable so the CLI still runs.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    std::process::exit(cli::run_from_args());
}
