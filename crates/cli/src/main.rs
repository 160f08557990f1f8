//! benchplot CLI entry point.

fn main() {
    benchplot_cli::init_logging();

    if let Err(e) = benchplot_cli::run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
