// ABOUTME: Binary entry point for the vellum renderer
// ABOUTME: Converts any pipeline failure into a single error line and a non-zero exit

use vellum::cli::{App, Args};

fn main() {
    let args = Args::parse_args();

    if let Err(err) = App::new(args).run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
