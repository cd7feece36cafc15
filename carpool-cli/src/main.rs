//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "the CLI reports fatal errors on stderr")]
fn main() {
    if let Err(err) = carpool_cli::run() {
        eprintln!("carpool: {err}");
        std::process::exit(1);
    }
}
