//! phrasedeck CLI entry point.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = phrasedeck::run() {
        eprintln!("error: {}", phrasedeck::output::error_chain(&e));
        std::process::exit(1);
    }
}
