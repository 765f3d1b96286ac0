//! Prints the human-readable product name for an application identifier.

use icy_build::apps;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("need 1 arguments");
        return ExitCode::FAILURE;
    }

    println!("{}", apps::display_name_for(&args[1]));
    ExitCode::SUCCESS
}
