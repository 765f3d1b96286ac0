//! Prints the canonical distributable filename for an application build.
//!
//! Two accepted shapes: `<app_id> <version>` and `<app_id> <version> <arch>`.

use icy_build::artifact;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("need 1 arguments");
        return ExitCode::FAILURE;
    }
    if args.len() > 4 {
        println!("need 3 arguments");
        return ExitCode::FAILURE;
    }

    let arch = args.get(3).map(String::as_str);
    println!("{}", artifact::resolve(&args[1], &args[2], arch));
    ExitCode::SUCCESS
}
