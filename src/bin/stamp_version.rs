//! Stamps a package version into its `file_id.diz` packaging template.
//!
//! Reads `crates/<package_id>/Cargo.toml` and
//! `crates/<package_id>/build/file_id.diz` relative to the working
//! directory, writes the stamped template to the given output path and
//! echoes the resolved version on stdout.

use icy_build::stamp;
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("need 2 arguments");
        return ExitCode::FAILURE;
    }

    match stamp::run(&args[1], Path::new(&args[2])) {
        Ok(version) => {
            println!("{}", version);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
