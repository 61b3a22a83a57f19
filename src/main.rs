use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{arg, Command};

use packer::pack;

fn cli() -> Command {
    Command::new("packer")
        .about("Selects the highest-priced combination of items per input line, within the weight limit")
        .arg(arg!(<INPUT> "Path to the input file, one test case per line").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(--output [OUTPUT] "Write the result to a file instead of stdout").value_parser(clap::value_parser!(PathBuf)))
}

fn main() {
    let matches = cli().get_matches();
    let input = matches.get_one::<PathBuf>("INPUT").unwrap();
    let output = matches.get_one::<PathBuf>("output");

    let result = match pack(input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &result) {
                eprintln!("Error: {e}");
                exit(1);
            }
        }
        None => print!("{result}"),
    }
}
