use clap::{CommandFactory, Parser};
use compost_log::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // Without a subcommand, show the overview instead of doing nothing
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Compost Log - compost pile monitoring records");
    println!("=============================================");
    println!();
    println!("Keep temperature, humidity, pH and conductivity readings per compost");
    println!("pile and move them in and out of CSV files.");
    println!();
    println!("EXAMPLES:");
    println!("    compost-log profiles create \"Pila 1\" --composition \"hojas, cafe\"");
    println!("    compost-log detect lecturas.csv");
    println!("    compost-log import --profile \"Pila 1\" lecturas.csv");
    println!("    compost-log export --profile \"Pila 1\"");
    println!();

    if Args::command().print_help().is_err() {
        println!("For more information on a command: compost-log <COMMAND> --help");
    }
}
