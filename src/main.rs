use clap::Parser;
use hurdat2_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HURDAT2 Processor - Hurricane Landfall Classification");
    println!("=====================================================");
    println!();
    println!("Parse NOAA HURDAT2 best-track files and classify Florida landfall");
    println!("events using selectable detection strategies.");
    println!();
    println!("USAGE:");
    println!("    hurdat2-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    classify    Detect landfall events in a HURDAT2 file (main command)");
    println!("    export      Export every parsed track entry as flat CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Classify with the indicator strategy (default):");
    println!("    hurdat2-processor classify --input hurdat2.txt --boundary states.geojson");
    println!();
    println!("    # Use the geometric strategy and write JSON:");
    println!("    hurdat2-processor classify --input hurdat2.txt --boundary states.geojson \\");
    println!("                               --strategy geometric --format json -o events.json");
    println!();
    println!("    # Report every qualifying fix instead of the first per storm:");
    println!("    hurdat2-processor classify --input hurdat2.txt --boundary states.geojson \\");
    println!("                               --strategy transition --all-events");
    println!();
    println!("    # Dump the parsed dataset for spreadsheet analysis:");
    println!("    hurdat2-processor export --input hurdat2.txt --output hurricane_data.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hurdat2-processor <COMMAND> --help");
}
