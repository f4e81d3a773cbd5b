//! Weft CLI
//!
//! Renders or checks template files.

use weft::commands::{check_file, parse_options, render_file};
use weft::Error;

fn main() {
    weft::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let result = match command {
        "render" => parse_options(&args[2..]).and_then(|options| {
            let stdout = std::io::stdout();
            render_file(&options, stdout.lock()).map(|_| ())
        }),
        "check" => parse_options(&args[2..]).and_then(|options| {
            let globals = check_file(&options)?;
            if globals.is_empty() {
                println!("ok");
            } else {
                println!("ok, globals: {}", globals.join(", "));
            }
            Ok(())
        }),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(Error::Usage(format!("unknown command '{other}'"))),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        if matches!(error, Error::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: weft <command> <template> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render    Render a template to standard output");
    eprintln!("  check     Compile a template and list the globals it uses");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --context <file.json>   Globals from the members of a JSON object");
    eprintln!("  -s, --set <name=value>      Set a global (numbers when parsable)");
    eprintln!("  --begin <text>              Block begin delimiter (default: {{{{)");
    eprintln!("  --continue <text>           Block continue delimiter (default: |)");
    eprintln!("  --end <text>                Block end delimiter (default: }}}})");
    eprintln!("  --escape <char>             Escape character (default: \\)");
    eprintln!("  --trim <mode>               nothing, enclosing, lines or collapse");
    eprintln!();
    eprintln!("Set RUST_LOG=weft=debug (or trace) for diagnostics.");
}
