//! yat CLI

use yat_eval::stdout_handler;
use yat_fmt::WriterEmitter;
use yatc::commands::{fold_demo, format_demo, list_demos, run_demo, CliError, RunOptions};

fn main() {
    yatc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "demos" => {
            let mut out = WriterEmitter::stdout();
            list_demos(&mut out);
            out.finish().map_err(CliError::from)
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: yatc run <demo> [--fold] [--stdin] [--max-depth=<n>]");
                std::process::exit(1);
            }
            let options = match RunOptions::parse(args[3..].iter().map(String::as_str)) {
                Ok(options) => options,
                Err(arg) => {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                }
            };
            run_demo(&args[2], options, stdout_handler()).map(drop)
        }
        "fmt" => {
            if args.len() < 3 {
                eprintln!("Usage: yatc fmt <demo>");
                std::process::exit(1);
            }
            let mut out = WriterEmitter::stdout();
            format_demo(&args[2], &mut out).and_then(|()| out.finish().map_err(CliError::from))
        }
        "fold" => {
            if args.len() < 3 {
                eprintln!("Usage: yatc fold <demo>");
                std::process::exit(1);
            }
            let mut out = WriterEmitter::stdout();
            fold_demo(&args[2], &mut out).and_then(|stats| {
                tracing::info!(visited = stats.visited, folded = stats.folded, "folded");
                out.finish().map_err(CliError::from)
            })
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("yatc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        tracing::error!(%err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("yat expression language");
    println!();
    println!("Usage: yatc <command> [options]");
    println!();
    println!("Commands:");
    println!("  demos            List the bundled programs");
    println!("  run <demo>       Evaluate a program");
    println!("  fmt <demo>       Pretty-print a program");
    println!("  fold <demo>      Constant-fold a program and print the result");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Run options:");
    println!("  --fold           Evaluate the constant-folded program");
    println!("  --stdin          Read input from the terminal instead of the demo's script");
    println!("  --max-depth=<n>  Maximum number of nested calls");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=yat_eval=debug) for trace output on stderr.");
}
