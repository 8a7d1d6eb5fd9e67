//! MyLang CLI.

use mylangc::commands::{
    check_file, explain_error, lex_file, parse_file, run_file, CommandError, RunArgs,
};

fn main() {
    mylangc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let path_arg = |usage: &str| {
        args.get(2)
            .map(String::as_str)
            .ok_or_else(|| CommandError::Usage(format!("missing argument\nUsage: {usage}")))
    };

    let result = match command {
        "run" => RunArgs::parse(&args[2..]).and_then(|run| run_file(&run)),
        "check" => path_arg("mylang check <file>").and_then(check_file),
        "parse" => path_arg("mylang parse <file>").and_then(parse_file),
        "lex" => path_arg("mylang lex <file>").and_then(lex_file),
        "explain" | "--explain" => path_arg("mylang explain <CODE>").and_then(explain_error),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("MyLang {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CommandError::Usage(format!("unknown command '{command}'"))),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        if matches!(err, CommandError::Usage(_)) {
            eprintln!();
            eprintln!("Run `mylang help` for usage.");
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("MyLang interpreter");
    println!();
    println!("Usage: mylang <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [file|-]         Type check and run a program (stdin if no file)");
    println!("  check <file>         Type check a program without running it");
    println!("  parse <file>         Parse a program and print its AST");
    println!("  lex <file>           Tokenize a program and print its tokens");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  -o <path>              Write program output to <path>");
    println!("  --no-typecheck, -ntc   Skip type checking; type errors surface at runtime");
    println!();
    println!("Examples:");
    println!("  mylang run prog.txt");
    println!("  mylang run prog.txt -o out.txt");
    println!("  mylang run -ntc < prog.txt");
    println!("  mylang explain E6004");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=mylang_eval=trace) to enable tracing output.");
}
