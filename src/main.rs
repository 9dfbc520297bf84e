use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use miniscript::interpreter::{
    environment::Environment, evaluator::execute, lexer::tokenize, output::StdoutSink, parser::parse,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// miniscript runs MiniScript programs: typed declarations, `display`
/// statements and `start { ... }` blocks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells miniscript to read the script from the file named by `contents`.
    #[arg(short, long)]
    file: bool,

    /// Prints the token sequence to stderr before running.
    #[arg(long)]
    dump_tokens: bool,

    /// Prints the parsed statement tree to stderr before running.
    #[arg(long)]
    dump_ast: bool,

    /// Prints the final variable bindings to stderr after running.
    #[arg(long)]
    dump_env: bool,

    /// Tokenizes and parses the script without executing it.
    #[arg(long)]
    check: bool,

    /// The script itself, a path when `--file` is given, or `-` for stdin.
    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn read_script(args: &Args) -> io::Result<String> {
    if args.contents == "-" {
        let mut script = String::new();
        io::stdin().read_to_string(&mut script)?;
        Ok(script)
    } else if args.file {
        fs::read_to_string(&args.contents)
    } else {
        Ok(args.contents.clone())
    }
}

fn dump_environment(environment: &Environment) {
    let mut bindings: Vec<_> = environment.iter().collect();
    bindings.sort_unstable_by_key(|(name, _)| *name);

    for (name, binding) in bindings {
        eprintln!("{}: {name} => {}", binding.declared_type, binding.value);
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input '{}': {e}", &args.contents);
            return ExitCode::FAILURE;
        },
    };

    let tokens = tokenize(&script);
    if args.dump_tokens {
        eprintln!("Tokens: {tokens:?}");
    }

    let statements = parse(&tokens);
    if args.dump_ast {
        for statement in &statements {
            eprintln!("{:>4} | {statement:?}", statement.line_number());
        }
    }

    if args.check {
        return ExitCode::SUCCESS;
    }

    let mut environment = Environment::new();
    let result = execute(&statements, &mut environment, &mut StdoutSink);

    if args.dump_env {
        dump_environment(&environment);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
