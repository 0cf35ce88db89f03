use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use tengri::{
    interpreter::{
        evaluator::core::{Dialect, Interpreter, MAX_CALL_DEPTH, Options},
        lexer::tokenize,
        parser::core::parse_program,
    },
    parse,
};

/// tengri runs programs written in a rune-based toy language.
///
/// Without a script, an interactive session starts that keeps its bindings
/// between lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Print the value of the last statement after running.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Dump the token stream before running.
    #[arg(short, long)]
    tokens: bool,

    /// Dump the syntax tree before running.
    #[arg(short, long)]
    ast: bool,

    /// Print the global bindings after running.
    #[arg(short, long)]
    env: bool,

    /// Only evaluate declarations and arithmetic; functions fail.
    #[arg(long)]
    baseline: bool,

    /// Reject re-declaring constants.
    #[arg(long)]
    strict_constants: bool,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// The script, or its path with `--file`.
    contents: Option<String>,
}

impl Args {
    fn options(&self) -> Options {
        Options { dialect:          if self.baseline {
                                        Dialect::Baseline
                                    } else {
                                        Dialect::Functions
                                    },
                  strict_constants: self.strict_constants,
                  max_call_depth:   self.max_call_depth, }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = &args.contents else {
        return match repl(args.options()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.clone()
    };

    if let Err(e) = run_script(&script, &args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_script(script: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(script)?;
    if args.tokens {
        println!("--- tokens ---");
        for token in &tokens {
            println!("{}:{}\t{:?}", token.line, token.column, token.kind);
        }
    }

    let program = parse_program(&tokens)?;
    if args.ast {
        println!("--- ast ---");
        println!("{program:#?}");
    }

    let mut interpreter = Interpreter::with_options(args.options());
    let result = interpreter.interpret(&program);

    if args.env {
        println!("--- environment ---");
        if interpreter.environment().is_empty() {
            println!("(no bindings)");
        }
        for (name, binding) in interpreter.environment().sorted() {
            let rune = if binding.constant { "Λ" } else { "—" };
            println!("{rune} {name} = {}", binding.value);
        }
    }

    let result = result?;
    if args.pipe_mode
       && let Some(value) = result
    {
        println!("{value}");
    }
    Ok(())
}

/// Reads one line at a time and runs it against one persistent interpreter.
///
/// Errors are reported and the session continues.
fn repl(options: Options) -> io::Result<()> {
    let mut interpreter = Interpreter::with_options(options);
    let mut stdout = io::stdout();
    log::debug!("repl options: {:?}", interpreter.options());

    println!("tengri {} (Ctrl+D to exit)", env!("CARGO_PKG_VERSION"));
    print!(">> ");
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse(&line) {
            Ok(program) => match interpreter.interpret(&program) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => eprintln!("{e}"),
        }
        print!(">> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}
