use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use bft::{Interpreter, diagnostics, parse};
use clap::Parser;

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} <FILE>             # Parse and run the Brainfuck program in FILE
  {0} --dump-ast <FILE>  # Print the parsed tree instead of executing

Notes:
- Input (`,`) reads a single byte from stdin; at end of input the current
  cell is set to 255.
- Program output goes to stdout; diagnostics go to stderr.
- Characters outside of Brainfuck's ><+-.,[] are comments.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bft")]
struct Cli {
    /// Path to the Brainfuck source file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the parsed tree instead of executing
    #[arg(long = "dump-ast")]
    dump_ast: bool,
}

fn run(program: &str, cli: Cli) -> i32 {
    let Some(path) = cli.file else {
        usage_and_exit(program, 1);
    };

    let source = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{program}: cannot open {}: {e}", path.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let tree = match parse(&source) {
        Ok(tree) => tree,
        Err(err) => {
            diagnostics::report(program, &source, &err);
            return 1;
        }
    };

    if cli.dump_ast {
        println!("{tree:#?}");
        let _ = io::stdout().flush();
        return 0;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut interp = Interpreter::new(stdin, stdout);
    if let Err(err) = interp.run(&tree) {
        diagnostics::report(program, &source, &err);
        return 1;
    }

    let _ = io::stdout().flush();
    0
}

fn main() {
    // Pull the program name for usage/diagnostic rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bft"));

    let cli = Cli::parse();
    std::process::exit(run(&program, cli));
}
