use clap::{Parser, Subcommand};
use exprtree::{format_tree, parse_expression, Lexer};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "exprtree",
    version,
    about = "Arithmetic expression parser that prints syntax trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an expression and print its syntax tree
    Tree {
        /// Expression to parse, e.g. 1+2*3
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        expression: Option<String>,

        /// Read the expression from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the token stream of an expression
    Tokens {
        /// Expression to scan, e.g. 1+2*3
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        expression: Option<String>,

        /// Read the expression from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Tree { expression, file } => {
            let source = load_expression(expression, file.as_deref())?;
            let tree = parse_expression(&source)?;
            log::debug!("created ast");
            print!("{}", format_tree(&tree));
        }
        Command::Tokens { expression, file } => {
            let source = load_expression(expression, file.as_deref())?;
            for (index, token) in Lexer::new(&source).enumerate() {
                println!("{}: {}", index, token?);
            }
        }
    }
    Ok(())
}

// A trailing newline in a file would otherwise surface as a lexical error.
fn load_expression(expression: Option<String>, file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            log::debug!("read expression from {}", path.display());
            Ok(text.trim_end().to_string())
        }
        None => Ok(expression.unwrap_or_default()),
    }
}
