use clap::{CommandFactory, Parser};

mod commands;
mod core;
mod source;

use commands::Commands;
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "mira")]
#[command(about = "Lexer and parser for the mira expression language.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e)
        }
    };
    std::process::exit(exit_code.code());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);
    crate::core::logger::Logger::debug(&format!(
        "mira {}",
        crate::core::version::app_version()
    ));

    match args.command {
        Some(Commands::Parse(parse_args)) => commands::parse::execute_parse(&parse_args),
        Some(Commands::Tokens(tokens_args)) => commands::tokens::execute_tokens(&tokens_args),
        None => {
            Args::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
