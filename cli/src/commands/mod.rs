pub mod parse;
pub mod shared;
pub mod tokens;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Parse sources and print their syntax trees")]
    Parse(parse::ParseArgs),
    #[command(about = "Print the token stream of sources")]
    Tokens(tokens::TokensArgs),
}
