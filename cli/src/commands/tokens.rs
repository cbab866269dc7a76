use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::formatter::{get_formatter, indent_lines};
use crate::core::paths::clean_path;
use crate::source::{collect_sources, MiraFile};
use clap::Args;
use mira_lib::Token;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
pub struct TokenFileView {
    pub file: String,
    pub tokens: Vec<Token>,
}

impl fmt::Display for TokenFileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.file)?;
        let lines: String = self.tokens.iter().map(|t| format!("{t}\n")).collect();
        write!(f, "{}", indent_lines(&lines, 2))
    }
}

pub fn execute_tokens(args: &TokensArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source_path = Path::new(&args.source.source);
    let formatter = get_formatter(&args.output.output);

    if !source_path.is_dir() {
        let tokens = MiraFile::from_path(source_path)?.tokens()?;
        print!("{}", formatter.format_list(&tokens, "No tokens")?);
        return Ok(());
    }

    let mut views = Vec::new();
    for path in collect_sources(source_path)? {
        let tokens = MiraFile::from_path(&path)?.tokens()?;
        views.push(TokenFileView {
            file: clean_path(&path),
            tokens,
        });
    }
    print!("{}", formatter.format_list(&views, "No files read")?);

    Ok(())
}
