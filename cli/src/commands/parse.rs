use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::formatter::{get_formatter, indent_lines};
use crate::core::paths::clean_path;
use crate::source::{collect_sources, MiraFile};
use clap::Args;
use mira_lib::ParseTree;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
pub struct ParsedFileView {
    pub file: String,
    pub tree: ParseTree,
}

impl fmt::Display for ParsedFileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.file)?;
        write!(f, "{}", indent_lines(&self.tree.to_string(), 2))
    }
}

pub fn execute_parse(args: &ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source_path = Path::new(&args.source.source);
    let formatter = get_formatter(&args.output.output);

    if !source_path.is_dir() {
        let tree = MiraFile::from_path(source_path)?.parse()?;
        print!("{}", formatter.format(&tree)?);
        return Ok(());
    }

    let mut views = Vec::new();
    for path in collect_sources(source_path)? {
        let tree = MiraFile::from_path(&path)?.parse()?;
        views.push(ParsedFileView {
            file: clean_path(&path),
            tree,
        });
    }
    crate::debug_log!("Parsed {} files", views.len());
    print!("{}", formatter.format_list(&views, "No files parsed")?);

    Ok(())
}
