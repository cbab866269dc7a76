use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to a .mira file or a directory of them",
        value_parser = validators::validate_path_exists
    )]
    pub source: String,
}
