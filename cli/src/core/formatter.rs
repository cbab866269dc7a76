use crate::core::error::MiraError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Indents every non-empty line of `text` by `indent` spaces.
pub fn indent_lines(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("{pad}{line}\n"));
        }
    }
    out
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize + Display + ?Sized>(&self, model: &T) -> Result<String, MiraError> {
        let out = match self.engine {
            OutputFormat::Text => model.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(model)?,
        };
        Ok(ensure_trailing_newline(out))
    }

    pub fn format_list<T: Serialize + Display>(
        &self,
        list: &[T],
        empty_msg: &str,
    ) -> Result<String, MiraError> {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    Ok(ensure_trailing_newline(empty_msg.to_string()))
                } else {
                    Ok(list
                        .iter()
                        .map(|item| ensure_trailing_newline(item.to_string()))
                        .collect())
                }
            }
            OutputFormat::Json => Ok(ensure_trailing_newline(serde_json::to_string_pretty(
                list,
            )?)),
        }
    }
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
