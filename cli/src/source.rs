use crate::core::error::MiraError;
use crate::core::paths::{clean_path, is_mira_file};
use mira_lib::{ParseTree, Token};
use std::fs;
use std::path::{Path, PathBuf};

/// A mira source file read into memory.
pub struct MiraFile {
    pub path: PathBuf,
    pub content: String,
}

impl MiraFile {
    pub fn from_path(path: &Path) -> Result<Self, MiraError> {
        let content = fs::read_to_string(path)?;
        crate::debug_log!("Read {} ({} bytes)", clean_path(path), content.len());
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn display_path(&self) -> String {
        clean_path(&self.path)
    }

    pub fn tokens(&self) -> Result<Vec<Token>, MiraError> {
        let tokens = mira_lib::tokenize(&self.content)
            .map_err(|e| e.with_file(self.display_path()))?;
        crate::debug_log!("{}: {} tokens", self.display_path(), tokens.len());
        Ok(tokens)
    }

    pub fn parse(&self) -> Result<ParseTree, MiraError> {
        let tree = mira_lib::parse(&self.content).map_err(|e| e.with_file(self.display_path()))?;
        crate::debug_log!("{}: {} module items", self.display_path(), tree.items().len());
        Ok(tree)
    }
}

/// Resolves `--source` into the files to read.
///
/// A file is returned as is. A directory yields its `.mira` files,
/// non-recursively and sorted by path.
pub fn collect_sources(source: &Path) -> Result<Vec<PathBuf>, MiraError> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if is_mira_file(&path) {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(MiraError::NoSourceFiles(clean_path(source)));
    }
    files.sort();
    Ok(files)
}
