use std::io::Read;

use anyhow::{Context, Result};

use crate::config::InputSource;

const COMMENT_MARKER: char = '#';

/// One reference per line. Blank lines and `#` comments are dropped, the rest
/// are trimmed.
pub fn parse_references(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

pub fn load_references(source: &InputSource) -> Result<Vec<String>> {
    let content = match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read input file `{:?}`", path))?,
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read references from stdin")?;
            buffer
        }
    };

    Ok(parse_references(&content))
}
