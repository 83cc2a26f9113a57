use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Dataset, Row};

/// Number of leading columns kept from every line: x, y, label.
pub const REQUIRED_COLUMNS: usize = 3;

/// Everything after this character on a line is ignored.
const COMMENT_CHAR: char = '#';

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ways a line of numeric text can be rejected. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected at least 3 columns, found {found}")]
    TooFewColumns { line: usize, found: usize },

    #[error("line {line}: expected {expected} columns like the first row, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric text file.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset =
        parse_dataset(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("Parsed {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse numeric text: one row per line, fields separated by any whitespace.
///
/// Blank lines and `#` comments are skipped. Every data line must carry the
/// same number of columns (at least three); only the first three are kept.
pub fn parse_dataset(text: &str) -> Result<Dataset, ParseError> {
    let mut rows = Vec::new();
    let mut expected_columns: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split(COMMENT_CHAR).next().unwrap_or("");
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if tokens.len() < REQUIRED_COLUMNS {
            return Err(ParseError::TooFewColumns {
                line,
                found: tokens.len(),
            });
        }
        match expected_columns {
            None => expected_columns = Some(tokens.len()),
            Some(expected) if expected != tokens.len() => {
                return Err(ParseError::ColumnCountMismatch {
                    line,
                    expected,
                    found: tokens.len(),
                });
            }
            Some(_) => {}
        }

        let values = tokens
            .iter()
            .enumerate()
            .map(|(j, tok)| parse_field(tok, line, j + 1))
            .collect::<Result<Vec<f64>, ParseError>>()?;

        rows.push(Row::new(values[0], values[1], values[2]));
    }

    Ok(Dataset::from_rows(rows))
}

fn parse_field(token: &str, line: usize, column: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line,
        column,
        token: token.to_string(),
    })
}
