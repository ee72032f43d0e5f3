//! Graph input documents
//!
//! Two formats are accepted:
//!
//! JSON
//! ```text
//! { "n": 5, "edges": [[0, 1], [0, 2], [0, 3], [1, 4]] }
//! ```
//!
//! Text: the first line is the vertex count, each following line one edge.
//! `#` starts a comment; blank lines are ignored.
//! ```text
//! # star with a tail
//! 5
//! 0 1
//! 0 2
//! 0 3
//! 1 4
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{ForestError, Result};
use crate::features::tree_validation::domain::TreeVerdict;
use crate::features::tree_validation::infrastructure::GraphTreeValidator;
use crate::shared::models::Edge;

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Text,
}

impl InputFormat {
    /// Guess from the file extension (`.json` is JSON, anything else text)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl FromStr for InputFormat {
    type Err = ForestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ForestError::parse(format!(
                "Unknown input format '{}'. Valid formats: json, text",
                s
            ))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertex count plus edge list, as read from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphInput {
    pub n: i64,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphInput {
    pub fn new(n: i64, edges: Vec<Edge>) -> Self {
        Self { n, edges }
    }

    /// Read a graph file, guessing the format from the extension when
    /// `format` is `None`
    pub fn read(path: impl AsRef<Path>, format: Option<InputFormat>) -> Result<Self> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| InputFormat::from_path(path));
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json(content),
            InputFormat::Text => Self::from_text(content),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_text(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, strip_comment(line).trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| ForestError::parse("Graph input is empty: expected a vertex count"))?;
        let n = parse_int(header, line_no)?;

        let edges = lines
            .map(|(line_no, line)| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(u), Some(v), None) => {
                        Ok(Edge::new(parse_int(u, line_no)?, parse_int(v, line_no)?))
                    }
                    _ => Err(ForestError::parse(format!(
                        "line {}: expected two vertex indices, found '{}'",
                        line_no, line
                    ))),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { n, edges })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Run the validator over this graph
    pub fn check(&self, validator: &GraphTreeValidator) -> Result<TreeVerdict> {
        validator.validate(self.n, &self.edges)
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn parse_int(token: &str, line_no: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|err| {
        ForestError::parse(format!(
            "line {}: '{}' is not an integer",
            line_no, token
        ))
        .with_source(err)
    })
}
