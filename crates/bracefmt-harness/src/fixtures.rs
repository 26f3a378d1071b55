//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bracefmt_core::ArgList;

/// Errors from fixture loading and argument-literal parsing.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unparseable argument literal: {0:?}")]
    BadArgLiteral(String),
}

/// A formatting argument captured in a fixture file.
///
/// Each variant maps onto one of the concrete argument types the engine
/// accepts, so a case can be replayed without knowing the original call
/// site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ArgValue {
    /// Signed integer argument, replayed as `i64`.
    Int(i64),
    /// Unsigned integer argument, replayed as `u64`.
    Uint(u64),
    /// Floating-point argument, replayed as `f64`.
    Float(f64),
    /// String argument.
    Str(String),
    /// Boolean argument.
    Bool(bool),
    /// Character argument.
    Char(char),
}

impl ArgValue {
    /// Parse a command-line argument literal.
    ///
    /// A `kind:value` prefix (`int`, `uint`, `float`, `str`, `bool`, `char`)
    /// forces the type; anything else is inferred as int, then float, then
    /// bool, falling back to a plain string.
    pub fn parse_literal(raw: &str) -> Result<Self, HarnessError> {
        let bad = || HarnessError::BadArgLiteral(raw.to_string());
        if let Some((kind, value)) = raw.split_once(':') {
            match kind {
                "int" => return value.parse().map(Self::Int).map_err(|_| bad()),
                "uint" => return value.parse().map(Self::Uint).map_err(|_| bad()),
                "float" => return value.parse().map(Self::Float).map_err(|_| bad()),
                "bool" => return value.parse().map(Self::Bool).map_err(|_| bad()),
                "char" => return value.parse().map(Self::Char).map_err(|_| bad()),
                "str" => return Ok(Self::Str(value.to_string())),
                // not a recognized kind prefix; fall through to inference
                _ => {}
            }
        }
        if let Ok(v) = raw.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        if let Ok(v) = raw.parse::<f64>() {
            return Ok(Self::Float(v));
        }
        match raw {
            "true" => Ok(Self::Bool(true)),
            "false" => Ok(Self::Bool(false)),
            _ => Ok(Self::Str(raw.to_string())),
        }
    }

    /// Append this value to an argument list as its concrete type.
    pub fn push_into(&self, args: &mut ArgList) {
        match self {
            Self::Int(v) => args.push(*v),
            Self::Uint(v) => args.push(*v),
            Self::Float(v) => args.push(*v),
            Self::Str(v) => args.push(v.clone()),
            Self::Bool(v) => args.push(*v),
            Self::Char(v) => args.push(*v),
        }
    }
}

/// Build an argument list from a slice of fixture values.
#[must_use]
pub fn arg_list(values: &[ArgValue]) -> ArgList {
    let mut args = ArgList::new();
    for value in values {
        value.push_into(&mut args);
    }
    args
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Template being rendered.
    pub template: String,
    /// Arguments supplied to the template, in positional order.
    pub args: Vec<ArgValue>,
    /// Expected rendered output.
    pub expected: String,
}

/// A collection of fixture cases for a formatting suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Suite name.
    pub suite: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }

    /// Write fixture set to a file path as pretty JSON.
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), HarnessError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
