//! Menagerie library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod catalog;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which catalog source to browse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    #[value(name = "pokeapi")]
    PokeApi,
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::PokeApi => write!(f, "pokeapi"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pokeapi" => Ok(SourceKind::PokeApi),
            "file" => Ok(SourceKind::File),
            other => Err(format!("unknown source {other:?}, expected \"pokeapi\" or \"file\"")),
        }
    }
}
