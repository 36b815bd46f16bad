use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Apply a JSON patch (RFC 6902) to a JSON document.
#[derive(Debug, Serialize, Deserialize, Parser)]
#[clap(author, version, about)]
pub struct PatchConfig {
    /// Document to patch, or `-` to read it from stdin
    pub(crate) document: PathBuf,
    /// File holding a JSON array of patch operations
    #[clap(long, short)]
    pub(crate) patch: PathBuf,
    /// Pretty-print the patched document
    #[clap(long)]
    pub(crate) pretty: bool,
    /// Still print the document when an operation fails, with every step
    /// before the failing one applied
    #[clap(long)]
    pub(crate) partial: bool,
}

impl PatchConfig {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
