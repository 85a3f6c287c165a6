//! Document module - Read and write element documents
//!
//! A document is the JSON array of top-level nodes produced by the template
//! parser.

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::core::element::Node;

/// Read a document from a JSON file
pub fn read_document(path: &Path) -> Result<Vec<Node>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read document: {}", path.display()))?;

    serde_json::from_str(&content)
        .context(format!("Failed to parse document: {}", path.display()))
}

/// Render a document as pretty JSON
pub fn to_pretty_json(nodes: &[Node]) -> Result<String> {
    serde_json::to_string_pretty(nodes).context("Failed to serialize document")
}

/// Write a document, creating parent directories
pub fn write_document(path: &Path, nodes: &[Node], verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut json = to_pretty_json(nodes)?;
    json.push('\n');

    std::fs::write(path, json)
        .context(format!("Failed to write document: {}", path.display()))?;

    if verbose {
        eprintln!(
            "     {} {}",
            "✓".bright_green(),
            path.display().to_string().bright_cyan()
        );
    }

    Ok(())
}
