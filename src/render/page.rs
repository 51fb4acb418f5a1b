use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Marker in the template where generated content goes. Designed to appear
/// exactly once; injection replaces the first occurrence only.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))
}

/// Replace the placeholder with `content`. A template without the token
/// comes back unchanged.
pub fn inject(template: &str, content: &str) -> String {
    template.replacen(PLACEHOLDER, content, 1)
}

/// Overwrite the output file, creating its directory if missing. Plain
/// write, no atomic rename.
pub fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        }
    }
    fs::write(path, content)
        .with_context(|| format!("failed to write page {}", path.display()))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

// ── Tests ──
