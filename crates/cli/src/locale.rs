use std::path::Path;

use anyhow::Context;
use notifi_history_core::i18n::Catalog;

/// Load the string catalog: the locale file at `path` layered over the
/// built-in English strings, or English alone when no path is given.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::english());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file {}", path.display()))?;
    let catalog = Catalog::from_json_str(&raw)
        .with_context(|| format!("Failed to parse locale file {}", path.display()))?;

    let missing = catalog.missing_keys();
    if !missing.is_empty() {
        tracing::warn!(
            path = %path.display(),
            missing = ?missing,
            "Locale file is missing history strings, falling back to English"
        );
    }

    Ok(catalog.with_fallback(Catalog::english()))
}
