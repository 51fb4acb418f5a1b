use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

/// One animal entry from the local dataset or the API. Every field the
/// renderer touches is optional; missing values get fallback text at
/// render time. Unknown JSON fields (taxonomy etc.) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalRecord {
    pub name: Option<String>,
    #[serde(default)]
    pub characteristics: Characteristics,
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Characteristics {
    pub skin_type: Option<String>,
    pub diet: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lifespan: Option<String>,
    pub top_speed: Option<String>,
}

/// Load the full dataset file as a JSON array of records.
pub fn load_dataset(path: &Path) -> Result<Vec<AnimalRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let animals: Vec<AnimalRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed dataset {}", path.display()))?;
    info!("Loaded {} animals from {}", animals.len(), path.display());
    Ok(animals)
}

/// Distinct skin types in first-seen order, exact duplicates skipped.
///
/// Selection assumes every record carries the field; one without it is a
/// propagated error, same as the filter pass.
pub fn skin_types(animals: &[AnimalRecord]) -> Result<Vec<String>> {
    let mut types: Vec<String> = Vec::new();
    for animal in animals {
        let skin = require_skin(animal)?;
        if !types.iter().any(|t| t == skin) {
            types.push(skin.to_string());
        }
    }
    Ok(types)
}

/// Records whose skin type matches `choice`, case-insensitively.
pub fn filter_by_skin(animals: &[AnimalRecord], choice: &str) -> Result<Vec<AnimalRecord>> {
    let want = choice.to_lowercase();
    let mut selected = Vec::new();
    for animal in animals {
        if require_skin(animal)?.to_lowercase() == want {
            selected.push(animal.clone());
        }
    }
    Ok(selected)
}

fn require_skin(animal: &AnimalRecord) -> Result<&str> {
    match animal.characteristics.skin_type.as_deref() {
        Some(skin) => Ok(skin),
        None => bail!(
            "animal '{}' has no skin_type",
            animal.name.as_deref().unwrap_or("<unnamed>")
        ),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, skin: Option<&str>) -> AnimalRecord {
        AnimalRecord {
            name: Some(name.to_string()),
            characteristics: Characteristics {
                skin_type: skin.map(str::to_string),
                ..Characteristics::default()
            },
            locations: None,
        }
    }

    #[test]
    fn fixture_loads() {
        let animals = load_dataset(Path::new("tests/fixtures/animals.json")).unwrap();
        assert_eq!(animals.len(), 4);
        assert_eq!(animals[0].name.as_deref(), Some("Lion"));
        // Second record has no characteristics mapping at all
        assert!(animals[1].characteristics.skin_type.is_none());
    }

    #[test]
    fn skin_types_first_seen_deduped() {
        let animals = vec![
            record("Fox", Some("Fur")),
            record("Snake", Some("Scales")),
            record("Bear", Some("Fur")),
        ];
        assert_eq!(skin_types(&animals).unwrap(), vec!["Fur", "Scales"]);
    }

    #[test]
    fn skin_types_dedupe_is_exact() {
        let animals = vec![record("Fox", Some("Fur")), record("Bear", Some("fur"))];
        assert_eq!(skin_types(&animals).unwrap(), vec!["Fur", "fur"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let animals = vec![
            record("Fox", Some("Fur")),
            record("Snake", Some("Scales")),
        ];
        let selected = filter_by_skin(&animals, "fur").unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name.as_deref(), Some("Fox"));
    }

    #[test]
    fn missing_skin_type_fails_selection() {
        let animals = vec![record("Fox", Some("Fur")), record("Blob", None)];
        let err = skin_types(&animals).unwrap_err();
        assert!(err.to_string().contains("Blob"));
        assert!(filter_by_skin(&animals, "fur").is_err());
    }
}
