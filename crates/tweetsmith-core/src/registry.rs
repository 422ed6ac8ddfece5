//! Category registry: the fixed, ordered table of filter categories.
//!
//! The registry is loaded once at startup (either the built-in table or a
//! TOML file) and is shared read-only from then on. Every category renders
//! one filter control and contributes exactly one key to the selection state.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweetsmithError};

/// A named filter dimension with a fixed set of selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, used as the key in `selectedOptions`.
    pub key: String,
    /// Display label.
    pub name: String,
    /// Selectable values, in display order.
    pub options: Vec<String>,
}

impl Category {
    pub fn new(key: &str, name: &str, options: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Whether `value` is one of this category's options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// On-disk shape of a registry file.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

/// Ordered, validated collection of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting duplicate keys and empty option lists.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(TweetsmithError::Registry(
                "at least one category is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.key.trim().is_empty() {
                return Err(TweetsmithError::Registry(format!(
                    "category {:?} has an empty key",
                    category.name
                )));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(TweetsmithError::Registry(format!(
                    "duplicate category key {:?}",
                    category.key
                )));
            }
            if category.options.is_empty() {
                return Err(TweetsmithError::Registry(format!(
                    "category {:?} has no options",
                    category.key
                )));
            }
            // "" is reserved for "no selection".
            if category.options.iter().any(|o| o.is_empty()) {
                return Err(TweetsmithError::Registry(format!(
                    "category {:?} has an empty option",
                    category.key
                )));
            }
            let unique: HashSet<&str> = category.options.iter().map(String::as_str).collect();
            if unique.len() != category.options.len() {
                return Err(TweetsmithError::Registry(format!(
                    "category {:?} has duplicate options",
                    category.key
                )));
            }
        }

        Ok(Self { categories })
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "tone",
                    "Tone",
                    &[
                        "funny",
                        "professional",
                        "casual",
                        "inspirational",
                        "sarcastic",
                        "informative",
                    ],
                ),
                Category::new("length", "Length", &["short", "medium", "long"]),
                Category::new(
                    "audience",
                    "Audience",
                    &[
                        "developers",
                        "founders",
                        "marketers",
                        "students",
                        "general",
                    ],
                ),
                Category::new(
                    "style",
                    "Style",
                    &["question", "thread starter", "hot take", "tip", "story"],
                ),
                Category::new("emoji", "Emoji", &["none", "some", "lots"]),
                Category::new("hashtags", "Hashtags", &["none", "one", "a few"]),
            ],
        }
    }

    /// Parse a registry from TOML (`[[category]]` tables).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(contents).map_err(|e| {
            TweetsmithError::Registry(format!("Failed to parse category file: {e}"))
        })?;
        Self::new(file.categories)
    }

    /// Load a registry file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TweetsmithError::Registry(format!(
                "Failed to read category file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a CategoryRegistry {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_registry_is_valid() {
        let builtin = CategoryRegistry::builtin();
        let rebuilt = CategoryRegistry::new(builtin.iter().cloned().collect());
        assert!(rebuilt.is_ok());
        assert!(builtin.contains("tone"));
        assert_eq!(builtin.keys().next(), Some("tone"));
    }

    #[test]
    fn parses_toml_in_order() {
        let registry = CategoryRegistry::from_toml_str(
            r#"
[[category]]
key = "tone"
name = "Tone"
options = ["funny", "dry"]

[[category]]
key = "length"
name = "Length"
options = ["short"]
"#,
        )
        .unwrap();

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["tone", "length"]);
        assert_eq!(registry.get("tone").unwrap().options, vec!["funny", "dry"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = CategoryRegistry::new(vec![
            Category::new("tone", "Tone", &["a"]),
            Category::new("tone", "Tone again", &["b"]),
        ]);
        assert!(matches!(result, Err(TweetsmithError::Registry(_))));
    }

    #[test]
    fn rejects_empty_registry_and_empty_options() {
        assert!(CategoryRegistry::new(vec![]).is_err());
        assert!(CategoryRegistry::new(vec![Category::new("tone", "Tone", &[])]).is_err());
        assert!(CategoryRegistry::new(vec![Category::new("tone", "Tone", &[""])]).is_err());
        assert!(CategoryRegistry::new(vec![Category::new("tone", "Tone", &["a", "a"])]).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[category]]\nkey = \"mood\"\nname = \"Mood\"\noptions = [\"calm\"]"
        )
        .unwrap();

        let registry = CategoryRegistry::load(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("mood").unwrap().has_option("calm"));
    }

    #[test]
    fn missing_file_is_a_registry_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CategoryRegistry::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(TweetsmithError::Registry(_))));
    }
}
