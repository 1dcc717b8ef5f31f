//! Catalog configuration.
//!
//! The core never hardcodes user-facing text. Status messages, the label of
//! the "all categories" filter entry and the data source location all live in
//! `CatalogConfig`, which defaults to the French wording of the catalog page.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the number of visible cards in `summary_template`.
pub const VISIBLE_PLACEHOLDER: &str = "{visible}";

/// Placeholder replaced by the collection size in `summary_template`.
pub const TOTAL_PLACEHOLDER: &str = "{total}";

/// Configuration for a catalog session and its presentation adapters.
///
/// ## Example
///
/// ```
/// use cube_catalog::core::CatalogConfig;
///
/// let config = CatalogConfig::default()
///     .with_source_path("data/cubes.json")
///     .with_summary_template("{visible} / {total}");
///
/// assert_eq!(config.summary(3, 10), "3 / 10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Location of the JSON record source.
    pub source_path: String,

    /// Label of the leading "no category filter" option.
    pub all_categories_label: String,

    /// Status shown while no record is loaded.
    pub no_data_message: String,

    /// Status shown when filters exclude every record.
    pub no_matches_message: String,

    /// Status shown when some records are visible.
    /// Supports `{visible}` and `{total}` placeholders.
    pub summary_template: String,

    /// Status shown after a failed load.
    pub load_failed_message: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_path: "cubes.json".to_string(),
            all_categories_label: "Tous les elements".to_string(),
            no_data_message: "Aucun cube charge. Verifie que cubes.json est accessible."
                .to_string(),
            no_matches_message: "Aucun cube ne correspond aux filtres actuels.".to_string(),
            summary_template: "{visible} cube(s) affiches sur {total}.".to_string(),
            load_failed_message:
                "Erreur: impossible de charger cubes.json. Utilise un serveur local.".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Create a configuration with the default wording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data source location.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Set the label of the "all categories" option.
    #[must_use]
    pub fn with_all_categories_label(mut self, label: impl Into<String>) -> Self {
        self.all_categories_label = label.into();
        self
    }

    /// Set the "no data loaded" status message.
    #[must_use]
    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    /// Set the "no matches" status message.
    #[must_use]
    pub fn with_no_matches_message(mut self, message: impl Into<String>) -> Self {
        self.no_matches_message = message.into();
        self
    }

    /// Set the summary template.
    #[must_use]
    pub fn with_summary_template(mut self, template: impl Into<String>) -> Self {
        self.summary_template = template.into();
        self
    }

    /// Set the load failure status message.
    #[must_use]
    pub fn with_load_failed_message(mut self, message: impl Into<String>) -> Self {
        self.load_failed_message = message.into();
        self
    }

    /// Fill the summary template.
    #[must_use]
    pub fn summary(&self, visible: usize, total: usize) -> String {
        self.summary_template
            .replace(VISIBLE_PLACEHOLDER, &visible.to_string())
            .replace(TOTAL_PLACEHOLDER, &total.to_string())
    }
}
