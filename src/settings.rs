//! Generation rules supplied by the caller

use serde::{Deserialize, Serialize};

use crate::vocabulary::{DEFAULT_PLATFORM, DEFAULT_TYPE};

/// Rules controlling title, description and keyword generation.
///
/// The three length fields are required when deserializing. Everything else
/// defaults to "off" / empty. A zero or negative length is accepted and
/// produces empty output rather than an error. Field names serialize in
/// camelCase (`titleLength`, `prefixText`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Hard cap on title length, in characters
    pub title_length: i64,
    /// Hard cap on description length, in characters
    pub description_length: i64,
    /// Upper bound on the number of keywords
    pub keywords_count: i64,
    #[serde(default)]
    pub image_type: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub prefix: bool,
    #[serde(default)]
    pub prefix_text: String,
    #[serde(default)]
    pub suffix: bool,
    #[serde(default)]
    pub suffix_text: String,
    /// Appends `negative_title_text` to the description; it does not filter anything
    #[serde(default)]
    pub negative_title: bool,
    #[serde(default)]
    pub negative_title_text: String,
    /// Appends up to three comma separated terms to the keywords
    #[serde(default)]
    pub negative_keywords: bool,
    #[serde(default)]
    pub negative_keywords_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title_length: 70,
            description_length: 150,
            keywords_count: 30,
            image_type: String::new(),
            platform: String::new(),
            prefix: false,
            prefix_text: String::new(),
            suffix: false,
            suffix_text: String::new(),
            negative_title: false,
            negative_title_text: String::new(),
            negative_keywords: false,
            negative_keywords_text: String::new(),
        }
    }
}

impl Settings {
    /// Title cap with negative values treated as zero
    pub fn title_cap(&self) -> usize {
        clamp_cap(self.title_length)
    }

    pub fn description_cap(&self) -> usize {
        clamp_cap(self.description_length)
    }

    pub fn keyword_cap(&self) -> usize {
        clamp_cap(self.keywords_count)
    }

    /// The item type label, falling back to the default when unset
    pub fn type_label(&self) -> &str {
        non_empty_or(&self.image_type, DEFAULT_TYPE)
    }

    /// The marketplace label, falling back to the default when unset
    pub fn platform_label(&self) -> &str {
        non_empty_or(&self.platform, DEFAULT_PLATFORM)
    }

    pub fn prefix_decoration(&self) -> Option<&str> {
        enabled_text(self.prefix, &self.prefix_text)
    }

    pub fn suffix_decoration(&self) -> Option<&str> {
        enabled_text(self.suffix, &self.suffix_text)
    }

    pub fn description_addition(&self) -> Option<&str> {
        enabled_text(self.negative_title, &self.negative_title_text)
    }

    pub fn extra_keywords(&self) -> Option<&str> {
        enabled_text(self.negative_keywords, &self.negative_keywords_text)
    }
}

fn clamp_cap(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn enabled_text(flag: bool, text: &str) -> Option<&str> {
    (flag && !text.is_empty()).then_some(text)
}
