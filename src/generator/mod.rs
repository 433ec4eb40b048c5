//! Rule engine deriving a title, description and keywords from a file name
//!
//! Generation is total: any file name and any settings produce well-formed
//! output, degenerate settings (zero caps) simply produce empty fields. The
//! only source of variation is the injected [`RandomSource`], so a seeded
//! source makes every call reproducible.
//!
//! Decoration and the extra description text are added before truncation, so
//! the caps in [`Settings`] always hold. Negative caps behave like zero.
//! Truncation counts characters and may cut a word in half.

pub mod batch;

use crate::models::GeneratedMetadata;
use crate::settings::Settings;
use crate::traits::RandomSource;
use crate::vocabulary::{
    DESCRIPTION_TEMPLATES, KEYWORD_POOL, MARKETING_KEYWORDS, MAX_EXTRA_KEYWORDS,
    PLATFORM_PLACEHOLDER, QUALITY_LABEL, QUALITY_PLACEHOLDER, TYPE_PLACEHOLDER,
};

pub use batch::generate_batch;

/// Generate metadata for a single file name
///
/// # Arguments
/// * `filename` - File name as uploaded; only the part before the first `.` is used
/// * `settings` - Snapshot of the generation rules
/// * `rng` - Source for the template choice and keyword sampling
pub fn generate<R: RandomSource>(filename: &str, settings: &Settings, rng: &mut R) -> GeneratedMetadata {
    let type_label = settings.type_label();
    let platform_label = settings.platform_label();

    let title = build_title(base_label(filename), type_label, settings);
    let description = build_description(type_label, platform_label, settings, rng);
    let keywords = build_keywords(type_label, platform_label, settings, rng);

    GeneratedMetadata {
        title,
        description,
        keywords,
    }
}

/// Everything before the first `.`, empty when the name starts with one
pub fn base_label(filename: &str) -> &str {
    filename.split('.').next().unwrap_or_default()
}

fn build_title(base: &str, type_label: &str, settings: &Settings) -> String {
    let mut title = format!("{base} - {type_label} - {QUALITY_LABEL}");

    if let Some(prefix) = settings.prefix_decoration() {
        title = format!("{prefix} {title}");
    }
    if let Some(suffix) = settings.suffix_decoration() {
        title = format!("{title} {suffix}");
    }

    truncate_chars(title, settings.title_cap())
}

fn build_description<R: RandomSource>(
    type_label: &str,
    platform_label: &str,
    settings: &Settings,
    rng: &mut R,
) -> String {
    let template = rng
        .choose(&DESCRIPTION_TEMPLATES)
        .copied()
        .unwrap_or(DESCRIPTION_TEMPLATES[0]);

    let mut description = template
        .replacen(TYPE_PLACEHOLDER, type_label, 1)
        .replacen(PLATFORM_PLACEHOLDER, platform_label, 1)
        .replacen(QUALITY_PLACEHOLDER, QUALITY_LABEL, 1);

    if let Some(addition) = settings.description_addition() {
        description.push(' ');
        description.push_str(addition);
    }

    truncate_chars(description, settings.description_cap())
}

fn build_keywords<R: RandomSource>(
    type_label: &str,
    platform_label: &str,
    settings: &Settings,
    rng: &mut R,
) -> Vec<String> {
    let cap = settings.keyword_cap();
    let mut keywords: Vec<String> = Vec::with_capacity(cap);

    // One draw per requested keyword; repeats are dropped, so a small pool
    // yields fewer entries than requested.
    for _ in 0..cap {
        if let Some(candidate) = rng.choose(&KEYWORD_POOL) {
            push_unique(&mut keywords, candidate);
        }
    }

    let baseline = [type_label.to_lowercase(), platform_label.to_lowercase()]
        .into_iter()
        .chain(MARKETING_KEYWORDS.iter().map(|kw| (*kw).to_string()));
    for keyword in baseline {
        if keywords.len() >= cap {
            break;
        }
        push_unique(&mut keywords, &keyword);
    }

    // Extra terms bypass both the cap and the duplicate check; the final
    // truncation below still enforces the cap.
    if let Some(extra) = settings.extra_keywords() {
        keywords.extend(
            extra
                .split(',')
                .map(|word| word.trim().to_string())
                .take(MAX_EXTRA_KEYWORDS),
        );
    }

    keywords.truncate(cap);
    keywords
}

fn push_unique(keywords: &mut Vec<String>, candidate: &str) {
    if !keywords.iter().any(|kw| kw == candidate) {
        keywords.push(candidate.to_string());
    }
}

/// Cut `text` to at most `max_chars` characters
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
    text
}
