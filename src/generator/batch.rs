//! Applies the rule engine across a list of file names

use std::collections::HashMap;

use tracing::debug;

use super::generate;
use crate::models::GeneratedMetadata;
use crate::settings::Settings;
use crate::traits::RandomSource;

/// Generate metadata for every file name, keyed by file name.
///
/// Names are processed in order against one shared random source. A name
/// that appears more than once keeps only the result of its last
/// occurrence; callers that need one result per occurrence should use
/// [`crate::results::ResultSet::populate`] instead.
pub fn generate_batch<R, S>(
    filenames: &[S],
    settings: &Settings,
    rng: &mut R,
) -> HashMap<String, GeneratedMetadata>
where
    R: RandomSource,
    S: AsRef<str>,
{
    let mut results = HashMap::with_capacity(filenames.len());

    for filename in filenames {
        let filename = filename.as_ref();
        let metadata = generate(filename, settings, rng);
        if results.insert(filename.to_string(), metadata).is_some() {
            debug!("Duplicate file name {} replaced its earlier result", filename);
        }
    }

    debug!("Generated metadata for {} distinct files", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn one_entry_per_distinct_name() {
        let results = generate_batch(&["a.png", "b.png"], &Settings::default(), &mut seeded(1));
        assert_eq!(results.len(), 2);
        assert!(results.contains_key("a.png"));
        assert!(results.contains_key("b.png"));
    }

    #[test]
    fn duplicate_name_keeps_last_result() {
        let settings = Settings::default();
        let results = generate_batch(&["a.png", "a.png"], &settings, &mut seeded(5));
        assert_eq!(results.len(), 1);

        // Replay the same sequence by hand: the stored entry is the second call.
        let mut rng = seeded(5);
        let _first = generate("a.png", &settings, &mut rng);
        let second = generate("a.png", &settings, &mut rng);
        assert_eq!(results["a.png"], second);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let names: [&str; 0] = [];
        assert!(generate_batch(&names, &Settings::default(), &mut seeded(1)).is_empty());
    }

    #[test]
    fn accepts_owned_names() {
        let names = vec!["x.jpg".to_string()];
        let results = generate_batch(&names, &Settings::default(), &mut seeded(1));
        assert!(results["x.jpg"].title.starts_with("x - "));
    }
}
