use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::info;

use crate::generator::generate;
use crate::models::{ResultItem, ResultUpdate};
use crate::settings::Settings;
use crate::traits::RandomSource;

/// Generated results in upload order, addressed by id.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with one freshly generated item per file name.
    ///
    /// Unlike the batch driver, repeated names produce separate items. Ids are
    /// `"{unix_millis}-{index}"`.
    pub fn populate<R, S>(&mut self, filenames: &[S], settings: &Settings, rng: &mut R) -> usize
    where
        R: RandomSource,
        S: AsRef<str>,
    {
        let stamp = Utc::now().timestamp_millis();

        self.items = filenames
            .iter()
            .enumerate()
            .map(|(index, filename)| {
                let filename = filename.as_ref();
                ResultItem::new(
                    format!("{stamp}-{index}"),
                    filename.to_string(),
                    generate(filename, settings, rng),
                )
            })
            .collect();

        info!("Generated {} results", self.items.len());
        self.items.len()
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ResultItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Apply a manual edit to one result
    pub fn update(&mut self, id: &str, update: ResultUpdate) -> Result<&ResultItem> {
        let item = self.find_mut(id)?;

        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(keywords) = update.keywords {
            item.keywords = keywords;
        }

        info!("Updated result {}", id);
        Ok(item)
    }

    /// Re-run generation for one result, keeping its id and file name
    pub fn regenerate<R: RandomSource>(
        &mut self,
        id: &str,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<&ResultItem> {
        let item = self.find_mut(id)?;
        let metadata = generate(&item.filename, settings, rng);
        item.apply(metadata);

        info!("Regenerated result {} for {}", id, item.filename);
        Ok(item)
    }

    pub fn remove(&mut self, id: &str) -> Result<ResultItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| anyhow!("No result with id {}", id))?;

        let removed = self.items.remove(position);
        info!("Removed result {} ({})", id, removed.filename);
        Ok(removed)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut ResultItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| anyhow!("No result with id {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    fn populated(names: &[&str]) -> ResultSet {
        let mut set = ResultSet::new();
        set.populate(names, &Settings::default(), &mut seeded(11));
        set
    }

    #[test]
    fn populate_keeps_every_occurrence_with_unique_ids() {
        let set = populated(&["a.png", "a.png", "b.png"]);
        assert_eq!(set.len(), 3);

        let ids: Vec<&str> = set.items().iter().map(|item| item.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert!(ids[0].ends_with("-0"));
        assert!(ids[2].ends_with("-2"));
        assert_eq!(set.items()[2].filename, "b.png");
    }

    #[test]
    fn populate_replaces_previous_results() {
        let mut set = populated(&["a.png", "b.png"]);
        set.populate(&["c.png"], &Settings::default(), &mut seeded(2));
        assert_eq!(set.len(), 1);
        assert_eq!(set.items()[0].filename, "c.png");
    }

    #[test]
    fn update_changes_only_given_fields() -> Result<()> {
        let mut set = populated(&["a.png"]);
        let id = set.items()[0].id.clone();
        let before = set.items()[0].clone();

        set.update(
            &id,
            ResultUpdate {
                title: Some("Edited".to_string()),
                ..ResultUpdate::default()
            },
        )?;

        let after = set.get(&id).unwrap();
        assert_eq!(after.title, "Edited");
        assert_eq!(after.description, before.description);
        assert_eq!(after.keywords, before.keywords);
        Ok(())
    }

    #[test]
    fn regenerate_preserves_identity() -> Result<()> {
        let mut set = populated(&["a.png"]);
        let id = set.items()[0].id.clone();

        let settings = Settings {
            title_length: 4,
            ..Settings::default()
        };
        let item = set.regenerate(&id, &settings, &mut seeded(3))?;

        assert_eq!(item.id, id);
        assert_eq!(item.filename, "a.png");
        assert_eq!(item.title, "a - ");
        Ok(())
    }

    #[test]
    fn remove_deletes_the_addressed_item() -> Result<()> {
        let mut set = populated(&["a.png", "b.png"]);
        let id = set.items()[0].id.clone();

        let removed = set.remove(&id)?;
        assert_eq!(removed.filename, "a.png");
        assert_eq!(set.len(), 1);
        assert!(set.get(&id).is_none());
        Ok(())
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut set = populated(&["a.png"]);
        assert!(set.remove("missing").is_err());
        assert!(set.update("missing", ResultUpdate::default()).is_err());
        assert!(
            set.regenerate("missing", &Settings::default(), &mut seeded(1))
                .is_err()
        );
        assert_eq!(set.len(), 1);
    }
}
