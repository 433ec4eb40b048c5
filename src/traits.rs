//! Seams between the generator and its surroundings

use anyhow::Result;
use async_trait::async_trait;
use rand::{Rng, RngCore};

/// Source of random choices for the generator.
///
/// Passed explicitly so that a fixed seed reproduces the same output. Every
/// `rand` generator is a `RandomSource`, see [`crate::random`] for constructors.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Pick one element uniformly, `None` for an empty slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Destination for rendered export files
#[async_trait]
pub trait ExportTarget: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Deliver `content` under `file_name`
    ///
    /// # Returns
    /// * `Result<String>` - Where the content ended up, for display
    async fn deliver(&self, file_name: &str, content: &str) -> Result<String>;
}
