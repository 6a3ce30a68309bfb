//! Splits a type's sorted entries into bounded shards.

use std::num::NonZeroUsize;

use crate::{core::allocator::ResourceEntry, runtime::ResourceType};

/// A contiguous slice of one type's identifier-sorted entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    pub resource_type: ResourceType,
    pub index: usize,
    pub entries: Vec<ResourceEntry>,
}

impl Shard {
    /// Container module name, `<type><index>` (e.g. `drawable0`, `string_array0`).
    pub fn module_name(&self) -> String {
        format!("{}{}", self.resource_type.module_name(), self.index)
    }

    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name())
    }
}

/// Chunk `entries` into shards of at most `max_per_container` entries.
///
/// Order is preserved, so shard `n` entirely precedes shard `n + 1`. Shard
/// indices start at 0. No shard is produced for an empty input.
pub fn partition(
    resource_type: ResourceType,
    entries: Vec<ResourceEntry>,
    max_per_container: NonZeroUsize,
) -> Vec<Shard> {
    let mut shards = Vec::with_capacity(entries.len().div_ceil(max_per_container.get()));
    let mut entries = entries.into_iter().peekable();

    while entries.peek().is_some() {
        let chunk: Vec<ResourceEntry> = entries.by_ref().take(max_per_container.get()).collect();
        shards.push(Shard {
            resource_type,
            index: shards.len(),
            entries: chunk,
        });
    }

    shards
}
