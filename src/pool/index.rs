use crate::model::{Item, Tag};
use ahash::AHashMap;

/// An inverted index over a pool of tagged items.
///
/// Built once per generation session from the items a provider supplies.
/// Within each tag bucket the items keep their insertion order, which later
/// acts as a deterministic tie-break. An empty pool yields an empty index.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    buckets: AHashMap<Tag, Vec<Item>>,
    by_name: AHashMap<String, Item>,
    len: usize,
}

impl TagIndex {
    /// Builds the index in a single O(total tags) pass.
    pub fn build(items: Vec<Item>) -> Self {
        let mut buckets: AHashMap<Tag, Vec<Item>> = AHashMap::new();
        let mut by_name: AHashMap<String, Item> = AHashMap::new();
        let len = items.len();

        for item in items {
            for tag in &item.tags {
                buckets.entry(tag.clone()).or_default().push(item.clone());
            }
            by_name.entry(item.key()).or_insert(item);
        }

        Self {
            buckets,
            by_name,
            len,
        }
    }

    /// All items carrying `tag`, in insertion order. Unknown tags yield an
    /// empty slice rather than an error.
    pub fn items_with_tag(&self, tag: &str) -> &[Item] {
        self.buckets.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Case-insensitive lookup of a single item by name, used to resolve
    /// forced inclusions.
    pub fn lookup(&self, name: &str) -> Option<&Item> {
        self.by_name.get(&name.to_lowercase())
    }

    /// Number of items the index was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct tags observed in the pool.
    pub fn tag_count(&self) -> usize {
        self.buckets.len()
    }
}
