// src/shared/state/section_list.rs
use super::record_key::RecordKey;

/// Anything that can live in a [`SectionList`].
pub trait Record: Clone {
    /// Server-assigned id, absent until the record is persisted.
    fn id(&self) -> Option<i64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: RecordKey,
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Never fetched (or invalidated).
    Idle,
    Loaded,
    Failed(String),
}

/// How many entries of a section are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Preview(usize),
    All,
}

impl Visibility {
    pub fn from_toggle(limit: usize, expanded: bool) -> Self {
        if expanded {
            Visibility::All
        } else {
            Visibility::Preview(limit)
        }
    }
}

/// Locally held copy of one remote collection.
///
/// Replaced wholesale on fetch, patched on create/update/delete.
#[derive(Debug, Clone)]
pub struct SectionList<T> {
    entries: Vec<Keyed<T>>,
    state: LoadState,
}

impl<T> Default for SectionList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            state: LoadState::Idle,
        }
    }
}

impl<T: Record> SectionList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let mut list = Self::new();
        list.replace_all(items);
        list
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.entries = items
            .into_iter()
            .map(|item| Keyed {
                key: RecordKey::for_id(item.id()),
                item,
            })
            .collect();
        self.state = LoadState::Loaded;
    }

    /// A failed fetch leaves the section empty.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.entries.clear();
        self.state = LoadState::Failed(reason.into());
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.state = LoadState::Idle;
    }

    /// Never fetched, invalidated, or the last fetch failed.
    pub fn needs_fetch(&self) -> bool {
        self.state != LoadState::Loaded
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Merges a saved record back into the list and returns its key.
    ///
    /// A record whose id is already listed replaces that entry in place. Any
    /// other record is prepended, under a temporary key when it has no id.
    pub fn upsert(&mut self, item: T) -> RecordKey {
        let key = RecordKey::for_id(item.id());

        if let Some(existing) = self.entries.iter_mut().find(|e| e.key == key) {
            existing.item = item;
            return key;
        }

        self.entries.insert(0, Keyed { key, item });
        key
    }

    /// Removes the entry with the given server id. Returns whether one was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != RecordKey::Persisted(id));
        self.entries.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.key == RecordKey::Persisted(id))
            .map(|e| &e.item)
    }

    pub fn entries(&self) -> &[Keyed<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible(&self, visibility: Visibility) -> &[Keyed<T>] {
        match visibility {
            Visibility::All => &self.entries,
            Visibility::Preview(limit) => &self.entries[..limit.min(self.entries.len())],
        }
    }

    /// The show-all toggle only makes sense when something is hidden by the preview.
    pub fn has_more_than(&self, limit: usize) -> bool {
        self.entries.len() > limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<i64>,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> Option<i64> {
            self.id
        }
    }

    fn item(id: i64, name: &'static str) -> Item {
        Item { id: Some(id), name }
    }

    fn names(list: &SectionList<Item>) -> Vec<&'static str> {
        list.entries().iter().map(|e| e.item.name).collect()
    }

    #[test]
    fn test_new_list_needs_fetch() {
        let list: SectionList<Item> = SectionList::new();
        assert!(list.needs_fetch());
        assert!(list.is_empty());
    }

    #[test]
    fn test_replace_all_keeps_every_item() {
        let mut list = SectionList::new();
        list.replace_all(vec![item(1, "a"), item(2, "b"), item(3, "c")]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.state(), &LoadState::Loaded);
        assert!(!list.needs_fetch());
    }

    #[test]
    fn test_fail_leaves_list_empty_with_reason() {
        let mut list = SectionList::from_items(vec![item(1, "a")]);
        list.fail("Failed to fetch projects");

        assert!(list.is_empty());
        assert_eq!(list.error(), Some("Failed to fetch projects"));
        assert!(list.needs_fetch());
    }

    #[test]
    fn test_remove_only_removes_matching_id() {
        let mut list = SectionList::from_items(vec![item(1, "a"), item(2, "b"), item(3, "c")]);

        assert!(list.remove(2));
        assert_eq!(names(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = SectionList::from_items(vec![item(1, "a")]);

        assert!(!list.remove(99));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_upsert_existing_id_replaces_in_place() {
        let mut list = SectionList::from_items(vec![
            item(4, "four"),
            item(5, "five"),
            item(6, "six"),
        ]);

        let key = list.upsert(item(5, "five-edited"));

        assert_eq!(key, RecordKey::Persisted(5));
        assert_eq!(list.len(), 3);
        assert_eq!(names(&list), vec!["four", "five-edited", "six"]);
    }

    #[test]
    fn test_upsert_new_id_is_prepended() {
        let mut list = SectionList::from_items(vec![item(1, "a")]);

        list.upsert(item(2, "b"));

        assert_eq!(names(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_upsert_without_id_gets_unique_temporary_key_first() {
        let mut list = SectionList::from_items(vec![item(1, "a")]);

        let first = list.upsert(Item { id: None, name: "x" });
        let second = list.upsert(Item { id: None, name: "y" });

        assert!(first.is_temporary());
        assert!(second.is_temporary());
        assert_ne!(first, second);
        assert_eq!(names(&list), vec!["y", "x", "a"]);
        assert_eq!(list.entries()[0].key, second);
    }

    #[test]
    fn test_visible_preview_and_all() {
        let items: Vec<Item> = (1..=5).map(|i| item(i, "n")).collect();
        let list = SectionList::from_items(items);

        assert_eq!(list.visible(Visibility::Preview(3)).len(), 3);
        assert_eq!(list.visible(Visibility::Preview(6)).len(), 5);
        assert_eq!(list.visible(Visibility::All).len(), 5);
        assert!(list.has_more_than(3));
        assert!(!list.has_more_than(6));
    }

    #[test]
    fn test_visibility_from_toggle() {
        assert_eq!(Visibility::from_toggle(3, false), Visibility::Preview(3));
        assert_eq!(Visibility::from_toggle(3, true), Visibility::All);
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut list = SectionList::from_items(vec![item(1, "a")]);
        list.invalidate();

        assert!(list.needs_fetch());
        assert!(list.is_empty());
    }
}
