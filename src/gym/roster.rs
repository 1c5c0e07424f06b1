//! Ordered in-memory collections keyed by record id

/// Anything stored in a [`Roster`]
pub trait Record {
    fn id(&self) -> &str;
}

/// Insertion-ordered list of records with id lookup
#[derive(Debug, Clone)]
pub struct Roster<T> {
    items: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Roster<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Append a record, replacing any existing record with the same id
    pub fn insert(&mut self, item: T) {
        match self.position(item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Apply `f` to the record with `id`. Returns false if there is none.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_insert_keeps_order_and_replaces_duplicates() {
        let mut roster = Roster::new(vec![item("a", 1), item("b", 2)]);
        roster.insert(item("c", 3));
        roster.insert(item("a", 10));

        let ids: Vec<_> = roster.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(roster.get("a").map(|i| i.value), Some(10));
    }

    #[test]
    fn test_update_and_remove() {
        let mut roster = Roster::new(vec![item("a", 1)]);
        assert!(roster.update("a", |i| i.value = 5));
        assert!(!roster.update("missing", |i| i.value = 5));
        assert_eq!(roster.get("a").map(|i| i.value), Some(5));

        assert_eq!(roster.remove("a"), Some(item("a", 5)));
        assert_eq!(roster.remove("a"), None);
        assert!(roster.is_empty());
    }
}
