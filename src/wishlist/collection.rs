//! In-memory wish collection
//!
//! Owns the ordered sequence of wishes and the identity counter.
//! Every mutation returns the full sequence so callers always see
//! the complete state produced by their own call.

use super::errors::{WishError, WishResult};
use super::record::Wish;

/// Description of the wish every fresh process starts with
pub const SEED_DESCRIPTION: &str = "Two Front Teeth";

/// Ordered collection of wishes plus the next id to assign.
///
/// Ids are only ever assigned by [`WishList::add`], so they are unique
/// and never reused, even after the wish carrying them is removed.
#[derive(Debug, Clone, Default)]
pub struct WishList {
    next_id: u64,
    wishes: Vec<Wish>,
}

impl WishList {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding the seed wish with id 0
    pub fn seeded() -> Self {
        let mut list = Self::new();
        list.add(SEED_DESCRIPTION);
        list
    }

    /// Append a wish under the next id
    pub fn add(&mut self, description: impl Into<String>) -> &[Wish] {
        self.wishes.push(Wish {
            id: self.next_id,
            description: description.into(),
        });
        self.next_id += 1;
        &self.wishes
    }

    /// Remove every wish carrying `id`
    pub fn remove(&mut self, id: u64) -> WishResult<&[Wish]> {
        let before = self.wishes.len();
        self.wishes.retain(|wish| wish.id != id);

        if self.wishes.len() == before {
            return Err(WishError::NotFound(id));
        }
        Ok(&self.wishes)
    }

    /// Overwrite the description of every wish carrying `id`, in place
    pub fn update(&mut self, id: u64, description: impl Into<String>) -> WishResult<&[Wish]> {
        let description = description.into();
        let mut found = false;

        for wish in self.wishes.iter_mut().filter(|wish| wish.id == id) {
            wish.description.clone_from(&description);
            found = true;
        }

        if !found {
            return Err(WishError::NotFound(id));
        }
        Ok(&self.wishes)
    }

    /// Current wishes in order
    pub fn wishes(&self) -> &[Wish] {
        &self.wishes
    }

    /// Id the next added wish will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &WishList) -> Vec<u64> {
        list.wishes().iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = WishList::new();
        assert!(list.is_empty());
        assert_eq!(list.next_id(), 0);
    }

    #[test]
    fn test_seeded() {
        let list = WishList::seeded();
        assert_eq!(list.len(), 1);
        assert_eq!(list.wishes()[0].id, 0);
        assert_eq!(list.wishes()[0].description, SEED_DESCRIPTION);
        assert_eq!(list.next_id(), 1);
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut list = WishList::new();
        list.add("a");
        let wishes = list.add("");
        assert_eq!(wishes.len(), 2);
        assert_eq!(wishes[1].id, 1);
        assert_eq!(wishes[1].description, "");
    }

    #[test]
    fn test_remove_existing() {
        let mut list = WishList::seeded();
        list.add("Bike");
        let wishes = list.remove(0).unwrap();
        assert_eq!(wishes.len(), 1);
        assert_eq!(wishes[0].id, 1);
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut list = WishList::seeded();
        assert_eq!(list.remove(5), Err(WishError::NotFound(5)));
        assert_eq!(ids(&list), vec![0]);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = WishList::seeded();
        list.add("Bike");
        list.remove(1).unwrap();
        let wishes = list.add("Kite");
        assert_eq!(wishes.last().unwrap().id, 2);
    }

    #[test]
    fn test_update_preserves_position() {
        let mut list = WishList::seeded();
        list.add("Bike");
        list.add("Kite");
        let wishes = list.update(1, "Red Bike").unwrap();
        assert_eq!(wishes[1].id, 1);
        assert_eq!(wishes[1].description, "Red Bike");
        assert_eq!(wishes[0].description, SEED_DESCRIPTION);
        assert_eq!(wishes[2].description, "Kite");
    }

    #[test]
    fn test_update_missing() {
        let mut list = WishList::seeded();
        assert_eq!(list.update(3, "x"), Err(WishError::NotFound(3)));
        assert_eq!(list.wishes()[0].description, SEED_DESCRIPTION);
    }
}
