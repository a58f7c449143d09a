//! # Repository
//!
//! An ordered, in-memory collection of entities. The repository is owned by exactly one
//! `ResourceActor`, so it never needs interior locking: every read-modify-write happens inside
//! a single message turn of that actor.

use crate::entity::ActorEntity;

/// Insertion-ordered store for one entity type.
#[derive(Debug, Clone)]
pub struct Repository<T: ActorEntity> {
    items: Vec<T>,
}

impl<T: ActorEntity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Repository<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All entities, oldest first.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.find(|item| item.id() == id)
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Overwrites the stored entity sharing `item`'s id. Returns `false` if none matched.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|stored| stored.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Removes the first entity matching `predicate`.
    ///
    /// A missing match is a no-op and yields `None`.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(|item| predicate(item))?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameworkError;
    use crate::pipeline::{Payload, Pipeline, RequestContext};
    use serde::Serialize;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Note {
        fn new(id: &str, text: &str) -> Self {
            Self {
                id: id.to_string(),
                text: text.to_string(),
            }
        }
    }

    impl ActorEntity for Note {
        const KIND: &'static str = "Note";

        fn id(&self) -> &str {
            &self.id
        }
        fn create_pipeline() -> Pipeline<Self> {
            Pipeline::new()
        }
        fn update_pipeline() -> Pipeline<Self> {
            Pipeline::new()
        }
        fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
            Ok(Self {
                id,
                text: ctx.string_field("text")?,
            })
        }
        fn apply_update(&mut self, _data: &Payload) -> Result<(), FrameworkError> {
            Ok(())
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut repo = Repository::new();
        repo.insert(Note::new("b", "second"));
        repo.insert(Note::new("a", "first"));

        let ids: Vec<&str> = repo.list().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_replace_overwrites_in_place() {
        let mut repo = Repository::new();
        repo.insert(Note::new("a", "old"));
        repo.insert(Note::new("b", "other"));

        assert!(repo.replace(Note::new("a", "new")));
        assert_eq!(repo.list()[0].text, "new");
        assert_eq!(repo.len(), 2);

        assert!(!repo.replace(Note::new("zzz", "missing")));
    }

    #[test]
    fn test_remove_where_missing_is_noop() {
        let mut repo = Repository::new();
        repo.insert(Note::new("a", "keep"));

        assert!(repo.remove_where(|n| n.id == "nope").is_none());
        assert_eq!(repo.len(), 1);

        let removed = repo.remove_where(|n| n.id == "a").unwrap();
        assert_eq!(removed.text, "keep");
        assert!(repo.is_empty());
    }
}
