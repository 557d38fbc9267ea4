//! Ordered collection with weak-identity uniqueness.

use std::cmp::Ordering;
use std::fmt;

use super::{ModelError, ModelResult};

/// Comparison function over two entities.
pub type Comparator<T> = fn(&T, &T) -> bool;

/// A list that never holds two elements with the same identity.
///
/// Two comparisons are supplied at construction and used for different jobs:
/// - `same_identity` decides duplicates and lookups (`contains`, `add`, `set`,
///   `replace_all`),
/// - `identical` is full equality and is used only for value-based `remove`.
///
/// Every mutating method validates before touching the backing vector, so a
/// failed call leaves the list as it was.
#[derive(Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
    kind: &'static str,
    same_identity: Comparator<T>,
    identical: Comparator<T>,
}

impl<T> UniqueList<T> {
    /// Create an empty list. `kind` names the entity in error messages.
    pub fn new(kind: &'static str, same_identity: Comparator<T>, identical: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            kind,
            same_identity,
            identical,
        }
    }

    /// Entity label used in errors.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// True if an element with the same identity as `candidate` is stored.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items
            .iter()
            .any(|item| (self.same_identity)(item, candidate))
    }

    /// Append `item`, rejecting identity duplicates.
    pub fn add(&mut self, item: T) -> ModelResult<()> {
        if self.contains(&item) {
            return Err(ModelError::DuplicateEntity(self.kind));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace the element sharing identity with `target` by `replacement`,
    /// keeping its position.
    ///
    /// `replacement` may keep the target's identity or take a new one, but may
    /// not collide with any other stored element.
    pub fn set(&mut self, target: &T, replacement: T) -> ModelResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| (self.same_identity)(item, target))
            .ok_or(ModelError::EntityNotFound(self.kind))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != position && (self.same_identity)(item, &replacement));
        if collides {
            return Err(ModelError::DuplicateEntity(self.kind));
        }

        self.items[position] = replacement;
        Ok(())
    }

    /// Remove the element fully equal to `target`.
    pub fn remove(&mut self, target: &T) -> ModelResult<T> {
        let position = self
            .items
            .iter()
            .position(|item| (self.identical)(item, target))
            .ok_or(ModelError::EntityNotFound(self.kind))?;
        Ok(self.items.remove(position))
    }

    /// Replace the whole contents, rejecting input with identity collisions.
    pub fn replace_all(&mut self, items: Vec<T>) -> ModelResult<()> {
        if self.has_collisions(&items) {
            return Err(ModelError::DuplicateEntity(self.kind));
        }
        self.items = items;
        Ok(())
    }

    /// Remove every element for which `keep` returns false.
    ///
    /// Returns the number of elements removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }

    /// Stable in-place sort.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.items.sort_by(compare);
    }

    /// Read-only view of the current contents.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn has_collisions(&self, items: &[T]) -> bool {
        items.iter().enumerate().any(|(i, a)| {
            items[i + 1..]
                .iter()
                .any(|b| (self.same_identity)(a, b))
        })
    }
}

impl<T> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| (self.identical)(a, b))
    }
}

impl<T: Eq> Eq for UniqueList<T> {}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueList")
            .field("kind", &self.kind)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
