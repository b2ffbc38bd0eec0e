//! Single-focus collections and bounds-checked focus movement.
//!
//! Every level of the nested focus hierarchy (list, task, expansion) moves
//! its focus through [`step`], which reports [`Boundary`] instead of
//! clamping so the caller can fall back to the enclosing level.

use std::ops::{Index, IndexMut};

/// A focus move would leave the bounds of its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary;

/// Step `current` by `delta` within `0..len`
pub fn step(current: usize, delta: isize, len: usize) -> Result<usize, Boundary> {
    match current.checked_add_signed(delta) {
        Some(target) if target < len => Ok(target),
        _ => Err(Boundary),
    }
}

/// An ordered collection with at most one focused item.
///
/// The focus is `Some` whenever the collection is non-empty.
#[derive(Debug, Clone)]
pub struct FocusList<T> {
    items: Vec<T>,
    focus: Option<usize>,
}

impl<T> Default for FocusList<T> {
    fn default() -> Self {
        FocusList {
            items: Vec::new(),
            focus: None,
        }
    }
}

impl<T> FocusList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from items, focusing the first one
    pub fn from_vec(items: Vec<T>) -> Self {
        let focus = if items.is_empty() { None } else { Some(0) };
        FocusList { items, focus }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    pub fn focus_position(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused(&self) -> Option<&T> {
        self.focus.and_then(|i| self.items.get(i))
    }

    pub fn focused_mut(&mut self) -> Option<&mut T> {
        self.focus.and_then(|i| self.items.get_mut(i))
    }

    /// Focus `index`, failing if it is out of range
    pub fn set_focus(&mut self, index: usize) -> Result<(), Boundary> {
        if index < self.items.len() {
            self.focus = Some(index);
            Ok(())
        } else {
            Err(Boundary)
        }
    }

    /// Move the focus by `delta`; the focus is unchanged on `Boundary`
    pub fn move_focus(&mut self, delta: isize) -> Result<usize, Boundary> {
        let current = self.focus.ok_or(Boundary)?;
        let target = step(current, delta, self.items.len())?;
        self.focus = Some(target);
        Ok(target)
    }

    pub fn focus_first(&mut self) {
        self.focus = if self.items.is_empty() { None } else { Some(0) };
    }

    pub fn focus_last(&mut self) {
        self.focus = self.items.len().checked_sub(1);
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if self.focus.is_none() {
            self.focus = Some(self.items.len() - 1);
        }
    }

    /// Insert at `index` (clamped to the end). The focused item stays focused.
    pub fn insert(&mut self, index: usize, item: T) -> usize {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.focus = match self.focus {
            None => Some(index),
            Some(f) if f >= index => Some(f + 1),
            keep => keep,
        };
        index
    }

    /// Remove the item at `index`. Removing the focused item focuses its
    /// successor, or its predecessor when it was last.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.focus = match self.focus {
            _ if self.items.is_empty() => None,
            Some(f) if f > index => Some(f - 1),
            Some(f) => Some(f.min(self.items.len() - 1)),
            None => None,
        };
        Some(item)
    }
}

impl<T> Index<usize> for FocusList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for FocusList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a FocusList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
