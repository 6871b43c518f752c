use rand::Rng;
use serde::Serialize;
use std::sync::Arc;


/// Hands out the items of a fixed catalog in random order, each at most once until `reset`.
///
/// The pool of not-yet-returned indices is kept explicitly and one entry is removed per
/// selection, so every call costs the same no matter how close the catalog is to exhaustion.
#[derive(Clone, Debug)]
pub struct NonRepeatingSelector<T> {
    catalog: Arc<[T]>,
    remaining: Vec<usize>,
    selected: Vec<usize>,
}

/// An item returned by [`NonRepeatingSelector::select`] together with its catalog position.
#[derive(Debug, PartialEq)]
pub struct Selected<'a, T> {
    pub index: usize,
    pub item: &'a T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionError {
    /// Every catalog item was already returned since the last reset. An empty catalog is
    /// reported the same way.
    Exhausted,
}

impl<T> NonRepeatingSelector<T> {
    pub fn new(catalog: Arc<[T]>) -> Self {
        let remaining = (0..catalog.len()).collect();
        Self {
            catalog,
            remaining,
            selected: Vec::new(),
        }
    }

    pub fn select(&mut self) -> Result<Selected<'_, T>, SelectionError> {
        let mut rng = rand::thread_rng();
        self.select_with(&mut rng)
    }

    pub fn select_with<R>(&mut self, rng: &mut R) -> Result<Selected<'_, T>, SelectionError>
    where
        R: Rng,
    {
        if self.remaining.is_empty() {
            return Err(SelectionError::Exhausted);
        }
        let position = rng.gen_range(0..self.remaining.len());
        let index = self.remaining.swap_remove(position);
        self.selected.push(index);
        Ok(Selected {
            index,
            item: &self.catalog[index],
        })
    }

    pub fn reset(&mut self) {
        self.remaining.clear();
        self.remaining.extend(0..self.catalog.len());
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Indices returned since the last reset, in the order they were handed out.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
