//! Interning of recipe names into dense ids.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Dense, zero-based identifier of a recipe.
///
/// Ids are handed out in order of first appearance and are valid for the
/// registry that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(usize);

impl RecipeId {
    /// Wrap a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index, suitable for indexing per-recipe tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bijection between recipe names and [`RecipeId`]s.
///
/// Each name is stored once and shared between the lookup map and the
/// id-ordered table. Ids are never reused or reassigned.
#[derive(Debug, Clone, Default)]
pub struct RecipeRegistry {
    ids: HashMap<Arc<str>, RecipeId>,
    names: Vec<Arc<str>>,
}

impl RecipeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, allocating the next one if unseen.
    pub fn intern(&mut self, name: &str) -> RecipeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = RecipeId(self.names.len());
        let name: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&name));
        self.ids.insert(name, id);
        id
    }

    /// Looks up `name` without interning it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<RecipeId> {
        self.ids.get(name).copied()
    }

    /// Name of a recipe, or `None` for an id this registry never issued.
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&str> {
        self.names.get(id.0).map(|name| &**name)
    }

    /// Name of a recipe.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry. Ids only come from
    /// [`intern`](Self::intern) and [`lookup`](Self::lookup), so this is a
    /// programming error.
    #[must_use]
    pub fn name_of(&self, id: RecipeId) -> &str {
        match self.get(id) {
            Some(name) => name,
            None => panic!(
                "recipe id {id} out of range (registry holds {} recipes)",
                self.count()
            ),
        }
    }

    /// Number of distinct names.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names, in id order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    /// All `(id, name)` pairs, in id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (RecipeId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (RecipeId(index), &**name))
    }
}
