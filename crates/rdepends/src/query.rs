//! Read-only queries over a [`DependencyGraph`].
//!
//! Every query resolves a recipe name, walks the graph in a [`Direction`] and
//! returns names borrowed from the graph. Queries never modify the graph.

use std::collections::VecDeque;
use std::fmt;

use rdepends_dot::RecipeId;
use tracing::debug;

use crate::error::Result;
use crate::graph::DependencyGraph;

/// Which way to follow edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From a recipe to what it depends on.
    #[default]
    Forward,
    /// From a recipe to what depends on it.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

impl DependencyGraph {
    /// Every distinct recipe name, in order of first appearance.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.registry().names()
    }

    /// Direct dependencies (or dependents, for [`Direction::Reverse`]) of
    /// `recipe`, in the order their edges first appeared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecipeNotFound`](crate::Error::RecipeNotFound) if
    /// `recipe` is not in the graph.
    pub fn list_adjacent(&self, recipe: &str, direction: Direction) -> Result<Vec<&str>> {
        let id = self.resolve(recipe)?;
        let names: Vec<_> = self
            .adjacent(id, direction)
            .iter()
            .map(|&neighbour| self.name(neighbour))
            .collect();
        debug!(recipe, %direction, count = names.len(), "listed adjacent recipes");
        Ok(names)
    }

    /// Everything reachable from `recipe` in `direction`, `recipe` itself
    /// excluded.
    ///
    /// The result is breadth-first discovery order, reversed: the most
    /// distant recipes come first and direct neighbours come last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecipeNotFound`](crate::Error::RecipeNotFound) if
    /// `recipe` is not in the graph.
    pub fn list_transitive(&self, recipe: &str, direction: Direction) -> Result<Vec<&str>> {
        let start = self.resolve(recipe)?;
        let names: Vec<_> = self
            .bfs_discovery(start, direction)
            .into_iter()
            .skip(1)
            .rev()
            .map(|id| self.name(id))
            .collect();
        debug!(recipe, %direction, count = names.len(), "listed transitive recipes");
        Ok(names)
    }

    /// Breadth-first discovery order from `start`, `start` first.
    ///
    /// A recipe is discovered when first seen as a neighbour, so every recipe
    /// appears once even when the graph has cycles.
    #[must_use]
    pub fn bfs_discovery(&self, start: RecipeId, direction: Direction) -> Vec<RecipeId> {
        if start.index() >= self.recipe_count() {
            return Vec::new();
        }

        let mut visited = vec![false; self.recipe_count()];
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        while let Some(current) = queue.pop_front() {
            for &neighbour in self.adjacent(current, direction) {
                if !visited[neighbour.index()] {
                    visited[neighbour.index()] = true;
                    order.push(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }

        order
    }
}
