//! Adjacency structure over extracted dependencies.
//!
//! Edges point from **dependent -> dependency**, the literal direction of
//! `"left" -> "right"`:
//!
//! - Forward adjacency of `left` contains `right` (what `left` needs).
//! - Reverse adjacency of `right` contains `left` (who needs `right`).
//!
//! The graph owns the [`RecipeRegistry`] it was built from, so names handed
//! out by queries live as long as the graph. Nothing is mutable after
//! construction; queries take `&self` and may run from several threads.

use std::collections::HashSet;

use rdepends_dot::{Dependencies, ExtractOptions, RecipeId, RecipeRegistry};
use tracing::debug;

use crate::error::{Error, Result};
use crate::query::Direction;

/// Directed recipe dependency graph with forward and reverse adjacency.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    registry: RecipeRegistry,
    /// Indexed by `RecipeId::index()`; one entry per recipe, edges or not.
    forward: Vec<Vec<RecipeId>>,
    reverse: Vec<Vec<RecipeId>>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Builds the graph, taking ownership of the extracted dependencies.
    ///
    /// Repeated edges collapse into one. Each adjacency list keeps the order
    /// in which its edges first appeared in the input.
    #[must_use]
    pub fn new(dependencies: Dependencies) -> Self {
        let (registry, edges) = dependencies.into_parts();
        let count = registry.count();
        let mut forward = vec![Vec::new(); count];
        let mut reverse = vec![Vec::new(); count];
        let mut seen = HashSet::with_capacity(edges.len());

        for edge in edges {
            if !seen.insert(edge) {
                continue;
            }
            forward[edge.left.index()].push(edge.right);
            reverse[edge.right.index()].push(edge.left);
        }

        debug!(
            recipes = count,
            edges = seen.len(),
            "built dependency graph"
        );

        Self {
            registry,
            forward,
            reverse,
            edge_count: seen.len(),
        }
    }

    /// Extracts and builds in one go.
    #[must_use]
    pub fn from_dot(input: &str) -> Self {
        Self::new(Dependencies::from_dot(input))
    }

    /// Extracts with `options` and builds in one go.
    #[must_use]
    pub fn from_dot_with(input: &str, options: ExtractOptions) -> Self {
        Self::new(Dependencies::from_dot_with(input, options))
    }

    /// Direct neighbours of `id` in `direction`.
    ///
    /// Empty for recipes without edges in that direction and for ids this
    /// graph never issued.
    #[must_use]
    pub fn adjacent(&self, id: RecipeId, direction: Direction) -> &[RecipeId] {
        let table = match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        };
        table.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Resolves a recipe name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecipeNotFound`] if no edge statement mentioned it.
    pub fn resolve(&self, recipe: &str) -> Result<RecipeId> {
        self.registry
            .lookup(recipe)
            .ok_or_else(|| Error::RecipeNotFound(recipe.to_string()))
    }

    /// Name of a recipe.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[must_use]
    pub fn name(&self, id: RecipeId) -> &str {
        self.registry.name_of(id)
    }

    /// The recipe name table.
    #[must_use]
    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    /// Number of recipes, isolated ones included.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.registry.count()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
