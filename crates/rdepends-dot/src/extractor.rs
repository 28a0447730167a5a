//! Turning scanner events into dependency edges.
//!
//! The [`Extractor`] keeps two operand slots. A completed left identifier is
//! written to the first slot, a completed right identifier to the second, and
//! a commit interns both names and records the edge. Slots are overwritten by
//! the next statement, so a statement abandoned halfway leaves nothing behind
//! that the next complete one does not replace.

use std::borrow::Cow;

use tracing::debug;

use crate::registry::{RecipeId, RecipeRegistry};
use crate::scanner::{ScanEvents, scan};

/// A dependency of `left` on `right`, as written in `"left" -> "right"`.
///
/// Edges never connect a recipe to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The dependent recipe.
    pub left: RecipeId,
    /// The recipe depended upon.
    pub right: RecipeId,
}

/// Knobs for [`Dependencies::from_dot_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Cut every name at its first `.` before interning.
    ///
    /// BitBake's `task-depends.dot` names tasks `recipe.do_task`. With this
    /// set, the extracted graph is recipe-level and edges between two tasks
    /// of the same recipe disappear as self-references.
    pub strip_task_suffix: bool,
}

/// [`ScanEvents`] implementation that builds a [`Dependencies`].
pub struct Extractor<'a> {
    input: &'a str,
    options: ExtractOptions,
    start: usize,
    current: &'a str,
    operands: [&'a str; 2],
    registry: RecipeRegistry,
    edges: Vec<Edge>,
    self_references: usize,
}

impl<'a> Extractor<'a> {
    /// Creates an extractor for events produced by scanning `input`.
    #[must_use]
    pub fn new(input: &'a str, options: ExtractOptions) -> Self {
        Self {
            input,
            options,
            start: 0,
            current: "",
            operands: ["", ""],
            registry: RecipeRegistry::new(),
            edges: Vec::new(),
            self_references: 0,
        }
    }

    /// Number of `"a" -> "a"` statements dropped so far.
    #[must_use]
    pub fn self_references(&self) -> usize {
        self.self_references
    }

    /// Hands over everything extracted.
    #[must_use]
    pub fn finish(self) -> Dependencies {
        Dependencies {
            registry: self.registry,
            edges: self.edges,
        }
    }

    fn recipe_name(&self, raw: &'a str) -> Cow<'a, str> {
        let raw = if self.options.strip_task_suffix {
            raw.split_once('.').map_or(raw, |(recipe, _task)| recipe)
        } else {
            raw
        };
        if raw.contains("\"\"") {
            Cow::Owned(raw.replace("\"\"", "\""))
        } else {
            Cow::Borrowed(raw)
        }
    }
}

impl ScanEvents for Extractor<'_> {
    fn identifier_start(&mut self, offset: usize) {
        self.start = offset;
    }

    fn identifier_end(&mut self, offset: usize) {
        self.current = self.input.get(self.start..offset).unwrap_or_default();
    }

    fn push_left(&mut self) {
        self.operands[0] = self.current;
    }

    fn push_right(&mut self) {
        self.operands[1] = self.current;
    }

    fn commit(&mut self) {
        let left = self.recipe_name(self.operands[0]);
        let right = self.recipe_name(self.operands[1]);
        if left.is_empty() || right.is_empty() {
            return;
        }

        let left = self.registry.intern(&left);
        let right = self.registry.intern(&right);
        if left == right {
            self.self_references += 1;
            return;
        }
        self.edges.push(Edge { left, right });
    }
}

/// Recipes and edges extracted from one dependency dump.
///
/// Built once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    registry: RecipeRegistry,
    edges: Vec<Edge>,
}

impl Dependencies {
    /// Extracts dependencies from a dot document with default options.
    #[must_use]
    pub fn from_dot(input: &str) -> Self {
        Self::from_dot_with(input, ExtractOptions::default())
    }

    /// Extracts dependencies from a dot document.
    #[must_use]
    pub fn from_dot_with(input: &str, options: ExtractOptions) -> Self {
        let mut extractor = Extractor::new(input, options);
        let summary = scan(input, &mut extractor);
        let self_references = extractor.self_references();
        let dependencies = extractor.finish();

        debug!(
            lines = summary.lines,
            skipped = summary.skipped,
            recipes = dependencies.distinct_recipe_count(),
            edges = dependencies.edges.len(),
            self_references,
            "extracted dependencies"
        );
        dependencies
    }

    /// The recipe name table.
    #[must_use]
    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    /// Edges in extraction order. Duplicates are kept.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct recipes.
    #[must_use]
    pub fn distinct_recipe_count(&self) -> usize {
        self.registry.count()
    }

    /// Id of a recipe, if it appeared in any edge statement.
    #[must_use]
    pub fn get_recipe_id(&self, name: &str) -> Option<RecipeId> {
        self.registry.lookup(name)
    }

    /// Name of a recipe, or `None` for an unknown id.
    #[must_use]
    pub fn get_recipe_name(&self, id: RecipeId) -> Option<&str> {
        self.registry.get(id)
    }

    /// Splits into the registry and the edge list.
    #[must_use]
    pub fn into_parts(self) -> (RecipeRegistry, Vec<Edge>) {
        (self.registry, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(deps: &Dependencies) -> Vec<(&str, &str)> {
        deps.edges()
            .iter()
            .map(|edge| {
                (
                    deps.registry().name_of(edge.left),
                    deps.registry().name_of(edge.right),
                )
            })
            .collect()
    }

    #[test]
    fn single_edge() {
        let deps = Dependencies::from_dot("\n\"left\" -> \"right\"\n");

        assert_eq!(deps.distinct_recipe_count(), 2);
        assert_eq!(deps.get_recipe_name(RecipeId::new(0)), Some("left"));
        assert_eq!(deps.get_recipe_name(RecipeId::new(1)), Some("right"));
        assert_eq!(
            deps.edges(),
            &[Edge {
                left: RecipeId::new(0),
                right: RecipeId::new(1),
            }]
        );
    }

    #[test]
    fn empty_input() {
        let deps = Dependencies::from_dot("");

        assert_eq!(deps.distinct_recipe_count(), 0);
        assert!(deps.edges().is_empty());
        assert_eq!(deps.get_recipe_name(RecipeId::new(0)), None);
        assert_eq!(deps.get_recipe_name(RecipeId::new(1)), None);
        assert_eq!(deps.get_recipe_id("nope"), None);
        assert_eq!(deps.get_recipe_id(""), None);
    }

    #[test]
    fn self_reference_is_interned_but_not_stored() {
        let input = "\"a\" -> \"a\"\n";
        let mut extractor = Extractor::new(input, ExtractOptions::default());
        scan(input, &mut extractor);
        assert_eq!(extractor.self_references(), 1);

        let deps = extractor.finish();
        assert!(deps.edges().is_empty());
        assert_eq!(deps.get_recipe_id("a"), Some(RecipeId::new(0)));
    }

    #[test]
    fn registry_order_is_first_appearance() {
        let deps = Dependencies::from_dot("\"b\" -> \"c\"\n\"a\" -> \"b\"\n\"c\" -> \"d\"\n");
        let order: Vec<_> = deps.registry().names().collect();
        assert_eq!(order, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let deps = Dependencies::from_dot("\"a\" -> \"b\"\n\"a\" -> \"b\"\n");
        assert_eq!(deps.edges().len(), 2);
        assert_eq!(deps.distinct_recipe_count(), 2);
    }

    #[test]
    fn stale_left_operand_is_superseded() {
        // "x" never reaches an arrow; the next statement replaces it.
        let deps = Dependencies::from_dot("\"x\" garbage\n\"a\" -> \"b\"\n");
        assert_eq!(names(&deps), vec![("a", "b")]);
        assert_eq!(deps.get_recipe_id("x"), None);
    }

    #[test]
    fn lone_hyphen_is_not_a_recipe() {
        let deps = Dependencies::from_dot("\"a\" -> -\n\"b\" -> -c\n");
        assert_eq!(names(&deps), vec![("b", "-c")]);
        assert_eq!(deps.get_recipe_id("-"), None);
        assert_eq!(deps.get_recipe_id("a"), None);
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        let deps = Dependencies::from_dot(r#""say""hi" -> "b""#);
        assert_eq!(names(&deps), vec![("say\"hi", "b")]);
    }

    #[test]
    fn strip_task_suffix_collapses_tasks_to_recipes() {
        let input = r#"
digraph depends {
  "busybox.do_compile" -> "busybox.do_configure"
  "busybox.do_configure" -> "zlib.do_populate_sysroot"
  "busybox.do_fetch" [label="busybox do_fetch\n:1.36.1-r0"]
}
"#;
        let options = ExtractOptions {
            strip_task_suffix: true,
        };
        let deps = Dependencies::from_dot_with(input, options);

        assert_eq!(names(&deps), vec![("busybox", "zlib")]);
        assert_eq!(deps.distinct_recipe_count(), 2);
    }

    #[test]
    fn task_names_are_kept_by_default() {
        let deps = Dependencies::from_dot(r#""busybox.do_compile" -> "zlib.do_populate_sysroot""#);
        assert_eq!(
            names(&deps),
            vec![("busybox.do_compile", "zlib.do_populate_sysroot")]
        );
    }

    #[test]
    fn into_parts_hands_over_everything() {
        let deps = Dependencies::from_dot("\"a\" -> \"b\"");
        let (registry, edges) = deps.into_parts();
        assert_eq!(registry.count(), 2);
        assert_eq!(edges.len(), 1);
    }

    proptest! {
        #[test]
        fn no_edge_is_a_self_reference(
            pairs in prop::collection::vec(("[a-d]", "[a-d]"), 0..32)
        ) {
            let input: String = pairs
                .iter()
                .map(|(left, right)| format!("\"{left}\" -> \"{right}\"\n"))
                .collect();
            let deps = Dependencies::from_dot(&input);

            prop_assert!(deps.edges().iter().all(|edge| edge.left != edge.right));
            for (left, right) in &pairs {
                prop_assert!(deps.get_recipe_id(left).is_some());
                prop_assert!(deps.get_recipe_id(right).is_some());
            }
            let expected = pairs.iter().filter(|(left, right)| left != right).count();
            prop_assert_eq!(deps.edges().len(), expected);
        }
    }
}
