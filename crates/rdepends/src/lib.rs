//! # rdepends: recipe dependency queries for BitBake dumps
//!
//! `bitbake -g <target>` writes the whole task graph of a build to
//! `task-depends.dot`. This crate builds a dependency graph from that file
//! with [`rdepends_dot`] and answers four questions about a recipe:
//!
//! - what it depends on directly,
//! - what depends on it directly,
//! - what it depends on transitively, and
//! - what depends on it transitively.
//!
//! ## Quick Start
//!
//! ```
//! use rdepends::{DependencyGraph, Direction};
//!
//! let graph = DependencyGraph::from_dot(r#"
//! digraph depends {
//!   "image" -> "htmlext"
//!   "htmlext" -> "libhext"
//!   "libhext" -> "boost"
//! }
//! "#);
//!
//! assert_eq!(graph.list_adjacent("htmlext", Direction::Forward)?, ["libhext"]);
//! assert_eq!(graph.list_adjacent("htmlext", Direction::Reverse)?, ["image"]);
//! assert_eq!(
//!     graph.list_transitive("htmlext", Direction::Forward)?,
//!     ["boost", "libhext"]
//! );
//! # Ok::<(), rdepends::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod output;
pub mod query;

pub use config::{Config, InputSource, OutputFormat, Query};
pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use query::Direction;

use std::io::Write;

use rdepends_dot::read_input;
use tracing::debug;

/// Reads the dump, builds the graph, runs the query and writes the answer.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the queried recipe is not
/// in the dump, or writing to `out` fails.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<()> {
    let input = read_input(config.input.path())?;
    let graph = DependencyGraph::from_dot_with(&input, config.extract);
    debug!(
        recipes = graph.recipe_count(),
        edges = graph.edge_count(),
        "loaded dependency graph"
    );

    let names: Vec<&str> = match &config.query {
        Query::List => graph.list().collect(),
        Query::Adjacent { recipe, direction } => graph.list_adjacent(recipe, *direction)?,
        Query::Transitive { recipe, direction } => graph.list_transitive(recipe, *direction)?,
    };

    output::write_names(out, &names, config.format)
}
