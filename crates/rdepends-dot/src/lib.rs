//! Recipe dependency extraction from Graphviz dumps.
//!
//! BitBake's `-g` option writes `task-depends.dot`, a `digraph` whose edge
//! statements look like `"htmlext" -> "libhext"`. This crate pulls exactly
//! those edges out of the file and ignores everything else: node statements,
//! attribute lists, comments and lines it cannot make sense of.
//!
//! The pipeline is:
//!
//! - [`scanner`]: a single-pass state machine over the input bytes that
//!   reports identifier boundaries and statement structure through the
//!   [`ScanEvents`] trait.
//! - [`extractor`]: a [`ScanEvents`] implementation that turns those events
//!   into [`Edge`]s, interning names in a [`RecipeRegistry`].
//! - [`reader`]: reads the input from a file, a named pipe or stdin.
//!
//! # Example
//!
//! ```
//! use rdepends_dot::Dependencies;
//!
//! let deps = Dependencies::from_dot(r#"
//! digraph depends {
//!   "image" -> "htmlext"
//!   "htmlext" -> "libhext" [style=dashed]
//! }
//! "#);
//!
//! assert_eq!(deps.distinct_recipe_count(), 3);
//! assert_eq!(deps.edges().len(), 2);
//! assert!(deps.get_recipe_id("libhext").is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extractor;
pub mod reader;
pub mod registry;
pub mod scanner;

pub use error::{Error, Result};
pub use extractor::{Dependencies, Edge, ExtractOptions, Extractor};
pub use reader::{STDIN_PATH, read_input};
pub use registry::{RecipeId, RecipeRegistry};
pub use scanner::{ScanEvents, scan};
