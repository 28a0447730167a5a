//! Run configuration derived from command-line arguments.
//!
//! [`Config::from_cli`] is the only place flags are interpreted; everything
//! downstream works with these types.

use std::path::{Path, PathBuf};

use rdepends_dot::{ExtractOptions, STDIN_PATH};

use crate::cli::Cli;
use crate::query::Direction;

/// Where the dependency dump comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file or named pipe.
    Path(PathBuf),
}

impl InputSource {
    /// The path to hand to [`rdepends_dot::read_input`].
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stdin => Path::new(STDIN_PATH),
            Self::Path(path) => path,
        }
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path == Path::new(STDIN_PATH) {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }
}

/// What to ask the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every recipe name.
    List,
    /// Direct neighbours of one recipe.
    Adjacent {
        /// Recipe to start from.
        recipe: String,
        /// Dependencies or dependents.
        direction: Direction,
    },
    /// Everything reachable from one recipe.
    Transitive {
        /// Recipe to start from.
        recipe: String,
        /// Dependencies or dependents.
        direction: Direction,
    },
}

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One name per line.
    #[default]
    Lines,
    /// A JSON array of names.
    Json,
}

/// Everything [`run`](crate::run) needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input to read.
    pub input: InputSource,
    /// Query to execute.
    pub query: Query,
    /// Output encoding.
    pub format: OutputFormat,
    /// Extraction knobs.
    pub extract: ExtractOptions,
}

impl Config {
    /// Interprets parsed command-line arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let direction = if cli.rdepends {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        let query = match &cli.recipe {
            None => Query::List,
            Some(recipe) if cli.transitive => Query::Transitive {
                recipe: recipe.clone(),
                direction,
            },
            Some(recipe) => Query::Adjacent {
                recipe: recipe.clone(),
                direction,
            },
        };

        Self {
            input: InputSource::from(cli.file.clone()),
            query,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Lines
            },
            extract: ExtractOptions {
                strip_task_suffix: cli.strip_tasks,
            },
        }
    }
}
