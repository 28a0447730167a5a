//! Command-line arguments.
//!
//! Without `--recipe` every recipe in the dump is listed. With it, the
//! recipe's dependencies are listed, or its dependents with `--rdepends`,
//! and `--transitive` follows edges all the way instead of one step.
//!
//! # Example
//!
//! ```bash
//! bitbake -g core-image-minimal
//! rdepends task-depends.dot -r busybox -t
//! rdepends task-depends.dot -r zlib -R --json
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Query recipe dependencies from a BitBake `task-depends.dot` dump.
#[derive(Parser, Debug)]
#[command(name = "rdepends")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dependency dump written by `bitbake -g` (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Recipe to query; lists every recipe when omitted
    #[arg(short, long, value_name = "NAME")]
    pub recipe: Option<String>,

    /// List recipes that depend on the recipe instead of its dependencies
    #[arg(short = 'R', long, requires = "recipe")]
    pub rdepends: bool,

    /// Follow dependencies transitively
    #[arg(short, long, requires = "recipe")]
    pub transitive: bool,

    /// Treat `recipe.do_task` names as `recipe`
    #[arg(long)]
    pub strip_tasks: bool,

    /// Output a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
