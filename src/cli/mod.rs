use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Query ordered dictionaries and course registries.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more detail to stderr (-v for debug, -vv for trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Load a tab separated dictionary and print its keys in order.
    Dict(OptsDict),
    /// Load a registry catalog, replay its events and query it.
    Registry(OptsRegistry),
}

#[derive(Debug, Args)]
pub struct OptsDict {
    /// `key<TAB>value` file, or `-` for stdin.
    pub file: clio::Input,
    /// Keys to delete before printing.
    #[arg(short, long)]
    pub remove: Vec<String>,
    /// Print the value next to each key.
    #[arg(long, default_value_t = false)]
    pub values: bool,
    /// Print statistics about the trie instead of its keys.
    #[arg(short, long, value_enum)]
    pub stats: Option<StatFormat>,
}

#[derive(Debug, Args)]
pub struct OptsRegistry {
    /// JSON catalog file, or `-` for stdin.
    pub catalog: clio::Input,

    #[command(subcommand)]
    pub query: Query,
}

#[derive(Debug, Subcommand)]
pub enum Query {
    /// List every career.
    Careers,
    /// List the open courses of a career.
    Courses {
        career: String,
        /// Include enrolment and capacity of each course.
        #[arg(short, long, default_value_t = false)]
        detail: bool,
    },
    /// Show the number of courses a student is enrolled in.
    Student { id: String },
    /// Display statistics about the registry tries.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}
