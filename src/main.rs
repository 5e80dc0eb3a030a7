mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Cmd, OptsDict, OptsRegistry, Query, StatFormat};
use itertools::Itertools;
use lexitrie::{Registry, dataset, registry, trie};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read or write: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dataset(#[from] dataset::Error),
    #[error(transparent)]
    Trie(#[from] trie::Error),
    #[error(transparent)]
    Registry(#[from] registry::Error),
    #[error("Unable to format the stats: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = entry(cli) {
        {
            eprintln!("{}", err)
        }
        std::process::exit(1)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn entry(cli: Cli) -> Result<(), Error> {
    match cli.cmd {
        Cmd::Dict(opts) => run_dict(opts),
        Cmd::Registry(opts) => run_registry(opts),
    }
}

fn run_dict(mut opts: OptsDict) -> Result<(), Error> {
    let mut trie = dataset::dictionary(opts.file.lock())?;
    for key in &opts.remove {
        if trie.delete(key.as_str())?.is_some() {
            info!(%key, "Removed key");
        }
    }

    let mut f = std::io::stdout().lock();
    if let Some(format) = opts.stats {
        return write_stats(&mut f, format, &[("dictionary", trie.stats())]);
    }
    for (key, value) in &trie {
        if opts.values {
            writeln!(f, "{key}\t{value}")?;
        } else {
            writeln!(f, "{key}")?;
        }
    }
    Ok(())
}

fn run_registry(mut opts: OptsRegistry) -> Result<(), Error> {
    let registry = dataset::catalog(opts.catalog.lock())?.build()?;

    let mut f = std::io::stdout().lock();
    match opts.query {
        Query::Careers => {
            for career in registry.careers() {
                writeln!(f, "{career}")?;
            }
        }
        Query::Courses { career, detail } => {
            for course in registry.courses(&career)? {
                if detail {
                    let info = registry.course(&career, &course)?;
                    writeln!(
                        f,
                        "{course}\t{}/{}{}",
                        info.enrolled().len(),
                        info.capacity(),
                        if info.exceeds_capacity() { "\tover capacity" } else { "" }
                    )?;
                } else {
                    writeln!(f, "{course}")?;
                }
            }
        }
        Query::Student { id } => {
            writeln!(f, "{}", registry.enrollments(&id)?)?;
        }
        Query::Stats(stats) => {
            write_stats(&mut f, stats.format, &registry_stats(&registry))?;
        }
    }
    Ok(())
}

fn registry_stats(registry: &Registry) -> Vec<(String, trie::Stats)> {
    let careers = registry.career_trie();
    [
        ("students".to_owned(), registry.students().stats()),
        ("careers".to_owned(), careers.stats()),
    ]
    .into_iter()
    .chain(careers.iter().map(|(career, courses)| (career, courses.stats())))
    .collect()
}

fn write_stats<S: AsRef<str>>(
    f: &mut impl Write,
    format: StatFormat,
    stats: &[(S, trie::Stats)],
) -> Result<(), Error> {
    match format {
        StatFormat::Human => {
            let mut lines = stats.iter().map(|(name, stats)| {
                format!(
                    "{}: {} keys, {} nodes, {} leaves, depth {}",
                    name.as_ref(),
                    stats.keys,
                    stats.nodes,
                    stats.leaves,
                    stats.depth
                )
            });
            writeln!(f, "{}", lines.join("\n"))?;
        }
        StatFormat::Json => {
            let map: serde_json::Map<_, _> = stats
                .iter()
                .map(|(name, stats)| Ok((name.as_ref().to_owned(), serde_json::to_value(stats)?)))
                .collect::<Result<_, serde_json::Error>>()?;
            writeln!(f, "{}", serde_json::to_string_pretty(&map)?)?;
        }
    }
    Ok(())
}

