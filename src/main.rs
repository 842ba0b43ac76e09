//! Command-line front end: builds the suffix tree of one string and prints it.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use ukkonen::model::{DEFAULT_LIST_CAPACITY, DEFAULT_TERMINATOR};
use ukkonen::{SuffixTreeBuilder, render};

/// Build and print the suffix tree of a string
#[derive(Parser)]
#[command(name = "ukkonen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// String to index
    text: String,

    /// Character displayed for the end-of-text terminator
    #[arg(long, default_value_t = DEFAULT_TERMINATOR)]
    terminator: char,

    /// Children kept in a list before a node switches to a hash table
    #[arg(long, default_value_t = DEFAULT_LIST_CAPACITY)]
    list_capacity: usize,

    /// Print the start indices of PATTERN instead of the tree
    #[arg(long, value_name = "PATTERN")]
    find: Option<String>,

    /// Annotate internal nodes with their suffix links
    #[arg(long)]
    links: bool,

    /// Validate the tree structure before printing
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let tree = SuffixTreeBuilder::new()
        .with_terminator(cli.terminator)
        .with_list_capacity(cli.list_capacity)
        .build(&cli.text);
    debug!(
        nodes = tree.num_nodes(),
        leaves = tree.num_leaves(),
        internal = tree.num_internal(),
        "built suffix tree"
    );

    if cli.check
        && let Err(violation) = tree.validate()
    {
        error!("invalid suffix tree: {violation}");
        return ExitCode::from(2);
    }

    if let Some(pattern) = &cli.find {
        let starts = tree.find_all(pattern);
        let line: Vec<String> = starts.iter().map(usize::to_string).collect();
        println!("{}", line.join(" "));
        return ExitCode::SUCCESS;
    }

    match render::write_text(io::stdout().lock(), &tree, cli.links) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to write tree: {e}");
            ExitCode::from(1)
        }
    }
}
