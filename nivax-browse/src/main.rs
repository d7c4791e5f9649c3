//! Nivax catalog browser
//!
//! Prints the built-in furniture catalog.
//!
//! Usage:
//!   nivax-browse                      # all groups with their top items
//!   nivax-browse --group Group-1      # one group
//!   nivax-browse --item Big-Group-1-Item1 --json

use anyhow::{Context, Result};
use clap::Parser;
use nivax_browse::{View, render_json, render_text};
use nivax_catalog::{ALL_GROUPS, CatalogStore};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "nivax-browse")]
#[command(about = "Browse the Nivax furniture catalog")]
struct Args {
    /// Show a single group by id
    #[arg(short, long, conflicts_with = "item")]
    group: Option<String>,

    /// Show a single item by id
    #[arg(short, long)]
    item: Option<String>,

    /// Collection to list when no group or item is given
    #[arg(long, default_value = ALL_GROUPS)]
    collection: String,

    /// Print JSON records instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn view(&self) -> View {
        match (&self.group, &self.item) {
            (Some(id), _) => View::Group { id: id.clone() },
            (None, Some(id)) => View::Item { id: id.clone() },
            (None, None) => View::Groups {
                collection: self.collection.clone(),
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let store = CatalogStore::sample().context("loading sample catalog")?;
    let view = args.view();
    debug!(?view, json = args.json, "rendering");

    let output = if args.json {
        render_json(&store, &view)?
    } else {
        render_text(&store, &view)?
    };
    print!("{output}");
    if args.json {
        println!();
    }
    Ok(())
}
