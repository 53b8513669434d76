#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::{fs, path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use mdtoc::{add_toc_with, Config};

const LONG_ABOUT: &str = "Add table of contents to markdown file

mdtoc will create a table of contents and insert below
the header named Contents. Any existing lines in the
Contents section will be removed. An error message
will be emitted if no Contents header is found in
the input file.

Example:

    $ mdtoc article.md

article.md before:

    # Contents
    # Header 1
    Some text between header 1 and 2

    ## Header 2
    Some text below header 2

article.md after:

    # Contents<a name=\"contents\"></a>

    * [Contents](#contents)
    * [Header 1](#header-1)
        * [Header 2](#header-2)

    # Header 1<a name=\"header-1\"></a>
    Some text between header 1 and 2

    ## Header 2<a name=\"header-2\"></a>
    Some text below header 2";

#[derive(Parser, Debug)]
#[command(name = "mdtoc", author, version, about, long_about = LONG_ABOUT)]
struct Cli {
    /// Markdown file to add table of contents to
    filename: PathBuf,

    /// Number of headers in the beginning of the file to not include in the toc
    #[arg(
        long,
        visible_alias = "skip_headers",
        env = "MDTOC_SKIP_HEADERS",
        default_value_t = 0
    )]
    skip_headers: usize,

    /// Title of the header the toc is inserted below
    #[arg(long, env = "MDTOC_TOC_HEADER", default_value = "Contents")]
    toc_header: String,

    /// Print the result instead of rewriting the file
    #[arg(long)]
    stdout: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_skip_headers(self.skip_headers)
            .with_toc_header(self.toc_header.as_str())
    }
}

fn main() {
    dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "mdtoc=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&cli.filename)
        .with_context(|| format!("Failed to read {}", cli.filename.display()))?;
    let lines = content.lines().collect::<Vec<_>>();
    debug!("Read {} lines from {}", lines.len(), cli.filename.display());

    let output = add_toc_with(&lines, &cli.config())?;
    let document = output.iter().map(|line| format!("{line}\n")).collect::<String>();

    if cli.stdout {
        print!("{document}");
        return Ok(());
    }

    fs::write(&cli.filename, document)
        .with_context(|| format!("Failed to write {}", cli.filename.display()))?;
    info!("Updated {}", cli.filename.display());

    Ok(())
}
