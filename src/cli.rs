// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::consts::{BASE_URL, DATABASE_FILE, REQUEST_TIMEOUT_SECS};
use crate::config::options::AppOptions;
use crate::core::net::HttpClient;
use crate::data::Direction;
use crate::progress::Progress;
use crate::store::Store;
use crate::{runner, search};

#[derive(Parser, Debug)]
#[command(name = "skarnik_scrape", version)]
#[command(about = "Build a searchable SQLite index of the skarnik.by dictionaries")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub common: Common,

    // used when no subcommand is given
    #[command(flatten)]
    pub build: BuildArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct Common {
    /// SQLite database to write or read
    #[arg(long = "db", env = "SKARNIK_DB", default_value = DATABASE_FILE, global = true)]
    pub database: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl the site and rebuild the database from scratch (default)
    Build(BuildArgs),
    /// Recompute first_char / word_mask columns in an existing database
    Reindex,
    /// Look words up in an existing database
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Site root
    #[arg(long, env = "SKARNIK_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Recreate the database before crawling instead of swapping in a staged copy
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    pub query: String,

    /// rus-bel, bel-rus or bel-def
    #[arg(short, long, default_value = "bel-rus")]
    pub direction: Direction,

    /// Variant-tolerant match on the word mask
    #[arg(long, conflicts_with = "prefix")]
    pub mask: bool,

    /// Autocomplete on the lowercase prefix
    #[arg(long)]
    pub prefix: bool,

    /// With --mask: search every direction
    #[arg(long, requires = "mask")]
    pub all_directions: bool,

    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.common.verbose);

    let mut opts = AppOptions::default();
    opts.build.database = cli.common.database.clone();

    match cli.command {
        None => build(opts, cli.build),
        Some(Command::Build(args)) => build(opts, args),
        Some(Command::Reindex) => {
            let touched = runner::run_reindex(&opts.build)
                .wrap_err_with(|| format!("reindex of {} failed", opts.build.database.display()))?;
            println!("Reindexed {touched} rows");
            Ok(())
        }
        Some(Command::Lookup(args)) => lookup(&opts, &args),
    }
}

fn build(mut opts: AppOptions, args: BuildArgs) -> Result<()> {
    opts.build.set_base_url(&args.base_url);
    opts.build.in_place = args.in_place;
    opts.net.timeout = Duration::from_secs(args.timeout);

    let client = HttpClient::new(&opts.net)?;
    let mut progress = BarProgress::default();
    let summary = runner::run_build(&opts.build, &client, &mut progress)
        .wrap_err_with(|| format!("build of {} failed", opts.build.database.display()))?;

    for (direction, words) in &summary.words {
        println!("{direction}: {words} words");
    }
    println!(
        "{} rows written ({} duplicates ignored) to {}",
        summary.rows.inserted,
        summary.rows.ignored,
        summary.database.display()
    );
    Ok(())
}

fn lookup(opts: &AppOptions, args: &LookupArgs) -> Result<()> {
    let path = &opts.build.database;
    if !path.exists() {
        color_eyre::eyre::bail!("{} not found; run `build` first", path.display());
    }
    let store = Store::open(path).wrap_err_with(|| format!("could not open {}", path.display()))?;
    let conn = store.connection();

    let hits = if args.mask {
        let scope = (!args.all_directions).then_some(args.direction);
        search::by_mask(conn, &args.query, scope, args.limit)?
    } else if args.prefix {
        search::by_prefix(conn, &args.query, args.direction, args.limit)?
    } else {
        search::exact(conn, &args.query, args.direction)?
    };

    for hit in hits {
        println!("{}\t{}\t{}", hit.entry_id, hit.direction.slug(), hit.word);
    }
    Ok(())
}

/// One progress bar per direction.
#[derive(Default)]
struct BarProgress {
    bar: Option<ProgressBar>,
}

impl Progress for BarProgress {
    fn begin(&mut self, direction: Direction, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{prefix:>24} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar.set_prefix(direction.to_string());
        self.bar = Some(bar);
    }

    fn log(&mut self, msg: &str) {
        match &self.bar {
            Some(bar) => bar.println(msg),
            None => eprintln!("{msg}"),
        }
    }

    fn page_done(&mut self, url: &str, words: usize) {
        if let Some(bar) = &self.bar {
            let letter = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
            bar.set_message(format!("{letter} ({words})"));
            bar.inc(1);
        }
    }

    fn page_failed(&mut self, url: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(format!("failed at {url}"));
        }
    }

    fn finish(&mut self, _direction: Direction) {
        if let Some(bar) = self.bar.take() {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}
