use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lrukit::command::{self, Outcome};
use lrukit::config::Capacity;
use lrukit::policy::lru::LruCache;
use lrukit::traits::CoreCache;

#[derive(Parser)]
#[command(
    name = "lru_replay",
    about = "Replay get/put commands against an LRU cache"
)]
struct Cli {
    /// Command file, one command per line. `-` reads stdin.
    path: PathBuf,

    /// Maximum number of entries held by the cache.
    #[arg(long, env = "LRUKIT_CAPACITY", default_value = "2")]
    capacity: Capacity,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let input = open_input(&cli.path)?;
    let mut cache: LruCache<String> = LruCache::with_capacity(cli.capacity);
    info!(capacity = cli.capacity.get(), path = %cli.path.display(), "replaying commands");

    let mut malformed = 0usize;
    for (lineno, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", lineno + 1))?;
        let command = match command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                malformed += 1;
                warn!(line = lineno + 1, tokens = err.tokens(), "malformed command");
                println!("{}", Outcome::Malformed(err));
                continue;
            },
        };
        let outcome = command::execute(&mut cache, command);
        if let Outcome::Rejected { error, .. } = &outcome {
            warn!(line = lineno + 1, %error, "put rejected");
        }
        println!("{outcome}");
    }

    debug!(entries = cache.len(), malformed, "replay finished");
    Ok(())
}
