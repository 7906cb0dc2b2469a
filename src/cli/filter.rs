use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::filter::FilterEngine;

pub struct FilterArgs {
    pub list: u32,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub preview: bool,
    pub stats: bool,
}

/// Filter stdin (or a file) line by line to stdout.
pub fn run(config: Config, args: FilterArgs) -> Result<()> {
    let mut engine = FilterEngine::with_config(config);
    engine.init(args.list)?;

    if let Some(wordlist) = engine.wordlist(args.list) {
        for failure in wordlist.failures() {
            eprintln!("censorkit: skipping word: {}", failure);
        }
    }

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line?;
        let filtered = engine.replace_text_in(&line, args.list, !args.preview);
        if args.json {
            let result = crate::filter::FilterResult {
                modified: filtered != line,
                original: line,
                filtered,
            };
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(out, "{}", filtered)?;
        }
    }
    out.flush()?;

    if args.stats {
        let stats = engine.stats();
        eprintln!("censorkit: {} match(es)", stats.match_count);
        for (word, count) in &stats.words {
            eprintln!("  {}: {}", word, count);
        }
    }

    Ok(())
}
