use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::wordlist::{Wordlist, DEFAULT_LIST};

/// Validate a config file: global policy, then every word in every list it names.
pub fn run(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    config.validate()?;

    let mut list_ids: Vec<u32> = config
        .words
        .iter()
        .flat_map(|(_, options)| options.lists.iter().copied())
        .filter(|&id| id != DEFAULT_LIST)
        .collect();
    list_ids.sort_unstable();
    list_ids.dedup();

    eprintln!(
        "censorkit: checking {} word(s) in {}...",
        config.words.len(),
        path.display()
    );

    // List 0 holds every word, so its failures cover all lists.
    let all = Wordlist::build(&config, DEFAULT_LIST);
    for failure in all.failures() {
        eprintln!("  {}", failure);
    }

    for id in list_ids {
        let list = Wordlist::build(&config, id);
        eprintln!("  wordlist {}: {} word(s)", id, list.len());
    }

    if !all.failures().is_empty() {
        eprintln!(
            "\ncensorkit: {} word(s) failed to compile.",
            all.failures().len()
        );
        std::process::exit(1);
    }

    eprintln!("censorkit: config ok -- {} word(s) compiled.", all.len());
    Ok(())
}
