use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::wordlist::Wordlist;

/// Print a wordlist in match order: index, word, method, flags, pattern.
pub fn run(config: &Config, list: u32) -> Result<()> {
    config.validate()?;
    let wordlist = Wordlist::build(config, list);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (index, matcher) in wordlist.matchers().iter().enumerate() {
        let word = matcher.word();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            index,
            word.value,
            word.match_method,
            matcher.flags(),
            matcher.regex().as_str()
        )?;
    }

    for failure in wordlist.failures() {
        eprintln!("censorkit: skipped: {}", failure);
    }
    Ok(())
}
