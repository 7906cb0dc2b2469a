pub mod allowlist;
pub mod censor;
pub mod policy;
pub mod remove;
pub mod substitute;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{CensorkitError, Result};
use crate::wordlist::{Wordlist, DEFAULT_LIST};

use allowlist::Allowlist;

/// Outcome of filtering one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    pub original: String,
    pub filtered: String,
    pub modified: bool,
}

/// Match counters for one engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Total rewritten matches.
    pub match_count: u64,
    /// Rewritten matches per configured word.
    pub words: BTreeMap<String, u64>,
}

impl FilterStats {
    fn record(&mut self, word: &str) {
        self.match_count += 1;
        *self.words.entry(word.to_string()).or_default() += 1;
    }
}

struct Slot {
    wordlist: Wordlist,
    /// Config generation the wordlist was built from.
    generation: u64,
}

/// Applies the configured words to text.
///
/// Wordlists are only (re)built by [`init`](Self::init),
/// [`build_wordlist`](Self::build_wordlist) and
/// [`rebuild_wordlists`](Self::rebuild_wordlists), never implicitly while
/// replacing, except that a list id used for the first time is built on demand.
#[derive(Default)]
pub struct FilterEngine {
    config: Option<Config>,
    generation: u64,
    wordlists: HashMap<u32, Slot>,
    active_list: u32,
    allowlist: Allowlist,
    stats: FilterStats,
}

impl FilterEngine {
    /// An engine with no configuration; [`init`](Self::init) fails until one is set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        let mut engine = Self::new();
        engine.set_config(config);
        engine
    }

    /// Replace the configuration. Built wordlists become stale.
    pub fn set_config(&mut self, config: Config) {
        self.config = Some(config);
        self.generation += 1;
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Mutable access to the configuration. Built wordlists become stale and
    /// are rebuilt by the next `init`/`rebuild_wordlists`.
    pub fn config_mut(&mut self) -> Option<&mut Config> {
        let config = self.config.as_mut()?;
        self.generation += 1;
        Some(config)
    }

    /// Engine built from `config` with the default wordlist active.
    pub fn from_config(config: Config) -> Result<Self> {
        let mut engine = Self::with_config(config);
        engine.init(DEFAULT_LIST)?;
        Ok(engine)
    }

    /// Make `list_id` the active wordlist, building it if it is missing or
    /// stale. Calling it again with an unchanged configuration does nothing.
    pub fn init(&mut self, list_id: u32) -> Result<()> {
        let fresh = self
            .wordlists
            .get(&list_id)
            .is_some_and(|slot| slot.generation == self.generation);
        if !fresh {
            self.build_wordlist(list_id)?;
        }
        self.active_list = list_id;
        Ok(())
    }

    /// Build (or replace) the wordlist for `list_id`.
    pub fn build_wordlist(&mut self, list_id: u32) -> Result<()> {
        let config = require_config(&self.config)?;
        let wordlist = Wordlist::build(config, list_id);
        tracing::debug!(
            "wordlist {} ready, policy {}",
            list_id,
            policy::for_config(config).name()
        );
        self.allowlist = Allowlist::from_config(config);
        self.wordlists.insert(
            list_id,
            Slot {
                wordlist,
                generation: self.generation,
            },
        );
        Ok(())
    }

    /// Rebuild every wordlist built so far, e.g. after words were added.
    pub fn rebuild_wordlists(&mut self) -> Result<()> {
        let config = require_config(&self.config)?;
        for slot in self.wordlists.values_mut() {
            slot.wordlist.rebuild(config);
            slot.generation = self.generation;
        }
        self.allowlist = Allowlist::from_config(config);
        tracing::debug!("rebuilt {} wordlist(s)", self.wordlists.len());
        Ok(())
    }

    pub fn wordlist(&self, list_id: u32) -> Option<&Wordlist> {
        self.wordlists.get(&list_id).map(|slot| &slot.wordlist)
    }

    pub fn active_list(&self) -> u32 {
        self.active_list
    }

    pub fn match_count(&self) -> u64 {
        self.stats.match_count
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = FilterStats::default();
    }

    /// Filter `text` with the active wordlist, counting matches.
    pub fn replace_text(&mut self, text: &str) -> String {
        self.replace_text_in(text, self.active_list, true)
    }

    /// Filter `text` with wordlist `list_id`. With `update_stats == false` the
    /// counters are left alone, for previews.
    pub fn replace_text_in(&mut self, text: &str, list_id: u32, update_stats: bool) -> String {
        if !self.wordlists.contains_key(&list_id) {
            if let Err(e) = self.build_wordlist(list_id) {
                tracing::warn!("cannot filter with wordlist {}: {}", list_id, e);
                return text.to_string();
            }
        }
        let (Some(config), Some(slot)) = (self.config.as_ref(), self.wordlists.get(&list_id))
        else {
            return text.to_string();
        };

        let policy = policy::for_config(config);
        let allowlist = &self.allowlist;
        let stats = &mut self.stats;

        let mut result = text.to_string();
        for matcher in slot.wordlist.matchers() {
            let word = matcher.word();
            result = matcher.replace_all(&result, |hit| {
                if allowlist.allows(hit, word) {
                    return hit.keep();
                }
                if update_stats {
                    stats.record(&word.value);
                }
                policy.rewrite(hit, word)
            });
        }
        result
    }

    /// Filter `text` with the active wordlist and report whether it changed.
    pub fn replace_text_result(&mut self, text: &str) -> FilterResult {
        let filtered = self.replace_text(text);
        FilterResult {
            original: text.to_string(),
            modified: filtered != text,
            filtered,
        }
    }
}

fn require_config(config: &Option<Config>) -> Result<&Config> {
    let config = config.as_ref().ok_or_else(|| CensorkitError::Configuration {
        reason: "no configuration has been supplied".into(),
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_mut_without_config_keeps_generation() {
        let mut engine = FilterEngine::new();
        assert!(engine.config_mut().is_none());
        assert_eq!(engine.generation, 0);

        engine.set_config(Config::default());
        assert!(engine.config_mut().is_some());
        assert_eq!(engine.generation, 2);
    }
}
