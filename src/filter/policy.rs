use crate::config::{Config, FilterMethod};
use crate::word::{Hit, Replacement, Word};

use super::censor::Censor;
use super::remove::Remove;
use super::substitute::Substitute;

/// A rewrite applied to each non-allowlisted match.
pub trait RewritePolicy: Send + Sync {
    /// Produce the replacement for one match of `word`.
    fn rewrite(&self, hit: &Hit<'_>, word: &Word) -> Replacement;

    /// Name of this policy (for logging/debugging).
    fn name(&self) -> &str;
}

/// The policy selected by `config.filter_method`.
pub fn for_config(config: &Config) -> Box<dyn RewritePolicy> {
    match config.filter_method {
        FilterMethod::Censor => Box::new(Censor::from_config(config)),
        FilterMethod::Substitute => Box::new(Substitute::from_config(config)),
        FilterMethod::Remove => Box::new(Remove),
    }
}
