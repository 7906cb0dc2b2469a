//! Word matching and text rewriting.
//!
//! A [`Config`] supplies the word dictionary and the global filter policy.
//! [`FilterEngine`] compiles the words into [`Wordlist`]s, longest word first,
//! and rewrites text by censoring, substituting or removing every match.
//!
//! ```
//! use censorkit::{Config, FilterEngine, MatchMethod, WordOptions};
//!
//! let mut config = Config::default();
//! config.add_word("example", WordOptions::new(MatchMethod::Exact));
//!
//! let mut engine = FilterEngine::from_config(config).unwrap();
//! assert_eq!(engine.replace_text("An example."), "An e******.");
//! assert_eq!(engine.match_count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod word;
pub mod wordlist;

pub use config::{Config, FilterMethod, MatchMethod, WordOptions, Words};
pub use error::{CensorkitError, Result};
pub use filter::{FilterEngine, FilterResult, FilterStats};
pub use word::{Matcher, Word};
pub use wordlist::{Wordlist, DEFAULT_LIST};
