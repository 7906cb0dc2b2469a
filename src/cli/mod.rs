pub mod check;
pub mod edit;
pub mod filter;
pub mod words;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{dirs_global, Config, MatchMethod};
use crate::error::Result;
use crate::wordlist::DEFAULT_LIST;

#[derive(Debug, Parser)]
#[command(name = "censorkit", version, about = "Censor, substitute or remove configured words in text")]
pub struct Cli {
    /// Config file (YAML or JSON). Default: ~/.config/censorkit/config.yml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log wordlist builds and skipped words.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter text from a file or stdin, line by line, to stdout.
    Filter {
        /// Wordlist id to filter with.
        #[arg(long, default_value_t = DEFAULT_LIST)]
        list: u32,

        /// Read from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print one JSON result object per line.
        #[arg(long)]
        json: bool,

        /// Do not count matches.
        #[arg(long)]
        preview: bool,

        /// Print match statistics to stderr when done.
        #[arg(long)]
        stats: bool,
    },

    /// Show a wordlist in match order with its compiled patterns.
    Words {
        #[arg(long, default_value_t = DEFAULT_LIST)]
        list: u32,
    },

    /// Validate the config and report words that fail to compile.
    Check,

    /// Add a word to the config file, replacing it if present.
    Add {
        word: String,

        #[arg(long, value_enum)]
        method: Option<MethodArg>,

        /// Substitution; separate candidates with `;;`.
        #[arg(long)]
        sub: Option<String>,

        #[arg(long)]
        repeat: Option<bool>,

        #[arg(long)]
        separators: Option<bool>,

        #[arg(long)]
        case_sensitive: Option<bool>,

        /// Wordlist ids (repeatable).
        #[arg(long = "list")]
        lists: Vec<u32>,
    },

    /// Remove a word from the config file.
    Remove { word: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Exact,
    Partial,
    Whole,
    Regex,
}

impl From<MethodArg> for MatchMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Exact => MatchMethod::Exact,
            MethodArg::Partial => MatchMethod::Partial,
            MethodArg::Whole => MatchMethod::Whole,
            MethodArg::Regex => MatchMethod::Regex,
        }
    }
}

/// The config path from `--config`, or the global default.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs_global().join("config.yml"))
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let path = config_path(cli.config.as_deref());
    match cli.command {
        Command::Filter {
            list,
            file,
            json,
            preview,
            stats,
        } => {
            let config = Config::load_from(&path)?;
            filter::run(
                config,
                filter::FilterArgs {
                    list,
                    file,
                    json,
                    preview,
                    stats,
                },
            )
        }
        Command::Words { list } => words::run(&Config::load_from(&path)?, list),
        Command::Check => check::run(&path),
        Command::Add {
            word,
            method,
            sub,
            repeat,
            separators,
            case_sensitive,
            lists,
        } => {
            let options = crate::config::WordOptions {
                match_method: method.map(Into::into),
                match_repeated: repeat,
                match_separators: separators,
                case_sensitive,
                substitution: sub.unwrap_or_default(),
                lists,
            };
            edit::add(&path, &word, options)
        }
        Command::Remove { word } => edit::remove(&path, &word),
    }
}
