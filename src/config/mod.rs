pub mod policy;
pub mod words;

pub use policy::*;
pub use words::*;

use std::path::PathBuf;

/// Returns the global config directory path: `~/.config/censorkit/`
pub fn dirs_global() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("censorkit")
}
