//! Sibling temp names for atomic config writes.
//!
//! The file is written under a hidden name next to its target and renamed
//! into place, so a crash never leaves a half-written `config.xml`.

use std::path::{Path, PathBuf};
use uuid::Uuid;

const SIBLING_PREFIX: &str = ".seq_rename.";
const SIBLING_SUFFIX: &str = ".tmp";

/// `<parent>/.seq_rename.<32 hex>.tmp`
pub fn tmp_config_sibling_name(target: &Path) -> PathBuf {
    let name = format!("{SIBLING_PREFIX}{}{SIBLING_SUFFIX}", Uuid::new_v4().simple());
    target.parent().unwrap_or_else(|| Path::new(".")).join(name)
}
