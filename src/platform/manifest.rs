//! `SKILL.md` manifest checks for platforms that load skills by frontmatter.

use std::path::Path;

use crate::delivery::fs::Filesystem;
use crate::error::Result;

/// Manifest file expected at the top of every skill bundle
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Keys every manifest must declare
pub const REQUIRED_KEYS: [&str; 2] = ["name", "description"];

/// Check one bundle's manifest, returning a warning per defect.
///
/// `label` prefixes every message, e.g. "Claude skill review missing SKILL.md".
pub fn check_skill_manifest(
    fs: &dyn Filesystem,
    bundle_dir: &Path,
    name: &str,
    label: &str,
) -> Result<Vec<String>> {
    let manifest = bundle_dir.join(MANIFEST_FILE);
    if !fs.exists(&manifest) {
        return Ok(vec![format!("{label} skill {name} missing {MANIFEST_FILE}")]);
    }

    let bytes = fs.read(&manifest)?;
    let content = String::from_utf8_lossy(&bytes);
    let mut warnings = Vec::new();

    if !content.starts_with("---") {
        warnings.push(format!("{label} skill {name} missing YAML frontmatter"));
    }

    // Tokens count anywhere in the file, nested or after the closing delimiter
    for key in REQUIRED_KEYS {
        if !content.contains(&format!("{key}:")) {
            warnings.push(format!("{label} skill {name} missing '{key}' in frontmatter"));
        }
    }

    Ok(warnings)
}
