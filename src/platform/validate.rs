//! Structural validation of a platform layout

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::PlatformDescriptor;
use crate::delivery::fs::Filesystem;

/// Findings for one platform at one target
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub platform: String,
    pub target: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(platform: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            platform: platform.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Valid only when there are no errors and no warnings
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "platform": self.platform,
            "target": self.target,
            "valid": self.is_valid(),
            "errors": self.errors,
            "warnings": self.warnings,
        })
    }
}

/// Rules shared by every platform: a present document must not be empty and a
/// bundle-capable platform must have its skills directory
pub fn check_layout(
    descriptor: &PlatformDescriptor,
    fs: &dyn Filesystem,
    target: &Path,
) -> ValidationReport {
    let mut report = ValidationReport::new(&descriptor.name, target);

    let document = descriptor.document_path(target);
    if fs.exists(&document) {
        match fs.read(&document) {
            Ok(content) if content.is_empty() => report
                .warnings
                .push(format!("{} exists but is empty", document.display())),
            Ok(_) => {}
            Err(err) => report.errors.push(err.to_string()),
        }
    }

    if descriptor.supports_bundles {
        let skills = descriptor.skills_root(target, false);
        if !fs.is_dir(&skills) {
            report.warnings.push(format!(
                "Skills directory does not exist: {}",
                skills.display()
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::fs::OsFilesystem;
    use crate::platform::get;
    use crate::test_fixtures::{create_temp_dir, create_test_files};

    #[test]
    fn test_empty_target_warns_about_skills_dir() {
        let temp = create_temp_dir();
        let report = check_layout(get("droid").unwrap().descriptor(), &OsFilesystem, temp.path());

        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Skills directory does not exist"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_empty_document_warns() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("AGENTS.md", "")]);

        let report = check_layout(get("codex").unwrap().descriptor(), &OsFilesystem, temp.path());

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].ends_with("AGENTS.md exists but is empty"));
    }

    #[test]
    fn test_codex_with_document_is_valid() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("AGENTS.md", "# Rules")]);

        let report = check_layout(get("codex").unwrap().descriptor(), &OsFilesystem, temp.path());
        assert!(report.is_valid());
    }

    #[test]
    fn test_report_json() {
        let mut report = ValidationReport::new("amp", "/work");
        report.warnings.push("something".to_string());

        let json = report.to_json();
        assert_eq!(json["platform"], "amp");
        assert_eq!(json["valid"], false);
        assert_eq!(json["warnings"][0], "something");
    }
}
