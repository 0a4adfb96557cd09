//! Amp: shared `AGENTS.md` and `.agents/skills`

use std::path::Path;

use super::manifest::check_skill_manifest;
use super::{Platform, PlatformDescriptor};
use crate::delivery::fs::Filesystem;
use crate::error::Result;

pub struct Amp {
    descriptor: PlatformDescriptor,
}

impl Amp {
    pub fn new() -> Self {
        Self {
            descriptor: PlatformDescriptor::new("amp", "Amp", "AGENTS.md", ".agents/skills")
                .with_user_skills("~/.config/agents/skills"),
        }
    }
}

impl Default for Amp {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Amp {
    fn descriptor(&self) -> &PlatformDescriptor {
        &self.descriptor
    }

    fn check_bundle(&self, fs: &dyn Filesystem, dir: &Path, name: &str) -> Result<Vec<String>> {
        check_skill_manifest(fs, dir, name, &self.descriptor.label)
    }
}
