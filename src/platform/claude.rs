//! Claude Code: `CLAUDE.md`, skills and subagents

use std::path::Path;

use super::manifest::check_skill_manifest;
use super::{Platform, PlatformDescriptor};
use crate::delivery::fs::Filesystem;
use crate::error::Result;

pub struct Claude {
    descriptor: PlatformDescriptor,
}

impl Claude {
    pub fn new() -> Self {
        Self {
            descriptor: PlatformDescriptor::new("claude", "Claude", "CLAUDE.md", ".claude/skills")
                .with_user_skills("~/.claude/skills")
                .with_subagents(".claude/agents"),
        }
    }
}

impl Default for Claude {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Claude {
    fn descriptor(&self) -> &PlatformDescriptor {
        &self.descriptor
    }

    fn check_bundle(&self, fs: &dyn Filesystem, dir: &Path, name: &str) -> Result<Vec<String>> {
        check_skill_manifest(fs, dir, name, &self.descriptor.label)
    }
}
