//! Platforms that use the shared delivery and validation rules unchanged

use super::{Platform, PlatformDescriptor};

/// Platform with no specialized checks
pub struct StandardPlatform {
    descriptor: PlatformDescriptor,
}

impl StandardPlatform {
    pub fn new(descriptor: PlatformDescriptor) -> Self {
        Self { descriptor }
    }

    /// Codex reads `AGENTS.md` only
    pub fn codex() -> Self {
        Self::new(
            PlatformDescriptor::new("codex", "Codex", "AGENTS.md", ".codex/skills")
                .with_user_skills("~/.codex/skills")
                .without_bundles(),
        )
    }

    pub fn opencode() -> Self {
        Self::new(PlatformDescriptor::new(
            "opencode",
            "OpenCode",
            "AGENTS.md",
            ".opencode/skill",
        ))
    }

    pub fn droid() -> Self {
        Self::new(
            PlatformDescriptor::new("droid", "Droid", "AGENTS.md", ".droid/skills")
                .with_user_skills("~/.droid/skills"),
        )
    }
}

impl Platform for StandardPlatform {
    fn descriptor(&self) -> &PlatformDescriptor {
        &self.descriptor
    }
}
