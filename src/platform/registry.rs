//! Process-wide platform registry
//!
//! Built once on first use and never mutated afterward.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Platform;
use super::amp::Amp;
use super::claude::Claude;
use super::standard::StandardPlatform;
use crate::error::{Result, platform::unknown};

/// Registry of all supported platforms, in display order
pub struct PlatformRegistry {
    platforms: Vec<Box<dyn Platform>>,
    by_name: HashMap<String, usize>,
}

impl PlatformRegistry {
    pub fn new(platforms: Vec<Box<dyn Platform>>) -> Self {
        let by_name = platforms
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.name().to_ascii_lowercase(), idx))
            .collect();

        Self { platforms, by_name }
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&dyn Platform> {
        let idx = *self.by_name.get(&name.trim().to_ascii_lowercase())?;
        self.platforms.get(idx).map(|p| p.as_ref())
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn Platform> {
        self.platforms.iter().map(|p| p.as_ref())
    }
}

static REGISTRY: LazyLock<PlatformRegistry> = LazyLock::new(|| {
    PlatformRegistry::new(vec![
        Box::new(Claude::new()),
        Box::new(StandardPlatform::codex()),
        Box::new(Amp::new()),
        Box::new(StandardPlatform::opencode()),
        Box::new(StandardPlatform::droid()),
    ])
});

/// Look up a platform by name
pub fn get(name: &str) -> Result<&'static dyn Platform> {
    REGISTRY.get(name).ok_or_else(|| unknown(name))
}

/// All platforms in registry order
pub fn all() -> impl Iterator<Item = &'static dyn Platform> {
    REGISTRY.all()
}

/// Resolve every name, failing on the first unknown one; duplicates are dropped
pub fn resolve_all(names: &[String]) -> Result<Vec<&'static dyn Platform>> {
    let mut resolved: Vec<&'static dyn Platform> = Vec::new();
    for name in names {
        let platform = get(name)?;
        if !resolved.iter().any(|p| p.name() == platform.name()) {
            resolved.push(platform);
        }
    }
    Ok(resolved)
}
