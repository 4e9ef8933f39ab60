//! Icon lookup under the static asset root.
//!
//! A missing icon is never an error: the placeholder is used instead and the
//! miss is logged.

use crate::services::inventory::display;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const PLACEHOLDER_ICON: &str = "placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Character,
    Weapon,
    Artifact,
}

impl AssetKind {
    pub fn directory(&self) -> &'static str {
        match self {
            AssetKind::Character => "character-portraits",
            AssetKind::Weapon => "weapon-icons",
            AssetKind::Artifact => "artifact-icons",
        }
    }

    /// File name for the icon of `key` (character key, weapon key or artifact set key).
    pub fn filename(&self, key: &str) -> String {
        match self {
            AssetKind::Character => display::character_icon_filename(key),
            AssetKind::Weapon => display::weapon_icon_filename(key),
            AssetKind::Artifact => display::artifact_icon_filename(key),
        }
    }
}

/// One rendered image. Falls back to the placeholder at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSlot {
    src: String,
    fell_back: bool,
}

impl IconSlot {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fell_back: false,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            src: format!("/{PLACEHOLDER_ICON}"),
            fell_back: true,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.fell_back
    }

    /// Record a load failure. Returns `true` only on the switch to the
    /// placeholder; later failures change nothing.
    pub fn mark_failed(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        log::warn!("Icon failed to load, using placeholder: {}", self.src);
        *self = Self::placeholder();
        true
    }
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL path of the icon for `key`, checked against the asset root.
    pub fn icon(&self, kind: AssetKind, key: &str) -> IconSlot {
        let filename = kind.filename(key);
        let mut slot = IconSlot::new(format!("/{}/{}", kind.directory(), filename));
        if !self.root.join(kind.directory()).join(&filename).is_file() {
            slot.mark_failed();
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_existing_icon_resolves() {
        let dir = tempdir().unwrap();
        let portraits = dir.path().join("character-portraits");
        fs::create_dir_all(&portraits).unwrap();
        fs::write(portraits.join("Hu_Tao_Icon.png"), "png").unwrap();

        let resolver = AssetResolver::new(dir.path());
        let icon = resolver.icon(AssetKind::Character, "HuTao");
        assert_eq!(icon.src(), "/character-portraits/Hu_Tao_Icon.png");
        assert!(!icon.is_placeholder());
    }

    #[test]
    fn test_missing_icon_uses_placeholder() {
        let dir = tempdir().unwrap();
        let resolver = AssetResolver::new(dir.path());

        let icon = resolver.icon(AssetKind::Weapon, "Skyward Harp");
        assert_eq!(icon.src(), "/placeholder.svg");
        assert!(icon.is_placeholder());
    }

    #[test]
    fn test_fallback_happens_once() {
        let mut icon = IconSlot::new("/artifact-icons/Gladiator.png");
        assert!(icon.mark_failed());
        assert!(!icon.mark_failed());
        assert_eq!(icon.src(), "/placeholder.svg");
    }

    #[test]
    fn test_kind_directories() {
        assert_eq!(AssetKind::Artifact.directory(), "artifact-icons");
        assert_eq!(
            AssetKind::Artifact.filename("CrimsonWitchOfFlames"),
            "CrimsonWitchOfFlames.png"
        );
    }
}
