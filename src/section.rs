use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

/// Delay between consecutive skill tags in the entrance cascade.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("Duplicate section anchor: #{0}")]
    DuplicateAnchor(String),
}

/// Anchor identity of a section: the explicit id, else the lower-cased title.
pub fn anchor_for(title: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => title.to_lowercase(),
    }
}

/// Entrance delay for the skill tag at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// A top-level section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMeta {
    pub title: &'static str,
    pub id: Option<&'static str>,
    pub in_nav: bool,
}

impl SectionMeta {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            id: None,
            in_nav: false,
        }
    }

    pub const fn with_id(self, id: &'static str) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub const fn in_nav(self) -> Self {
        Self {
            in_nav: true,
            ..self
        }
    }

    pub fn anchor(&self) -> String {
        anchor_for(self.title, self.id)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

pub const ABOUT: SectionMeta = SectionMeta::new("About").in_nav();
pub const SKILLS: SectionMeta = SectionMeta::new("Skills").in_nav();
pub const SERVICES: SectionMeta = SectionMeta::new("Services");
pub const PROJECTS: SectionMeta = SectionMeta::new("Projects").in_nav();
pub const CERTIFICATES: SectionMeta = SectionMeta::new("Certificates");
pub const CONTACT: SectionMeta = SectionMeta::new("Contact").in_nav();

/// Top-level sections in page order.
pub const PAGE_SECTIONS: [SectionMeta; 6] =
    [ABOUT, SKILLS, SERVICES, PROJECTS, CERTIFICATES, CONTACT];

/// Checks that no two sections share an anchor.
pub fn validate_anchors(sections: &[SectionMeta]) -> Result<(), SectionError> {
    let mut seen = HashSet::new();
    for s in sections {
        let anchor = s.anchor();
        if !seen.insert(anchor.clone()) {
            return Err(SectionError::DuplicateAnchor(anchor));
        }
    }
    Ok(())
}

/// Navigation entries (title, href) in page order.
pub fn nav_items(sections: &[SectionMeta]) -> Vec<(&'static str, String)> {
    sections
        .iter()
        .filter(|s| s.in_nav)
        .map(|s| (s.title, s.href()))
        .collect()
}

/// One-shot trigger for the reveal animation. Fires on the first
/// intersection of a mount and never again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one visibility observation. Returns `true` only for the first
    /// visible observation.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
