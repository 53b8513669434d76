use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::parser::Heading;

const ANCHOR_TAG_PREFIX: &str = "<a name=\"";
const ANCHOR_TAG_POSTFIX: &str = "\"></a>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Anchor {
    /// Already present on the heading line.
    Existing(String),
    /// Derived from the title; still has to be stamped onto the line.
    Assigned(String),
}

impl Anchor {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Existing(id) | Self::Assigned(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchoredHeading {
    #[serde(flatten)]
    pub heading: Heading,
    pub anchor: Anchor,
}

/// Lower-cases ASCII letters and turns spaces into hyphens. Nothing else is touched.
#[must_use]
pub fn compose_anchor(title: &str) -> String {
    title.to_ascii_lowercase().replace(' ', "-")
}

#[must_use]
pub fn compose_anchor_tag(id: &str) -> String {
    format!("{ANCHOR_TAG_PREFIX}{id}{ANCHOR_TAG_POSTFIX}")
}

/// Anchors seen so far in a document.
#[derive(Debug, Default)]
pub struct Anchors {
    taken: HashSet<String>,
}

impl Anchors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.taken.contains(id)
    }

    pub fn insert(&mut self, id: &str) {
        self.taken.insert(id.to_owned());
    }

    /// Returns `base`, or the first of `base-2`, `base-3`, ... not taken yet.
    #[must_use]
    pub fn resolve(&self, base: &str) -> String {
        let mut id = base.to_owned();
        let mut counter = 2;

        while self.contains(&id) {
            id = format!("{base}-{counter}");
            counter += 1;
        }

        id
    }
}

/// Gives every heading without an anchor a unique one. Only anchors earlier in
/// the document constrain later ones.
#[must_use]
pub fn assign_anchors(headings: Vec<Heading>) -> Vec<AnchoredHeading> {
    let mut anchors = Anchors::new();

    headings
        .into_iter()
        .map(|mut heading| {
            let anchor = match heading.existing_anchor.take() {
                Some(id) => Anchor::Existing(id),
                None => {
                    let id = anchors.resolve(&compose_anchor(&heading.title));
                    debug!(line = heading.line_number, "Assigned anchor {id}");
                    Anchor::Assigned(id)
                }
            };
            anchors.insert(anchor.id());

            AnchoredHeading { heading, anchor }
        })
        .collect()
}
