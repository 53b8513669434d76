use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TocError};

/// Deepest heading recognised. Longer `#` runs are plain text.
pub const MAX_DEPTH: usize = 10;

lazy_static! {
    static ref ANCHOR_TAG_RE: Regex = Regex::new(r"<a name=.{1,50}></a>$").unwrap();
}

/// A heading line split into its three parts.
///
/// ```text
/// ### Header title<a name="header-title"></a>
/// |   |           |
/// |   title       anchor_tag
/// pounds
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub pounds: &'a str,
    pub title: &'a str,
    pub anchor_tag: &'a str,
}

impl<'a> HeadingLine<'a> {
    pub fn try_parse(line: &'a str) -> Option<Self> {
        let depth = line.bytes().take_while(|&b| b == b'#').count();

        if depth == 0 || depth > MAX_DEPTH || line.as_bytes().get(depth) != Some(&b' ') {
            return None;
        }

        let title_start = depth + 1;
        let tag = ANCHOR_TAG_RE.find(&line[title_start..]);
        let title_end = tag.map_or(line.len(), |tag| title_start + tag.start());

        Some(Self {
            pounds: &line[..depth],
            title: &line[title_start..title_end],
            anchor_tag: tag.map_or("", |tag| tag.as_str()),
        })
    }

    pub const fn level(&self) -> usize {
        self.pounds.len()
    }

    /// Name carried by the anchor tag, `None` when the line has no tag.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::MalformedAnchorTag`] if the tag has no quoted name.
    pub fn anchor_name(&self, line_number: usize) -> Result<Option<&'a str>> {
        if self.anchor_tag.is_empty() {
            return Ok(None);
        }

        self.anchor_tag
            .split('"')
            .nth(1)
            .map(Some)
            .ok_or_else(|| TocError::MalformedAnchorTag {
                line_number,
                tag: self.anchor_tag.to_owned(),
            })
    }
}
