mod heading;

pub use heading::{HeadingLine, MAX_DEPTH};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub title: String,
    pub level: usize,
    /// 1-based position in the source document.
    pub line_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_anchor: Option<String>,
}

impl Heading {
    /// Builds a heading from a line, or `None` if the line is not a heading.
    ///
    /// # Errors
    ///
    /// Fails if the line ends in an anchor tag without a quoted name.
    pub fn try_from_line(line: &str, line_number: usize) -> Result<Option<Self>> {
        let Some(parts) = HeadingLine::try_parse(line) else {
            return Ok(None);
        };

        Ok(Some(Self {
            title: parts.title.to_owned(),
            level: parts.level(),
            line_number,
            existing_anchor: parts.anchor_name(line_number)?.map(ToOwned::to_owned),
        }))
    }
}

#[must_use]
pub fn is_heading(line: &str) -> bool {
    HeadingLine::try_parse(line).is_some()
}

#[must_use]
pub fn parse_line(line: &str) -> Option<HeadingLine<'_>> {
    HeadingLine::try_parse(line)
}

/// Collects every heading of a document, in order. Non-heading lines are skipped.
///
/// # Errors
///
/// Fails on the first heading whose anchor tag carries no quoted name.
pub fn parse_headings<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Heading>> {
    let mut headings = vec![];

    for (index, line) in lines.iter().enumerate() {
        if let Some(heading) = Heading::try_from_line(line.as_ref(), index + 1)? {
            debug!(
                line = heading.line_number,
                level = heading.level,
                "Found heading: {}",
                heading.title
            );
            headings.push(heading);
        }
    }

    Ok(headings)
}
