use tracing::{debug, info};

use crate::{
    anchor::{assign_anchors, compose_anchor_tag, Anchor, AnchoredHeading},
    config::Config,
    error::{Result, TocError},
    parser::{parse_headings, parse_line},
    toc::render,
};

/// Appends an anchor tag to every heading line whose anchor was derived.
/// Lines of headings that already carried an anchor are left as they are.
#[must_use]
pub fn stamp_anchors(mut lines: Vec<String>, headings: &[AnchoredHeading]) -> Vec<String> {
    for heading in headings {
        let Anchor::Assigned(id) = &heading.anchor else {
            continue;
        };

        let index = heading.heading.line_number.checked_sub(1);

        if let Some(line) = index.and_then(|index| lines.get_mut(index)) {
            line.truncate(line.trim_end().len());
            line.push_str(&compose_anchor_tag(id));
        }
    }

    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Passthrough,
    Suppressing,
}

struct State<'a> {
    mode: Mode,
    toc: &'a [String],
    found_header: bool,
    output: Vec<String>,
}

impl<'a> State<'a> {
    fn new(toc: &'a [String], capacity: usize) -> Self {
        Self {
            mode: Mode::Passthrough,
            toc,
            found_header: false,
            output: Vec::with_capacity(capacity + toc.len() + 2),
        }
    }

    fn open_contents(&mut self, line: String) {
        self.output.push(line);
        self.output.push(String::new());
        self.output.extend_from_slice(self.toc);
        self.output.push(String::new());

        self.mode = Mode::Suppressing;
        self.found_header = true;
    }

    fn push_heading(&mut self, line: String) {
        self.mode = Mode::Passthrough;
        self.output.push(line);
    }

    fn push_line(&mut self, line: String) {
        match self.mode {
            Mode::Passthrough => self.output.push(line),
            Mode::Suppressing => debug!("Dropping stale line: {line}"),
        }
    }
}

/// Inserts `toc` under the heading titled `toc_header`, dropping whatever used
/// to sit between that heading and the next one.
///
/// # Errors
///
/// Returns [`TocError::MissingContentsHeader`] if no heading has that title.
pub fn insert_toc(lines: Vec<String>, toc: &[String], toc_header: &str) -> Result<Vec<String>> {
    let mut state = State::new(toc, lines.len());

    for line in lines {
        match parse_line(&line).map(|heading| heading.title == toc_header) {
            Some(true) => state.open_contents(line),
            Some(false) => state.push_heading(line),
            None => state.push_line(line),
        }
    }

    if !state.found_header {
        return Err(TocError::MissingContentsHeader {
            header: toc_header.to_owned(),
        });
    }

    info!(entries = toc.len(), "Inserted table of contents");
    Ok(state.output)
}

/// Runs the whole pipeline with default options and the given skip-count.
///
/// # Errors
///
/// See [`add_toc_with`].
pub fn add_toc<S: AsRef<str>>(lines: &[S], skip_count: usize) -> Result<Vec<String>> {
    add_toc_with(lines, &Config::default().with_skip_headers(skip_count))
}

/// Parses headings, assigns anchors, renders the table of contents, stamps the
/// anchors and inserts the table under the contents heading.
///
/// # Errors
///
/// - If a heading carries an anchor tag without a quoted name.
/// - If the document has no heading titled `config.toc_header`.
pub fn add_toc_with<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<Vec<String>> {
    let headings = assign_anchors(parse_headings(lines)?);
    let toc = render(&headings, config.skip_headers, config.indent_width);

    let lines = lines.iter().map(|line| line.as_ref().to_owned()).collect();
    let lines = stamp_anchors(lines, &headings);

    insert_toc(lines, &toc, &config.toc_header)
}
