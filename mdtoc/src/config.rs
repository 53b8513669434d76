#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Leading headings left out of the table of contents. They still get anchors.
    pub skip_headers: usize,
    /// Title of the heading the table of contents is inserted under.
    pub toc_header: String,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_headers: 0,
            indent_width: 4,
            toc_header: "Contents".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_skip_headers(mut self, skip_headers: usize) -> Self {
        self.skip_headers = skip_headers;
        self
    }

    #[must_use]
    pub fn with_toc_header(mut self, toc_header: impl Into<String>) -> Self {
        self.toc_header = toc_header.into();
        self
    }

    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}
