use thiserror::Error;

pub type Result<T, E = TocError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TocError {
    #[error("Document does not contain header with name {header}")]
    MissingContentsHeader { header: String },

    #[error("Malformed anchor tag on line {line_number}: {tag}")]
    MalformedAnchorTag { line_number: usize, tag: String },
}
