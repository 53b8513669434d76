#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod anchor;
mod config;
mod error;
pub mod parser;
pub mod rewrite;
pub mod toc;

pub use anchor::{assign_anchors, Anchor, AnchoredHeading};
pub use config::Config;
pub use error::{Result, TocError};
pub use parser::{is_heading, parse_headings, Heading};
pub use rewrite::{add_toc, add_toc_with};
