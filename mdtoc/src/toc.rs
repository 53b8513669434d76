use tracing::warn;

use crate::anchor::AnchoredHeading;

/// Renders the nested bullet list of links, leaving out the first `skip_count`
/// headings. Indentation is relative to the shallowest heading that is kept.
#[must_use]
pub fn render(headings: &[AnchoredHeading], skip_count: usize, indent_width: usize) -> Vec<String> {
    let Some(headings) = headings.get(skip_count..).filter(|h| !h.is_empty()) else {
        warn!(
            skip_count,
            headings = headings.len(),
            "No headings left for the table of contents"
        );
        return vec![];
    };

    let min_level = headings
        .iter()
        .map(|h| h.heading.level)
        .min()
        .unwrap_or_default();

    headings
        .iter()
        .map(|h| {
            format!(
                "{}* [{}](#{})",
                " ".repeat(indent_width * (h.heading.level - min_level)),
                h.heading.title.trim_end(),
                h.anchor.id().trim_end()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{anchor::Anchor, parser::Heading};

    fn heading(title: &str, level: usize, anchor: Anchor) -> AnchoredHeading {
        AnchoredHeading {
            heading: Heading {
                title: title.to_owned(),
                level,
                line_number: 1,
                existing_anchor: None,
            },
            anchor,
        }
    }

    fn sample() -> Vec<AnchoredHeading> {
        vec![
            heading(
                "header 1 with spaces",
                2,
                Anchor::Assigned("header-1-with-spaces".to_owned()),
            ),
            heading("header 2", 3, Anchor::Existing("header-2".to_owned())),
            heading("header 3", 3, Anchor::Existing("header-3".to_owned())),
        ]
    }

    #[test]
    fn should_render_nested_list() {
        // When
        let toc = render(&sample()[..2], 0, 4);

        // Then
        assert_eq!(
            toc,
            vec![
                "* [header 1 with spaces](#header-1-with-spaces)",
                "    * [header 2](#header-2)",
            ]
        );
    }

    #[test]
    fn should_skip_leading_headings() {
        // When
        let toc = render(&sample(), 1, 4);

        // Then
        assert_eq!(
            toc,
            vec!["* [header 2](#header-2)", "* [header 3](#header-3)"]
        );
    }

    #[test]
    fn should_trim_trailing_whitespace() {
        let toc = render(
            &[heading("Padded  ", 1, Anchor::Existing("padded ".to_owned()))],
            0,
            4,
        );

        assert_eq!(toc, vec!["* [Padded](#padded)"]);
    }

    #[test]
    fn should_indent_relative_to_shallowest_heading() {
        let headings = vec![
            heading("Deep", 4, Anchor::Assigned("deep".to_owned())),
            heading("Shallow", 2, Anchor::Assigned("shallow".to_owned())),
        ];

        let toc = render(&headings, 0, 2);

        assert_eq!(toc, vec!["    * [Deep](#deep)", "* [Shallow](#shallow)"]);
    }

    #[test]
    fn should_render_nothing_when_everything_is_skipped() {
        assert!(render(&sample(), 3, 4).is_empty());
        assert!(render(&sample(), 10, 4).is_empty());
        assert!(render(&[], 0, 4).is_empty());
    }
}
