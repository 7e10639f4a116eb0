use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Correct,
    Error,
    Next,
}

impl Tag {
    pub fn class_name(self) -> &'static str {
        match self {
            Tag::Correct => "correct-text",
            Tag::Error => "error-text",
            Tag::Next => "next-char",
        }
    }
}

/// One displayable run of target text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tag: Option<Tag>,
    pub underlined: bool,
}

impl Segment {
    fn tagged(ch: char, tag: Tag) -> Self {
        Self {
            text: ch.to_string(),
            tag: Some(tag),
            underlined: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressMarkup {
    pub segments: Vec<Segment>,
}

/// Project typing progress over `target` onto tagged segments.
///
/// Typed positions are tagged correct or error, the character at the cursor is
/// tagged next (or error if already flagged) and underlined, and the rest of
/// the target follows as one untagged block.
pub fn render_progress(
    target: &[char],
    typed_len: usize,
    errors: &BTreeSet<usize>,
) -> ProgressMarkup {
    let typed_len = typed_len.min(target.len());
    let mut segments = Vec::with_capacity(typed_len + 2);

    for (idx, &ch) in target[..typed_len].iter().enumerate() {
        let tag = if errors.contains(&idx) {
            Tag::Error
        } else {
            Tag::Correct
        };
        segments.push(Segment::tagged(ch, tag));
    }

    if typed_len < target.len() {
        let tag = if errors.contains(&typed_len) {
            Tag::Error
        } else {
            Tag::Next
        };
        segments.push(Segment {
            underlined: true,
            ..Segment::tagged(target[typed_len], tag)
        });
        if typed_len + 1 < target.len() {
            segments.push(Segment {
                text: target[typed_len + 1..].iter().collect(),
                tag: None,
                underlined: false,
            });
        }
    }

    ProgressMarkup { segments }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

impl ProgressMarkup {
    /// Markup string form, e.g. `<span class="correct-text">a</span>`.
    /// Target characters are escaped, so custom level tables are safe to display.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.tag {
                Some(tag) => {
                    out.push_str("<span class=\"");
                    out.push_str(tag.class_name());
                    out.push_str("\">");
                }
                None => out.push_str("<span>"),
            }
            if segment.underlined {
                out.push_str("<u>");
            }
            escape_into(&mut out, &segment.text);
            if segment.underlined {
                out.push_str("</u>");
            }
            out.push_str("</span>");
        }
        out
    }
}

impl fmt::Display for ProgressMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_fresh_target_marks_first_char_next() {
        let target = chars("abc de fgh");
        let markup = render_progress(&target, 0, &BTreeSet::new());
        assert_eq!(markup.segments.len(), 2);
        assert_eq!(markup.segments[0].text, "a");
        assert_eq!(markup.segments[0].tag, Some(Tag::Next));
        assert!(markup.segments[0].underlined);
        assert_eq!(markup.segments[1].text, "bc de fgh");
        assert_eq!(markup.segments[1].tag, None);
        assert_eq!(markup.segments[1].text.chars().count(), 9);
    }

    #[test]
    fn test_partial_progress_with_error() {
        let target = chars("abc de fgh");
        let errors = BTreeSet::from([1]);
        let markup = render_progress(&target, 3, &errors);
        let tags: Vec<Option<Tag>> = markup.segments.iter().map(|s| s.tag).collect();
        assert_eq!(
            tags,
            vec![
                Some(Tag::Correct),
                Some(Tag::Error),
                Some(Tag::Correct),
                Some(Tag::Next),
                None
            ]
        );
        assert_eq!(markup.segments[3].text, " ");
        assert_eq!(markup.segments[4].text, "de fgh");
    }

    #[test]
    fn test_flagged_cursor_is_error_not_next() {
        let target = chars("a b");
        let errors = BTreeSet::from([0]);
        let markup = render_progress(&target, 0, &errors);
        assert_eq!(markup.segments[0].tag, Some(Tag::Error));
        assert!(markup.segments[0].underlined);
    }

    #[test]
    fn test_complete_target_has_no_next_segment() {
        let target = chars("a b");
        let markup = render_progress(&target, 3, &BTreeSet::new());
        assert_eq!(markup.segments.len(), 3);
        assert!(markup.segments.iter().all(|s| s.tag == Some(Tag::Correct)));
        assert!(markup.segments.iter().all(|s| !s.underlined));
    }

    #[test]
    fn test_cursor_on_last_char_has_no_remainder() {
        let target = chars("a b");
        let markup = render_progress(&target, 2, &BTreeSet::new());
        assert_eq!(markup.segments.len(), 3);
        assert_eq!(markup.segments[2].text, "b");
        assert_eq!(markup.segments[2].tag, Some(Tag::Next));
    }

    #[test]
    fn test_empty_target_renders_nothing() {
        let markup = render_progress(&[], 0, &BTreeSet::new());
        assert!(markup.segments.is_empty());
        assert_eq!(markup.to_markup(), "");
    }

    #[test]
    fn test_markup_string_matches_span_format() {
        let target = chars("ab c");
        let errors = BTreeSet::from([1]);
        let markup = render_progress(&target, 2, &errors);
        assert_eq!(
            markup.to_markup(),
            "<span class=\"correct-text\">a</span>\
             <span class=\"error-text\">b</span>\
             <span class=\"next-char\"><u> </u></span>\
             <span>c</span>"
        );
    }

    #[test]
    fn test_markup_escapes_significant_characters() {
        let target = chars("< &");
        let markup = render_progress(&target, 0, &BTreeSet::new());
        assert_eq!(
            markup.to_string(),
            "<span class=\"next-char\"><u>&lt;</u></span><span> &amp;</span>"
        );
    }
}
