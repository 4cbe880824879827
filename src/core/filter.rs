//! # Filter Engine
//!
//! Derives the filtered view of the catalog from a search term, and splits
//! display text into matched / unmatched segments for highlighting.
//!
//! Matching is a literal, case-insensitive substring test. The term is never
//! interpreted as a pattern, so `"."`, `"("` or `"*"` only match themselves.
//! Case folding is done one `char` at a time, which keeps every match aligned
//! to character boundaries of the original text.

use crate::core::item::Item;

/// A run of display text tagged as matching the search term or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Returns every item whose id or search name contains `term`.
///
/// An empty term returns all items unchanged. Accepts any iterator of item
/// references, so the result can be filtered again.
pub fn filter<'a, I>(items: I, term: &str) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    if term.is_empty() {
        return items.into_iter().collect();
    }
    items.into_iter().filter(|item| matches(item, term)).collect()
}

/// True when `term` occurs (ignoring case) in the item's id or its search name.
pub fn matches(item: &Item, term: &str) -> bool {
    contains_ignore_case(&item.search_name(), term) || contains_ignore_case(&item.id, term)
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || find_ignore_case(haystack, needle, 0).is_some()
}

/// Finds the first case-insensitive occurrence of `needle` at or after byte
/// offset `from`. Returns the byte range of the match in `haystack`.
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    let rest = haystack.get(from..)?;
    rest.char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        match_len_at(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

/// Byte length of the prefix of `text` that matches `needle`, if any.
fn match_len_at(text: &str, needle: &str) -> Option<usize> {
    let mut text_chars = text.chars();
    let mut len = 0;
    for n in needle.chars() {
        let t = text_chars.next()?;
        if !chars_eq_ignore_case(t, n) {
            return None;
        }
        len += t.len_utf8();
    }
    Some(len)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Splits `text` around case-insensitive occurrences of `term`.
///
/// Concatenating the segments always reproduces `text`. Occurrences are found
/// left to right and never overlap.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }
    if term.is_empty() {
        segments.push(Segment {
            text,
            is_match: false,
        });
        return segments;
    }

    let mut cursor = 0;
    while let Some((start, end)) = find_ignore_case(text, term, cursor) {
        if start > cursor {
            segments.push(Segment {
                text: &text[cursor..start],
                is_match: false,
            });
        }
        segments.push(Segment {
            text: &text[start..end],
            is_match: true,
        });
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            is_match: false,
        });
    }
    segments
}
