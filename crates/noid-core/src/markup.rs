//! Text extraction from the HTML fragments stored in `html_list`.
//!
//! The fragments are read with quick-xml's event reader relaxed for HTML:
//! end tags need not match, void elements like `<br>` stay open, and
//! attributes may be unquoted. Entities resolve against the HTML5 table.
//! Reading stops at the first syntax error and keeps whatever text was
//! collected before it.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};

fn reader(markup: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    reader
}

fn is_tag(e: &BytesStart, tag: &str) -> bool {
    e.name().as_ref().eq_ignore_ascii_case(tag.as_bytes())
}

fn has_class(e: &BytesStart, class: &str) -> bool {
    e.html_attributes().flatten().any(|attr| {
        attr.key.as_ref().eq_ignore_ascii_case(b"class")
            && attr
                .value
                .split(|b| b.is_ascii_whitespace())
                .any(|c| c == class.as_bytes())
    })
}

/// Text of the first `tag` element carrying `class`, or `None` if there is no such element.
///
/// Nested markup is dropped, entities are decoded and whitespace runs collapse
/// to one space. An element that is never closed runs to the end of the input.
pub fn first_text_by_class(markup: &str, tag: &str, class: &str) -> Option<String> {
    let mut reader = reader(markup);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if is_tag(&e, tag) && has_class(&e, class) => break,
            Ok(Event::Empty(e)) if is_tag(&e, tag) && has_class(&e, class) => {
                return Some(String::new());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }

    let mut depth = 0usize;
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) if is_tag(&e, "br") => text.push(' '),
            Ok(Event::Start(e)) if is_tag(&e, tag) => depth += 1,
            Ok(Event::End(e)) if e.name().as_ref().eq_ignore_ascii_case(tag.as_bytes()) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Text(e)) => text.push_str(&unescape_lenient(&String::from_utf8_lossy(&e))),
            Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            // a syntax error ends the element early, keeping the text so far
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    Some(collapse_whitespace(&text))
}

/// Text of the first `<span class="defpar">`, empty when there is none
pub fn definition(markup: &str) -> String {
    first_text_by_class(markup, "span", "defpar").unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode character references against the HTML5 table.
/// Stray `&` and unknown names are kept verbatim.
pub fn unescape_lenient(raw: &str) -> Cow<'_, str> {
    if let Ok(text) = unescape_with(raw, resolve_predefined_entity) {
        return text;
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let reference = tail[1..]
            .find(|c: char| c == ';' || c == '&' || c.is_whitespace())
            .filter(|&i| tail[1 + i..].starts_with(';'))
            .map(|i| &tail[..i + 2]);
        let decoded = reference.and_then(|r| {
            unescape_with(r, resolve_predefined_entity)
                .ok()
                .map(|d| (d, r.len()))
        });

        match decoded {
            Some((d, consumed)) => {
                out.push_str(&d);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}
