use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use crate::error::{Error, Result};

/// values substituted into a template, keyed by placeholder name
pub type Placeholders<'a> = HashMap<&'a str, String>;

/// a text template with `$NAME` / `${NAME}` placeholders and `$$` as an escaped `$`
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|err| Error::ReadTemplate(path.into(), err))?;
        Ok(Self::new(text))
    }

    /// fill in every placeholder, failing on the first one without a value
    pub fn substitute(&self, values: &Placeholders) -> Result<String> {
        let mut out = String::with_capacity(self.text.len());
        for segment in parse(&self.text)? {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| Error::MissingPlaceholder(name.into()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn parse(text: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = text;
    let mut offset = 0;
    while let Some(pos) = rest.find('$') {
        if pos > 0 {
            segments.push(Segment::Text(&rest[..pos]));
        }
        let after = &rest[pos + 1..];
        let (segment, used) = if after.starts_with('$') {
            (Segment::Text("$"), 1)
        } else if let Some(braced) = after.strip_prefix('{') {
            match identifier(braced) {
                Some(name) if braced[name.len()..].starts_with('}') => {
                    (Segment::Placeholder(name), name.len() + 2)
                }
                _ => return Err(invalid_at(text, offset + pos)),
            }
        } else if let Some(name) = identifier(after) {
            (Segment::Placeholder(name), name.len())
        } else {
            return Err(invalid_at(text, offset + pos));
        };
        segments.push(segment);

        let consumed = pos + 1 + used;
        rest = &rest[consumed..];
        offset += consumed;
    }
    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}

// longest `[_A-Za-z][_A-Za-z0-9]*` prefix
fn identifier(text: &str) -> Option<&str> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    let end = chars
        .find(|(_, c)| !(*c == '_' || c.is_ascii_alphanumeric()))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    Some(&text[..end])
}

fn invalid_at(text: &str, at: usize) -> Error {
    let before = &text[..at];
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    Error::InvalidPlaceholder {
        line: before.matches('\n').count() + 1,
        col: before[line_start..].chars().count() + 1,
    }
}
