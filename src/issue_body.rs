use indexmap::IndexMap;
use serde::Serialize;

/// The key whose continuation lines become separate list entries instead of extra lines.
pub(crate) const SOCIAL_LINKS: &str = "Social links";

/// Splits a key line into its key and value. Only the first occurrence counts.
const SEPARATOR: &str = ": ";

/// The value of a single field in an issue body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum Value {
    /// Text which may span multiple lines, joined with `\n`.
    Scalar(String),
    /// One entry per line, only used for [`SOCIAL_LINKS`].
    List(Vec<String>),
}

/// Every field found in an issue body, in the order each key was first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct ParsedDocument {
    fields: IndexMap<String, Value>,
}

impl ParsedDocument {
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The text of `key`, if it was set by a regular key line.
    pub(crate) fn scalar(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::Scalar(value) => Some(value),
            Value::List(_) => None,
        }
    }

    /// The entries of `key`, if it is a list field.
    pub(crate) fn list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            Value::List(values) => Some(values),
            Value::Scalar(_) => None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn start_field(&mut self, key: &str, value: &str) {
        let value = if key == SOCIAL_LINKS {
            if value.is_empty() {
                Value::List(Vec::new())
            } else {
                Value::List(vec![value.to_string()])
            }
        } else {
            Value::Scalar(value.to_string())
        };
        // `insert` keeps the original position of a repeated key.
        self.fields.insert(key.to_string(), value);
    }

    fn continue_field(&mut self, key: &str, line: &str) {
        match self.fields.get_mut(key) {
            Some(Value::List(values)) => values.push(line.to_string()),
            Some(Value::Scalar(value)) => {
                value.push('\n');
                value.push_str(line);
            }
            None => {}
        }
    }
}

/// Which field continuation lines belong to.
#[derive(Debug)]
enum Cursor {
    Unset,
    Key(String),
}

/// Split `raw` into its non-empty lines, accepting `\r\n` and `\n` in the same document.
pub(crate) fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split("\r\n")
        .flat_map(|piece| piece.split('\n'))
        .filter(|line| !line.is_empty())
}

/// Parse the `Key: Value` lines of an issue body.
///
/// A line containing `": "` starts (or restarts) the field named by everything before it. Any
/// other line extends the most recently started field; lines before the first key are dropped.
/// This never fails, unrecognizable input just produces fewer fields.
pub(crate) fn parse(raw: &str) -> ParsedDocument {
    let (document, _) = lines(raw).fold(
        (ParsedDocument::default(), Cursor::Unset),
        |(mut document, cursor), line| {
            if let Some((key, value)) = line.split_once(SEPARATOR) {
                document.start_field(key, value);
                return (document, Cursor::Key(key.to_string()));
            }
            if let Cursor::Key(key) = &cursor {
                document.continue_field(key, line);
            }
            (document, cursor)
        },
    );
    document
}
