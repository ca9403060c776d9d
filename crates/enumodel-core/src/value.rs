//! Attribute value payloads.

use std::collections::BTreeMap;

/// A per-locale string, the payload of a multilingual attribute value.
///
/// Locales are kept sorted so the compact serialized form is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternationalString {
    entries: BTreeMap<String, String>,
}

impl InternationalString {
    /// Create an empty international string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for a locale.
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(locale.into(), text.into());
        self
    }

    /// Set the text for a locale.
    pub fn set(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(locale.into(), text.into());
    }

    /// Get the text for a locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries.get(locale).map(|s| s.as_str())
    }

    /// Iterate over locale/text pairs in locale order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    /// True when no locale carries any text.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|t| t.is_empty())
    }

    /// Serialize to the compact `locale=text;locale=text` form.
    ///
    /// Delimiters (`;`, `=`) and the backslash occurring in a locale or text
    /// are backslash-escaped, so arbitrary translated text round-trips.
    pub fn to_compact(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(l, t)| format!("{}={}", escape_compact(l), escape_compact(t)))
            .collect();
        parts.join(";")
    }

    /// Parse the compact `locale=text;locale=text` form, undoing the
    /// backslash escapes of [`to_compact`](Self::to_compact).
    ///
    /// Segments without an unescaped `=` separator are ignored.
    pub fn from_compact(compact: &str) -> Self {
        let mut result = Self::new();
        let mut locale = String::new();
        let mut text = String::new();
        let mut in_text = false;
        let mut chars = compact.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        if in_text {
                            text.push(escaped);
                        } else {
                            locale.push(escaped);
                        }
                    }
                }
                '=' if !in_text => in_text = true,
                ';' => {
                    if in_text {
                        result.set(std::mem::take(&mut locale), std::mem::take(&mut text));
                    } else {
                        locale.clear();
                    }
                    in_text = false;
                }
                _ => {
                    if in_text {
                        text.push(c);
                    } else {
                        locale.push(c);
                    }
                }
            }
        }
        if in_text {
            result.set(locale, text);
        }
        result
    }
}

/// Escape the compact-form delimiters in one locale or text segment.
fn escape_compact(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | ';' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The atomic unit stored for one attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain string. `None` means no value has been set, which is distinct
    /// from the empty string.
    Plain(Option<String>),
    /// A per-locale string for multilingual attributes.
    International(InternationalString),
}

impl Value {
    /// Create a plain value.
    pub fn plain(text: impl Into<String>) -> Self {
        Value::Plain(Some(text.into()))
    }

    /// Create an unset plain value.
    pub fn unset() -> Self {
        Value::Plain(None)
    }

    /// Create an international value.
    pub fn international(text: InternationalString) -> Self {
        Value::International(text)
    }

    /// True for the international variant.
    pub fn is_international(&self) -> bool {
        matches!(self, Value::International(_))
    }

    /// True when no content is stored.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Plain(None) => true,
            Value::Plain(Some(text)) => text.is_empty(),
            Value::International(text) => text.is_empty(),
        }
    }

    /// The plain string content, if this is a set plain value.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Value::Plain(text) => text.as_deref(),
            Value::International(_) => None,
        }
    }

    /// The international content, if present.
    pub fn as_international(&self) -> Option<&InternationalString> {
        match self {
            Value::International(text) => Some(text),
            Value::Plain(_) => None,
        }
    }

    /// The canonical persisted rendering, `None` for an unset plain value.
    pub fn raw(&self) -> Option<String> {
        match self {
            Value::Plain(text) => text.clone(),
            Value::International(text) => Some(text.to_compact()),
        }
    }
}
