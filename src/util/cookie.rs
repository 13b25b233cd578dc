//! `document.cookie` parsing.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find `name` in a `key=value; key=value` cookie string.
///
/// Returns the text after the first `=` of the first matching pair. Missing
/// keys and empty values both yield `None`.
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
