/// Attributes of a single `#EXT-X-*` tag, in the order they were written.
///
/// Values are kept raw. Quotes around quoted-string values are removed, every other value is
/// stored exactly as written, and coercion to numbers or flags is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> AttributeList<'a> {
    /// Tokenize `line` after stripping the tag `prefix`.
    ///
    /// This never fails: fragments without `=` are skipped, and a repeated name keeps its
    /// first position but takes the last value.
    pub fn parse(line: &'a str, prefix: &str) -> Self {
        let input = line.strip_prefix(prefix).unwrap_or(line);

        let mut list = Self::default();
        for fragment in split_unquoted(input) {
            let fragment = fragment.trim_start();
            match fragment.split_once('=') {
                Some((name, value)) => list.insert(name, unquote(value)),
                None if fragment.is_empty() => {}
                None => log::debug!("Ignored attribute without value: {fragment:?}"),
            }
        }
        list
    }

    fn insert(&mut self, name: &'a str, value: &'a str) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    /// The raw value of `name`, or an empty string when it is absent.
    pub fn get_or_empty(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or_default()
    }

    /// The value of `name` as a signed decimal integer, `0` when absent or malformed.
    pub fn get_i64(&self, name: &str) -> i64 {
        self.get(name)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Whether the enumerated value of `name` is exactly `YES`.
    pub fn is_yes(&self, name: &str) -> bool {
        self.get(name) == Some("YES")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split on commas that are not inside a quoted string.
fn split_unquoted(input: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fragments.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&input[start..]);

    fragments
}

fn unquote(value: &str) -> &str {
    match value.strip_prefix('"') {
        // an unterminated quoted string runs to the end of the line
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => value,
    }
}
