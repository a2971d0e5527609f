//! Domain initialisms and their case-folding replacer
//!
//! An [`InitialismTable`] is built once and then only read. It folds
//! upper-case acronyms to title case before storage-name conversion
//! (`HTTPServer` -> `HttpServer`) and restores them after schema-name
//! derivation (`HttpServer` -> `HTTPServer`).

use once_cell::sync::Lazy;

/// Initialisms recognised by default
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP", "JSON",
    "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UID", "UI", "UUID",
    "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

static SHARED: Lazy<InitialismTable> = Lazy::new(InitialismTable::common);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    upper: String,
    titled: String,
}

/// An immutable, ordered set of upper-case initialisms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialismTable {
    /// Declaration order, used by [`InitialismTable::normalize`]
    entries: Vec<Entry>,
    /// Indices into `entries`, longest first, used by [`InitialismTable::restore`]
    by_length: Vec<usize>,
}

impl InitialismTable {
    /// Build a table from arbitrary entries
    ///
    /// Entries are upper-cased; empty entries and duplicates are dropped,
    /// keeping the first occurrence.
    pub fn new<I, S>(initialisms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for raw in initialisms {
            let upper = raw.as_ref().trim().to_uppercase();
            if upper.is_empty() || entries.iter().any(|e| e.upper == upper) {
                continue;
            }
            let titled = title_case_word(&upper.to_lowercase());
            entries.push(Entry { upper, titled });
        }

        let mut by_length: Vec<usize> = (0..entries.len()).collect();
        // Stable sort keeps declaration order among equal lengths
        by_length.sort_by(|a, b| entries[*b].upper.len().cmp(&entries[*a].upper.len()));

        Self { entries, by_length }
    }

    /// The default table built from [`COMMON_INITIALISMS`]
    pub fn common() -> Self {
        Self::new(COMMON_INITIALISMS.iter().copied())
    }

    /// A process-wide default table, built on first use
    pub fn shared() -> &'static InitialismTable {
        &SHARED
    }

    /// An empty table; no acronym handling is applied
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the upper-case initialisms in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.upper.as_str())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        self.entries.iter().any(|e| e.upper == upper)
    }

    /// Fold every upper-case initialism to its title-cased form
    ///
    /// Scans left to right; at each position the first initialism in
    /// declaration order that matches wins, and matches never overlap.
    /// `HTTP` is listed before `HTTPS` so `HTTPServer` folds to `HttpServer`.
    pub fn normalize(&self, name: &str) -> String {
        if self.entries.is_empty() {
            return name.to_string();
        }

        let mut out = String::with_capacity(name.len());
        let mut rest = name;
        'scan: while !rest.is_empty() {
            for entry in &self.entries {
                if let Some(tail) = rest.strip_prefix(entry.upper.as_str()) {
                    out.push_str(&entry.titled);
                    rest = tail;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
        out
    }

    /// Restore title-cased initialisms to upper case
    ///
    /// A title-cased initialism is restored only when followed by an
    /// upper-case ASCII letter, an underscore or the end of the string.
    pub fn restore(&self, name: &str) -> String {
        let mut result = name.to_string();
        for &idx in &self.by_length {
            let entry = &self.entries[idx];
            if entry.titled == entry.upper {
                continue;
            }
            loop {
                let Some(at) = find_restorable(&result, &entry.titled) else {
                    break;
                };
                result.replace_range(at..at + entry.titled.len(), &entry.upper);
            }
        }
        result
    }
}

impl Default for InitialismTable {
    fn default() -> Self {
        Self::common()
    }
}

/// First occurrence of `titled` followed by an upper-case letter, `_` or the end
fn find_restorable(haystack: &str, titled: &str) -> Option<usize> {
    haystack.match_indices(titled).map(|(at, _)| at).find(|&at| {
        match haystack[at + titled.len()..].chars().next() {
            None => true,
            Some(c) => c.is_ascii_uppercase() || c == '_',
        }
    })
}

/// Upper-case the first character of a word, leaving the rest untouched
pub(crate) fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
