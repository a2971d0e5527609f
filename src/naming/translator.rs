//! Name translation between schema names and storage identifiers

use std::borrow::Cow;

use sha1::{Digest, Sha1};

use super::config::NamingStrategy;
use super::error::{NameField, NamingError, NamingResult};
use super::inflection::{EnglishInflector, Inflector};
use super::initialisms::InitialismTable;

/// Maximum length in bytes of index and constraint names
pub const COMPOSITE_NAME_MAX_LENGTH: usize = 64;

/// Bytes kept from an over-long composite name before the hash suffix
const COMPOSITE_KEEP_LENGTH: usize = 56;

/// Hex characters of the SHA-1 digest appended after truncation
const HASH_SUFFIX_LENGTH: usize = COMPOSITE_NAME_MAX_LENGTH - COMPOSITE_KEEP_LENGTH;

/// Converts declared names to storage identifiers and back
///
/// A translator only borrows its configuration; it is cheap to build and
/// holds no state of its own.
///
/// # Example
///
/// ```rust
/// use schema_toolkit_sdk::naming::{IdentifierTranslator, InitialismTable, NamingStrategy};
///
/// let strategy = NamingStrategy::default();
/// let translator = IdentifierTranslator::new(&strategy, InitialismTable::shared());
///
/// assert_eq!(translator.storage_name("HTTPServer"), "http_server");
/// assert_eq!(translator.table_name("UserAccount"), "user_accounts");
/// assert_eq!(translator.schema_name("user_accounts"), "UserAccount");
/// ```
#[derive(Clone, Copy)]
pub struct IdentifierTranslator<'a> {
    strategy: &'a NamingStrategy,
    initialisms: &'a InitialismTable,
    inflector: &'a dyn Inflector,
}

impl<'a> IdentifierTranslator<'a> {
    /// Create a translator using English inflection
    pub fn new(strategy: &'a NamingStrategy, initialisms: &'a InitialismTable) -> Self {
        Self {
            strategy,
            initialisms,
            inflector: &EnglishInflector,
        }
    }

    /// Replace the inflector used for table names
    pub fn with_inflector(mut self, inflector: &'a dyn Inflector) -> Self {
        self.inflector = inflector;
        self
    }

    pub fn strategy(&self) -> &NamingStrategy {
        self.strategy
    }

    /// Derive a schema (PascalCase) name from a storage table name
    ///
    /// Not guaranteed to be the inverse of [`IdentifierTranslator::table_name`].
    pub fn schema_name(&self, table: &str) -> String {
        let table = table
            .strip_prefix(self.strategy.table_prefix.as_str())
            .unwrap_or(table);

        if self.strategy.singular_table {
            self.to_schema_name(table)
        } else {
            self.to_schema_name(&self.inflector.singular(table))
        }
    }

    /// Convert a declared name to its storage (snake_case) form
    pub fn storage_name(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        let mut name = Cow::Borrowed(name);
        if let Some(replacer) = &self.strategy.name_replacer {
            let replaced = replacer.replace(&name);
            if replaced.is_empty() {
                tracing::trace!(name = %name, "Name replacer returned empty result, using name verbatim");
            } else {
                name = Cow::Owned(replaced);
            }
        }

        // Declared casing is kept verbatim, acronyms included
        if self.strategy.preserve_case {
            return insert_word_boundaries(&name);
        }

        let folded = self.initialisms.normalize(&name);
        insert_word_boundaries(&folded).to_lowercase()
    }

    /// Storage name for a table, prefixed and pluralized as configured
    pub fn table_name(&self, name: &str) -> String {
        let base = self.storage_name(name);
        if self.strategy.singular_table {
            format!("{}{}", self.strategy.table_prefix, base)
        } else {
            format!(
                "{}{}",
                self.strategy.table_prefix,
                self.inflector.plural(&base)
            )
        }
    }

    /// Storage name for a column; column names are never inflected
    pub fn column_name(&self, _table: &str, column: &str) -> String {
        format!("{}{}", self.strategy.column_prefix, self.storage_name(column))
    }

    /// Storage name for a join table
    ///
    /// Names already in lower case are only prefixed.
    pub fn join_table_name(&self, name: &str) -> String {
        if !self.strategy.preserve_case && name.to_lowercase() == name {
            return format!("{}{}", self.strategy.table_prefix, name);
        }
        self.table_name(name)
    }

    /// Name of a check constraint on `table.column`
    pub fn checker_name(&self, table: &str, column: &str) -> String {
        self.composite_name("chk", table, column)
    }

    /// Name of a plain index on `table.column`
    pub fn index_name(&self, table: &str, column: &str) -> String {
        self.composite_name("idx", table, &self.storage_name(column))
    }

    /// Name of a unique index on `table.column`
    pub fn unique_index_name(&self, table: &str, column: &str) -> String {
        self.composite_name("uidx", table, &self.storage_name(column))
    }

    /// Join `prefix`, `table` and `column` into a bounded identifier
    ///
    /// Dots become underscores. Results longer than
    /// [`COMPOSITE_NAME_MAX_LENGTH`] bytes keep their first 56 bytes and
    /// gain the first 8 hex characters of the SHA-1 digest of the full
    /// name, so the output is deterministic and never exceeds the limit.
    pub fn composite_name(&self, prefix: &str, table: &str, column: &str) -> String {
        let joined = [prefix, table, column].join("_").replace('.', "_");
        if joined.len() <= COMPOSITE_NAME_MAX_LENGTH {
            return joined;
        }

        let digest = format!("{:x}", Sha1::digest(joined.as_bytes()));
        let mut keep = COMPOSITE_KEEP_LENGTH;
        while !joined.is_char_boundary(keep) {
            keep -= 1;
        }

        let truncated = format!("{}{}", &joined[..keep], &digest[..HASH_SUFFIX_LENGTH]);
        tracing::debug!(
            original_len = joined.len(),
            name = %truncated,
            "Truncated composite name with hash suffix"
        );
        truncated
    }

    /// Configured maximum length for `field`
    pub fn max_length(&self, field: NameField) -> usize {
        match field {
            NameField::Schema => self.strategy.schema_name_length,
            NameField::Table => self.strategy.table_name_length,
            NameField::Column => self.strategy.column_name_length,
        }
    }

    /// Check a derived identifier against its configured length limit
    pub fn check_length(&self, field: NameField, name: &str) -> NamingResult<()> {
        if name.is_empty() {
            return Err(NamingError::Empty(field));
        }

        let max = self.max_length(field);
        if name.len() > max {
            return Err(NamingError::TooLong {
                field,
                name: name.to_string(),
                max,
                actual: name.len(),
            });
        }

        Ok(())
    }

    fn to_schema_name(&self, name: &str) -> String {
        let titled = title_case_words(&name.replace('_', " ")).replace(' ', "");
        self.initialisms.restore(&titled)
    }
}

impl std::fmt::Debug for IdentifierTranslator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentifierTranslator")
            .field("strategy", self.strategy)
            .field("initialisms", &self.initialisms.len())
            .finish()
    }
}

/// Upper-case the first letter of every word
///
/// ASCII letters, digits and `_` continue a word; other ASCII characters
/// and Unicode whitespace separate words.
fn title_case_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Insert `_` where a lower-case run turns into an upper-case word
///
/// Runs of capitals stay together and break one position before the
/// following lower-case letter (`ABCDef` -> `ABC_Def`). Existing
/// underscores are never doubled. Letter case is left untouched.
fn insert_word_boundaries(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let Some((&tail, body)) = chars.split_last() else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len() + 8);
    let mut last_upper = false;
    let mut cur_upper = chars[0].is_ascii_uppercase();

    for (i, &c) in body.iter().enumerate() {
        let next = chars[i + 1];
        let next_upper = next.is_ascii_uppercase();
        let next_digit = next.is_ascii_digit();

        if cur_upper {
            let inside_run = last_upper && (next_upper || next_digit);
            if !inside_run && i > 0 && chars[i - 1] != '_' && next != '_' {
                out.push('_');
            }
        }
        out.push(c);

        last_upper = cur_upper;
        cur_upper = next_upper;
    }

    let n = chars.len();
    if cur_upper && !last_upper && n > 1 && chars[n - 2] != '_' {
        out.push('_');
    }
    out.push(tail);
    out
}
