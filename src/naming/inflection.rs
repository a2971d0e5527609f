//! Natural-language inflection for table names

use once_cell::sync::Lazy;
use regex::Regex;

/// Singular/plural conversion used when deriving table names
///
/// Column names are never passed through an inflector.
pub trait Inflector: Send + Sync {
    fn singular(&self, word: &str) -> String;
    fn plural(&self, word: &str) -> String;
}

/// An inflector that returns words unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInflector;

impl Inflector for NoopInflector {
    fn singular(&self, word: &str) -> String {
        word.to_string()
    }

    fn plural(&self, word: &str) -> String {
        word.to_string()
    }
}

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

// Highest priority first
static PLURAL_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    compile(&[
        (r"(?i)(quiz)$", "${1}zes"),
        (r"(?i)^(oxen)$", "${1}"),
        (r"(?i)^(ox)$", "${1}en"),
        (r"(?i)^(m|l)ice$", "${1}ice"),
        (r"(?i)^(m|l)ouse$", "${1}ice"),
        (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(?i)(x|ch|ss|sh)$", "${1}es"),
        (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
        (r"(?i)(hive)$", "${1}s"),
        (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        (r"(?i)sis$", "ses"),
        (r"(?i)([ti])a$", "${1}a"),
        (r"(?i)([ti])um$", "${1}a"),
        (r"(?i)(buffal|tomat)o$", "${1}oes"),
        (r"(?i)(bu)s$", "${1}ses"),
        (r"(?i)(alias|status|campus)$", "${1}es"),
        (r"(?i)(octop|vir)i$", "${1}i"),
        (r"(?i)(octop|vir)us$", "${1}i"),
        (r"(?i)^(ax|test)is$", "${1}es"),
        (r"(?i)s$", "s"),
        (r"$", "s"),
    ])
});

static SINGULAR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    compile(&[
        (r"(?i)(database)s$", "${1}"),
        (r"(?i)(quiz)zes$", "${1}"),
        (r"(?i)(matr)ices$", "${1}ix"),
        (r"(?i)(vert|ind)ices$", "${1}ex"),
        (r"(?i)^(ox)en", "${1}"),
        (r"(?i)(alias|status)(es)?$", "${1}"),
        (r"(?i)(octop|vir)(us|i)$", "${1}us"),
        (r"(?i)^(a)x[ie]s$", "${1}xis"),
        (r"(?i)(cris|test)(is|es)$", "${1}is"),
        (r"(?i)(shoe)s$", "${1}"),
        (r"(?i)(o)es$", "${1}"),
        (r"(?i)(bus)(es)?$", "${1}"),
        (r"(?i)^(m|l)ice$", "${1}ouse"),
        (r"(?i)(x|ch|ss|sh)es$", "${1}"),
        (r"(?i)(m)ovies$", "${1}ovie"),
        (r"(?i)(s)eries$", "${1}eries"),
        (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        (r"(?i)([lr])ves$", "${1}f"),
        (r"(?i)(tive)s$", "${1}"),
        (r"(?i)(hive)s$", "${1}"),
        (r"(?i)([^f])ves$", "${1}fe"),
        (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
        (
            r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
            "${1}sis",
        ),
        (r"(?i)([ti])a$", "${1}um"),
        (r"(?i)(n)ews$", "${1}ews"),
        (r"(?i)(ss)$", "${1}"),
        (r"(?i)s$", ""),
    ])
});

/// Rule-based English inflection
///
/// Only the last `_`-separated word of an identifier is inflected, so
/// `user_account` pluralizes to `user_accounts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    fn inflect(
        word: &str,
        rules: &[(Regex, &'static str)],
        irregular: impl Fn(&str) -> Option<String>,
    ) -> String {
        let (head, last) = match word.rfind('_') {
            Some(at) => word.split_at(at + 1),
            None => ("", word),
        };
        if last.is_empty() {
            return word.to_string();
        }

        let lower = last.to_lowercase();
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }

        if let Some(replaced) = irregular(last) {
            return format!("{}{}", head, replaced);
        }

        for (rule, replacement) in rules {
            if rule.is_match(last) {
                return format!("{}{}", head, rule.replace(last, *replacement));
            }
        }
        word.to_string()
    }

    /// Irregular forms match as word endings, so `woman` pluralizes
    /// through `man`. A word that already is the target form is kept.
    fn irregular(last: &str, to_plural: bool) -> Option<String> {
        let lower = last.to_lowercase();
        let target = |pair: &(&'static str, &'static str)| if to_plural { pair.1 } else { pair.0 };
        if IRREGULAR.iter().any(|pair| target(pair) == lower) {
            return Some(last.to_string());
        }

        IRREGULAR.iter().find_map(|pair| {
            let (from, to) = if to_plural { (pair.0, pair.1) } else { (pair.1, pair.0) };
            replace_ending(last, from, to)
        })
    }
}

impl Inflector for EnglishInflector {
    fn singular(&self, word: &str) -> String {
        Self::inflect(word, &SINGULAR_RULES, |last| Self::irregular(last, false))
    }

    fn plural(&self, word: &str) -> String {
        Self::inflect(word, &PLURAL_RULES, |last| Self::irregular(last, true))
    }
}

/// Replace a case-insensitive `from` ending of `word` with `to`
fn replace_ending(word: &str, from: &str, to: &str) -> Option<String> {
    let at = word.len().checked_sub(from.len())?;
    if !word.is_char_boundary(at) {
        return None;
    }
    let (stem, ending) = word.split_at(at);
    if !ending.eq_ignore_ascii_case(from) {
        return None;
    }
    Some(format!("{}{}", stem, match_case(ending, to)))
}

/// Carry the case of `original` over to `replacement`
///
/// All-caps stays all-caps, a leading capital stays a leading capital.
fn match_case(original: &str, replacement: &str) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic());
    let first_upper = letters.next().map(|c| c.is_uppercase()).unwrap_or(false);
    let mut rest = letters.peekable();
    if first_upper && rest.peek().is_some() && rest.all(|c| c.is_uppercase()) {
        replacement.to_uppercase()
    } else if first_upper {
        super::initialisms::title_case_word(replacement)
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_regular() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.plural("user"), "users");
        assert_eq!(inflector.plural("category"), "categories");
        assert_eq!(inflector.plural("box"), "boxes");
        assert_eq!(inflector.plural("address"), "addresses");
        assert_eq!(inflector.plural("knife"), "knives");
        assert_eq!(inflector.plural("status"), "statuses");
        assert_eq!(inflector.plural("matrix"), "matrices");
    }

    #[test]
    fn test_singular_regular() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.singular("users"), "user");
        assert_eq!(inflector.singular("categories"), "category");
        assert_eq!(inflector.singular("addresses"), "address");
        assert_eq!(inflector.singular("knives"), "knife");
        assert_eq!(inflector.singular("statuses"), "status");
        assert_eq!(inflector.singular("status"), "status");
        assert_eq!(inflector.singular("databases"), "database");
    }

    #[test]
    fn test_irregular_and_uncountable() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.plural("person"), "people");
        assert_eq!(inflector.plural("Person"), "People");
        assert_eq!(inflector.singular("children"), "child");
        assert_eq!(inflector.plural("sheep"), "sheep");
        assert_eq!(inflector.singular("information"), "information");
        assert_eq!(inflector.plural("people"), "people");
    }

    #[test]
    fn test_irregular_word_endings() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.plural("woman"), "women");
        assert_eq!(inflector.plural("Woman"), "Women");
        assert_eq!(inflector.plural("salesperson"), "salespeople");
        assert_eq!(inflector.plural("SalesPerson"), "SalesPeople");
        assert_eq!(inflector.plural("grandchild"), "grandchildren");
        assert_eq!(inflector.plural("CHILD"), "CHILDREN");
        assert_eq!(inflector.singular("salespeople"), "salesperson");
        assert_eq!(inflector.singular("women"), "woman");
        assert_eq!(inflector.singular("store_salespeople"), "store_salesperson");
    }

    #[test]
    fn test_only_last_word_inflected() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.plural("user_account"), "user_accounts");
        assert_eq!(inflector.singular("order_items"), "order_item");
        assert_eq!(inflector.plural("trailing_"), "trailing_");
    }
}
