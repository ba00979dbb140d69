/// Canonical form of a natural-key component: surrounding whitespace trimmed,
/// then upper-cased.
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Human-meaningful key used for duplicate detection, always held normalized.
///
/// Single-valued for names and titles, an ordered pair for first/last names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NaturalKey {
    Single(String),
    Pair(String, String),
}

impl NaturalKey {
    pub fn single(value: &str) -> Self {
        NaturalKey::Single(normalize(value))
    }

    pub fn pair(first: &str, second: &str) -> Self {
        NaturalKey::Pair(normalize(first), normalize(second))
    }
}

impl std::fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NaturalKey::Single(value) => write!(f, "{}", value),
            NaturalKey::Pair(first, second) => write!(f, "{} {}", first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_upper_cases() {
        assert_eq!(normalize("  Pika "), "PIKA");
        assert_eq!(normalize("\tfire\n"), "FIRE");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_single_keys_collide_after_normalization() {
        assert_eq!(NaturalKey::single("Pika "), NaturalKey::single("PIKA"));
        assert_ne!(NaturalKey::single("Pika"), NaturalKey::single("Pikachu"));
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_ne!(NaturalKey::single("Mr Mime"), NaturalKey::single("MrMime"));
    }

    #[test]
    fn test_pair_requires_both_components() {
        assert_eq!(
            NaturalKey::pair(" ash", "Ketchum "),
            NaturalKey::pair("ASH", "ketchum")
        );
        assert_ne!(
            NaturalKey::pair("Ash", "Ketchum"),
            NaturalKey::pair("Ash", "Lynx")
        );
        // Order matters
        assert_ne!(
            NaturalKey::pair("Ash", "Ketchum"),
            NaturalKey::pair("Ketchum", "Ash")
        );
    }

    #[test]
    fn test_unicode_case_folding() {
        assert_eq!(NaturalKey::single("straße"), NaturalKey::single("STRASSE"));
        assert_eq!(NaturalKey::single("éclair"), NaturalKey::single("ÉCLAIR"));
    }

    #[test]
    fn test_display() {
        assert_eq!(NaturalKey::pair("ash", "ketchum").to_string(), "ASH KETCHUM");
    }
}
