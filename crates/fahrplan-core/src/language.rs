//! Language label normalization.

/// Suffix some feeds append to mark formal address, e.g. `de-formal`.
const FORMAL_SUFFIX: &str = "-formal";

/// Historical long-form labels and their two-letter codes, applied in order.
const LONG_FORM_NAMES: &[(&str, &str)] = &[
    ("German", "de"),
    ("german", "de"),
    ("Deutsch", "de"),
    ("deutsch", "de"),
    ("English", "en"),
    ("english", "en"),
    ("Englisch", "en"),
    ("englisch", "en"),
];

/// Normalizes a free-text language label to its language code.
///
/// Strips the `-formal` marker and rewrites the long-form English and German
/// names. Anything else passes through unchanged.
pub fn language_code(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }
    LONG_FORM_NAMES
        .iter()
        .fold(label.replace(FORMAL_SUFFIX, ""), |code, (name, short)| {
            code.replace(name, short)
        })
}

/// Languages with a dedicated localized name in descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownLanguage {
    English,
    German,
    Portuguese,
}

impl KnownLanguage {
    /// Looks up a two-letter language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "de" => Some(Self::German),
            "pt" => Some(Self::Portuguese),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::Portuguese => "pt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_formal_suffix() {
        assert_eq!(language_code("German-formal"), "de");
        assert_eq!(language_code("de-formal"), "de");
    }

    #[test]
    fn test_maps_long_form_names() {
        for label in ["German", "german", "Deutsch", "deutsch"] {
            assert_eq!(language_code(label), "de", "label {label}");
        }
        for label in ["English", "english", "Englisch", "englisch"] {
            assert_eq!(language_code(label), "en", "label {label}");
        }
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        assert_eq!(language_code("Français"), "Français");
        assert_eq!(language_code("pt"), "pt");
    }

    #[test]
    fn test_empty_label_yields_empty_code() {
        assert_eq!(language_code(""), "");
    }

    #[test]
    fn test_known_language_lookup() {
        assert_eq!(KnownLanguage::from_code("pt"), Some(KnownLanguage::Portuguese));
        assert_eq!(KnownLanguage::from_code("fr"), None);
        assert_eq!(KnownLanguage::German.code(), "de");
    }
}
