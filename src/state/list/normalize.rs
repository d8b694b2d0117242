//! Search text normalization

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose, drop combining marks and trim.
///
/// "São Paulo" and "sao paulo" normalize to the same string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("São Paulo"), "sao paulo");
        assert_eq!(normalize("Ribeirão Preto"), "ribeirao preto");
        assert_eq!(normalize("Açaí"), "acai");
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  NELORE  "), "nelore");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Fazenda Água Limpa");
        assert_eq!(normalize(&once), once);
    }
}
