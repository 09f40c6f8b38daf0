// crates/markets-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII with `deunicode`, lowercases, and trims.
///
/// ```rust
/// use markets_core::text::fold_key;
///
/// assert_eq!(fold_key("Rodez"), "rodez");
/// assert_eq!(fold_key(" Saint-Étienne "), "saint-etienne");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}
