// File name sanitization
// Character-class cleanup for names written into reports and archives

use std::sync::LazyLock;

use regex::Regex;

// Each sanitizer owns its character class. The classes overlap but differ in
// both membership and semantics (deletion vs. substitution), and callers
// depend on the exact per-function output, so they stay independent.
static PATH_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-./]").unwrap());
static NAME_SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());
static NAME_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-.]").unwrap());

/// Deletes every character outside `[a-zA-Z0-9-./]`.
///
/// Lossy: dropped characters are not escaped, so distinct inputs can collide
/// (`"a b"` and `"ab"` sanitize identically).
pub fn sanitize_file_path(path: &str) -> String {
    PATH_DISALLOWED.replace_all(path, "").into_owned()
}

/// Pass-through placeholder for special character handling in paths.
pub fn handle_special_characters(path: &str) -> String {
    path.to_string()
}

/// Replaces each occurrence of `\ / : * ? " < > |` with one underscore.
pub fn escape_special_characters(file_name: &str) -> String {
    NAME_SPECIAL.replace_all(file_name, "_").into_owned()
}

/// Deletes every character outside `[a-zA-Z0-9-.]`.
///
/// Stricter than [`sanitize_file_path`]: slashes are dropped too, so the
/// result is always a single name component.
pub fn generate_safe_file_name(file_name: &str) -> String {
    NAME_DISALLOWED.replace_all(file_name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_path_deletes_disallowed() {
        assert_eq!(sanitize_file_path("a b!c.txt"), "ab.txt");
        assert_eq!(sanitize_file_path("src/Main.java"), "src/Main.java");
        assert_eq!(sanitize_file_path("über:datei.txt"), "berdatei.txt");
    }

    #[test]
    fn test_sanitize_file_path_collisions_are_accepted() {
        assert_eq!(sanitize_file_path("a b"), sanitize_file_path("ab"));
    }

    #[test]
    fn test_handle_special_characters_is_identity() {
        for input in ["", "plain.txt", "a b:c*d", "πλάγιο/копия.java"] {
            assert_eq!(handle_special_characters(input), input);
        }
    }

    #[test]
    fn test_escape_special_characters_underscores_each() {
        assert_eq!(escape_special_characters("a:b*c"), "a_b_c");
        assert_eq!(escape_special_characters(r#"a\b/c:d*e?f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
        // runs are not collapsed
        assert_eq!(escape_special_characters("a::b"), "a__b");
        assert_eq!(escape_special_characters("clean-name.txt"), "clean-name.txt");
    }

    #[test]
    fn test_generate_safe_file_name_drops_slashes() {
        assert_eq!(generate_safe_file_name("a/b c.txt"), "abc.txt");
        assert_eq!(generate_safe_file_name("report-v1.2.json"), "report-v1.2.json");
        assert_eq!(generate_safe_file_name("dir\\name?.txt"), "dirname.txt");
    }
}
