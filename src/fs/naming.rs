//! Filename sanitization.

/// Maximum length of a sanitized name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Placeholder used when nothing usable survives sanitization.
pub const UNTITLED: &str = "untitled";

/// Turn an arbitrary title or username into a single safe path component.
///
/// Strips `< > : " / \ | ? *`, square brackets and control characters,
/// trims surrounding whitespace and caps the result at 100 characters.
/// Never returns an empty string, `.` or `..`.
pub fn sanitize_filename(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|&c| {
            !matches!(
                c,
                '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '[' | ']'
            ) && !c.is_control()
        })
        .collect();

    let truncated: String = stripped.trim().chars().take(MAX_NAME_LENGTH).collect();
    let sanitized = truncated.trim_end();

    match sanitized {
        "" | "." | ".." => UNTITLED.to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '[', ']'];

    #[test]
    fn test_sanitize_strips_brackets_and_reserved() {
        assert_eq!(
            sanitize_filename("[Hyprland] Catppuccin: my \"first\" rice?"),
            "Hyprland Catppuccin my first rice"
        );
        assert_eq!(sanitize_filename("a/b\\c|d*e<f>g"), "abcdefg");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_filename("   spaced out   "), "spaced out");
    }

    #[test]
    fn test_sanitize_empty_becomes_untitled() {
        assert_eq!(sanitize_filename(""), UNTITLED);
        assert_eq!(sanitize_filename("   "), UNTITLED);
        assert_eq!(sanitize_filename("[]<>?*"), UNTITLED);
        assert_eq!(sanitize_filename(".."), UNTITLED);
        assert_eq!(sanitize_filename("../"), UNTITLED);
    }

    #[test]
    fn test_sanitize_truncates_to_limit() {
        let long = "x".repeat(250);
        assert_eq!(sanitize_filename(&long).chars().count(), MAX_NAME_LENGTH);

        let unicode = "é".repeat(150);
        assert_eq!(sanitize_filename(&unicode).chars().count(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_sanitize_truncation_does_not_leave_trailing_space() {
        let name = format!("{} tail", "a".repeat(99));
        let sanitized = sanitize_filename(&name);
        assert_eq!(sanitized, "a".repeat(99));
        assert_eq!(sanitize_filename(&sanitized), sanitized);
    }

    #[test]
    fn test_sanitize_properties() {
        let long_title = "long [title] ".repeat(20);
        let inputs = [
            "normal title",
            "[i3] gruvbox | dual monitors",
            "   ",
            "::::",
            "a\0b\nc",
            "日本語のタイトル [KDE]",
            long_title.as_str(),
        ];

        for input in inputs {
            let once = sanitize_filename(input);
            assert!(!once.is_empty(), "empty for {:?}", input);
            assert!(once.chars().count() <= MAX_NAME_LENGTH);
            assert!(!once.contains(FORBIDDEN), "forbidden char in {:?}", once);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {:?}", input);
        }
    }
}
