// src/domain/slug/rules.rs

/// Characters a slug may contain after normalisation.
pub fn is_slug_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// Whitespace recognised when trimming and collapsing separators.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF: the set browsers
/// use for `trim` and `\s`. NEL is dropped like any other non-word character.
pub fn is_separator_space(ch: char) -> bool {
    ch != '\u{85}' && (ch.is_whitespace() || ch == '\u{feff}')
}

/// Convert a title into a URL-safe slug.
///
/// The input is trimmed and lowercased, each run of whitespace becomes a
/// single `-`, everything outside `[a-z0-9_-]` is dropped and finally any
/// leading or trailing `-` is stripped. Never fails; the result may be empty.
///
/// ```
/// assert_eq!(site_slug::slugify("Hello, World!"), "hello-world");
/// assert_eq!(site_slug::slugify("   "), "");
/// ```
pub fn slugify(title: &str) -> String {
    let trimmed = title.trim_matches(is_separator_space);
    let mut slug = String::with_capacity(trimmed.len());
    let mut in_space = false;

    for ch in trimmed.chars() {
        if is_separator_space(ch) {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        // Lowercasing can expand one char into several (e.g. 'İ').
        slug.extend(ch.to_lowercase().filter(|c| is_slug_char(*c)));
    }

    slug.trim_matches('-').to_owned()
}
