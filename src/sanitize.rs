//! Output filename derivation

/// Drops the extension: everything from the last `.`, unless that dot
/// starts the name (`.hidden` keeps its name).
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(idx) => &filename[..idx],
    }
}

/// Whitespace as ECMAScript's `\s` defines it. Unlike `char::is_whitespace`
/// this counts U+FEFF and leaves out U+0085.
fn is_separator_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Turns a source filename into the base name shared by all its outputs.
///
/// The result only contains `[a-z0-9-]`, never has two hyphens in a row and
/// never starts or ends with one. Names without any ASCII alphanumerics come
/// back empty.
///
/// # Example
/// ```
/// use img_tiers::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Photo (1).JPG"), "my-photo-1");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    let lowered = strip_extension(filename).to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        if is_separator_space(c) || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        }
    }

    out
}
