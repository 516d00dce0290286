//! Nesting-depth measurement for raw JSON text

/// Deepest array/object nesting in `text`, ignoring brackets inside strings.
///
/// Scanning stops as soon as `limit` is exceeded, returning `limit + 1`.
/// Malformed input is measured on a best-effort basis; the parser reports
/// the actual syntax error afterwards.
pub(crate) fn text_depth(text: &[u8], limit: usize) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in text {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > deepest {
                    deepest = depth;
                    if deepest > limit {
                        return deepest;
                    }
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
