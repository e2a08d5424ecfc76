use crate::error::{Error, Result};

/// Removes all bracket-delimited comments from raw source text.
///
/// Comments are `[...]` spans and nest arbitrarily deeply; removal is by
/// character, so text inside a nested comment is dropped exactly once as
/// part of the outer span. Characters outside any comment pass through in
/// their original order.
///
/// A `]` with no open comment is a precondition violation and fails with
/// [`Error::UnbalancedCommentClose`]. A `[` that is never closed is *not*
/// an error: it silently swallows the rest of the input. That asymmetry is
/// a long-standing quirk of the format, kept as-is (see the crate docs).
pub fn strip_comments(source: &str) -> Result<String> {
    let mut filtered = String::with_capacity(source.len());
    let mut depth: usize = 0;

    for ch in source.chars() {
        match ch {
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return Err(Error::UnbalancedCommentClose);
                }
                depth -= 1;
            }
            _ => {
                if depth == 0 {
                    filtered.push(ch);
                }
            }
        }
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_comments_passthrough() {
        assert_eq!(strip_comments("(head 0)").unwrap(), "(head 0)");
    }

    #[test]
    fn test_simple_comment() {
        assert_eq!(strip_comments("a[comment]b").unwrap(), "ab");
    }

    #[test]
    fn test_nested_comment() {
        assert_eq!(strip_comments("a[b[c]d]e").unwrap(), "ae");
    }

    #[test]
    fn test_brackets_never_emitted() {
        let out = strip_comments("x [a[b]c] y [d] z").unwrap();
        assert!(!out.contains('['));
        assert!(!out.contains(']'));
        assert_eq!(out, "x  y  z");
    }

    #[test]
    fn test_close_before_open_is_precondition_violation() {
        assert_eq!(
            strip_comments("a]b").unwrap_err(),
            Error::UnbalancedCommentClose
        );
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        // Quirk: no error, the open comment eats everything after it.
        assert_eq!(strip_comments("ab[cd ef").unwrap(), "ab");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_comments("").unwrap(), "");
    }
}
