//! String helpers for composing printed expressions.

/// Reports whether every opening bracket of the given pair has a
/// matching, properly nested closing bracket in `s`.
///
/// Characters other than the two brackets are ignored, so this is a
/// query on the bracket structure only.
#[must_use]
pub fn parentheses_well_formed(s: &str, left_right: (char, char)) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        if c == left_right.0 {
            depth += 1;
        } else if c == left_right.1 {
            match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            }
        }
    }
    depth == 0
}

/// Strips one redundant outermost pair of brackets in place, when the
/// entire string is wrapped by a single well-formed pair.
///
/// Strings that merely start and end with brackets belonging to
/// different pairs, such as `(a)(b)`, are left untouched.
pub fn trim_parentheses(s: &mut String, left_right: (char, char)) {
    let (left, right) = left_right;
    if s.len() < left.len_utf8() + right.len_utf8()
        || !s.starts_with(left)
        || !s.ends_with(right)
    {
        return;
    }
    let inner = &s[left.len_utf8()..s.len() - right.len_utf8()];
    if parentheses_well_formed(inner, left_right) {
        *s = inner.to_string();
    }
}

/// Wraps `s` in one bracket pair, unless it already is a single
/// well-formed pair, so repeated wrapping stays idempotent.
pub(crate) fn enclose(s: &str, left_right: (char, char)) -> String {
    let (left, right) = left_right;
    if s.len() >= left.len_utf8() + right.len_utf8() && s.starts_with(left) && s.ends_with(right) {
        let inner = &s[left.len_utf8()..s.len() - right.len_utf8()];
        if parentheses_well_formed(inner, left_right) {
            return s.to_string();
        }
    }
    format!("{left}{s}{right}")
}
