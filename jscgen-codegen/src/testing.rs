//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

/// Punctuation that absorbs whitespace on both sides.
const TIGHT: &[char] = &['{', '}', '(', ')'];

/// Punctuation that absorbs whitespace in front of it only.
const TRAILING: &[char] = &[';', ','];

/// Reduce generated source to its textual shape.
///
/// Runs of whitespace collapse to a single space, the result is trimmed, and
/// spaces next to braces and parentheses or in front of `;` and `,` are
/// removed. A space between `)` and a following word is kept, so
/// `f() throws E` stays readable. Two sources that differ only in layout
/// normalize to the same string.
///
/// ```ignore
/// use jscgen_codegen::testing::normalize;
///
/// assert_eq!(
///     normalize("package p;\n\nclass A {\n  int x;\n}\n"),
///     "package p; class A{int x;}"
/// );
/// ```
pub fn normalize(source: &str) -> String {
    let collapsed = source.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = collapsed.chars().collect();

    let mut out = String::with_capacity(collapsed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let next_is_word = next.is_some_and(|n| n.is_alphanumeric() || n == '_');
            // `) throws` keeps its space; `) {` does not.
            let after_tight =
                prev.is_some_and(|p| TIGHT.contains(&p) && !(p == ')' && next_is_word));
            let before_punct = next.is_some_and(|n| TIGHT.contains(&n) || TRAILING.contains(&n));
            if after_tight || before_punct {
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a \n\t b  "), "a b");
    }

    #[test]
    fn test_trims_around_braces_and_parens() {
        assert_eq!(
            normalize("void f( int a ) {\n  go() ;\n}\n"),
            "void f(int a){go();}"
        );
    }

    #[test]
    fn test_keeps_space_after_separators() {
        assert_eq!(normalize("implements A , B"), "implements A, B");
        assert_eq!(normalize("package p; class A"), "package p; class A");
    }

    #[test]
    fn test_keeps_space_between_paren_and_word() {
        assert_eq!(
            normalize("Account(long id) throws X {\n}"),
            "Account(long id) throws X{}"
        );
        assert_eq!(normalize("f() {\n}"), "f(){}");
    }

    #[test]
    fn test_keeps_operators() {
        assert_eq!(normalize("Object name = null ;"), "Object name = null;");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(" \n "), "");
    }
}
