/// Strips the outermost parenthesis layers that enclose the whole expression.
///
/// A layer is only removed when its `(` at index `i` is closed by the `)` at
/// index `len - 1 - i`. `(a) && (b)` starts and ends with brackets that belong
/// to different groups and is returned unchanged. Every bracket character is
/// counted, including those inside string literals.
pub fn trim_outer_brackets(expr: &str) -> String {
    trim_brackets(expr, false)
}

/// [`trim_outer_brackets`] for text whose string literals are Go-escaped:
/// brackets between double quotes are not counted.
pub fn trim_outer_brackets_quoted(expr: &str) -> String {
    trim_brackets(expr, true)
}

fn trim_brackets(expr: &str, skip_strings: bool) -> String {
    let bytes = expr.as_bytes();
    let len = bytes.len();

    let mut candidates = 0;
    while candidates < len / 2
        && bytes[candidates] == b'('
        && bytes[len - 1 - candidates] == b')'
    {
        candidates += 1;
    }
    if candidates == 0 {
        return expr.to_string();
    }

    let closers = matching_closers(bytes, candidates, skip_strings);
    let layers = closers
        .iter()
        .enumerate()
        .take_while(|&(index, closer)| *closer == Some(len - 1 - index))
        .count();

    expr[layers..len - layers].to_string()
}

/// Index of the `)` matching each of the first `count` characters, which are
/// all `(`.
fn matching_closers(bytes: &[u8], count: usize, skip_strings: bool) -> Vec<Option<usize>> {
    let mut closers = vec![None; count];
    let mut open = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (index, &byte) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' if skip_strings => in_string = true,
            b'(' => open.push(index),
            b')' => {
                if let Some(start) = open.pop()
                    && start < count
                {
                    closers[start] = Some(index);
                }
            }
            _ => {}
        }
    }

    closers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_mirrored_layers() {
        let cases = [
            ("(a && b)", "a && b"),
            ("((a && b))", "a && b"),
            ("(((a) && b))", "(a) && b"),
            (
                "((!a || a < 0) || ((a > b || a < 0) && (a > b || a < 0)))",
                "(!a || a < 0) || ((a > b || a < 0) && (a > b || a < 0))",
            ),
        ];
        for (expr, expected) in cases {
            assert_eq!(trim_outer_brackets(expr), expected, "{expr}");
        }
    }

    #[test]
    fn keeps_brackets_of_separate_groups() {
        assert_eq!(trim_outer_brackets("(a) && (b)"), "(a) && (b)");
        assert_eq!(
            trim_outer_brackets("((a || b) && (c || d))"),
            "(a || b) && (c || d)"
        );
        assert_eq!(
            trim_outer_brackets("(a || b) && (c || d)"),
            "(a || b) && (c || d)"
        );
    }

    #[test]
    fn leaves_plain_expressions_alone() {
        for expr in ["", "a", "a > b", "!a", "(", ")"] {
            assert_eq!(trim_outer_brackets(expr), expr);
        }
        assert_eq!(trim_outer_brackets("()"), "");
    }

    #[test]
    fn counts_brackets_inside_verbatim_strings() {
        // Verbatim literals may hold a lone quote or a trailing backslash
        assert_eq!(trim_outer_brackets("(x == \"a\\\" || y)"), "x == \"a\\\" || y");
        assert_eq!(trim_outer_brackets("(x == \"a\"b\" || y)"), "x == \"a\"b\" || y");
        assert_eq!(trim_outer_brackets("(a == \")\" || b)"), "(a == \")\" || b)");
    }

    #[test]
    fn quoted_variant_ignores_brackets_inside_string_literals() {
        assert_eq!(
            trim_outer_brackets_quoted("(a == \")\" || b)"),
            "a == \")\" || b"
        );
        assert_eq!(
            trim_outer_brackets_quoted("(a == \"(\") && (b)"),
            "(a == \"(\") && (b)"
        );
        assert_eq!(
            trim_outer_brackets_quoted("(a == \"\\\")\" || b)"),
            "a == \"\\\")\" || b"
        );
        assert_eq!(trim_outer_brackets_quoted("((a && b))"), "a && b");
    }

    #[test]
    fn unbalanced_input_is_not_trimmed() {
        assert_eq!(trim_outer_brackets("((a)"), "((a)");
        assert_eq!(trim_outer_brackets("(a))"), "(a))");
    }

    #[test]
    fn trimming_is_idempotent() {
        for expr in [
            "(a && b)",
            "((a && b))",
            "(((a) && b))",
            "(a) && (b)",
            "((a || b) && c)",
        ] {
            let once = trim_outer_brackets(expr);
            assert_eq!(trim_outer_brackets(&once), once, "{expr}");
        }
    }
}
