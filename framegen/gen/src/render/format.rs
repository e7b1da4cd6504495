//! Brace-depth re-indentation of generated Go source.
//!
//! Templates and schema clauses are written without indentation. This pass
//! indents every line with tabs by its bracket depth, the way `gofmt` lays out
//! blocks and composite literals. Brackets inside string, raw-string, and rune
//! literals or line comments do not count; lines inside a multi-line raw
//! string are left untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    Interpreted,
    Raw,
    Rune,
}

/// Re-indents Go source by bracket depth.
///
/// ## Examples
///
/// ```
/// use framegen_gen::render::reindent;
///
/// let code = "func f() {\nif ok {\nreturn\n}\n}\n";
/// assert_eq!(reindent(code), "func f() {\n\tif ok {\n\t\treturn\n\t}\n}\n");
/// ```
pub fn reindent(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 4);
    let mut depth: usize = 0;
    let mut state = Lexeme::Code;

    for line in source.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };

        if state == Lexeme::Raw {
            out.push_str(body);
            out.push_str(newline);
            let (delta, _, next) = scan(body, state);
            depth = apply(depth, delta);
            state = next;
            continue;
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            out.push_str(newline);
            continue;
        }

        let (delta, leading_closers, next) = scan(trimmed, state);
        let mut indent = depth.saturating_sub(leading_closers);
        if trimmed.starts_with("case ") || trimmed.starts_with("default:") {
            indent = indent.saturating_sub(1);
        }

        for _ in 0..indent {
            out.push('\t');
        }
        out.push_str(trimmed);
        out.push_str(newline);

        depth = apply(depth, delta);
        state = next;
    }

    out
}

fn apply(depth: usize, delta: isize) -> usize {
    if delta < 0 {
        depth.saturating_sub(delta.unsigned_abs())
    } else {
        depth + delta as usize
    }
}

/// Returns the net bracket delta of a line, the number of closing brackets
/// it starts with, and the lexer state at its end.
fn scan(line: &str, start: Lexeme) -> (isize, usize, Lexeme) {
    let mut state = start;
    let mut delta: isize = 0;
    let mut leading = 0;
    let mut counting_leading = start == Lexeme::Code;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Lexeme::Code => match c {
                '{' | '(' | '[' => {
                    delta += 1;
                    counting_leading = false;
                }
                '}' | ')' | ']' => {
                    delta -= 1;
                    if counting_leading {
                        leading += 1;
                    }
                }
                '"' => {
                    state = Lexeme::Interpreted;
                    counting_leading = false;
                }
                '`' => {
                    state = Lexeme::Raw;
                    counting_leading = false;
                }
                '\'' => {
                    state = Lexeme::Rune;
                    counting_leading = false;
                }
                '/' if chars.peek() == Some(&'/') => break,
                _ => counting_leading = false,
            },
            Lexeme::Interpreted | Lexeme::Rune => {
                let close = if state == Lexeme::Interpreted { '"' } else { '\'' };
                if c == '\\' {
                    chars.next();
                } else if c == close {
                    state = Lexeme::Code;
                }
            }
            Lexeme::Raw => {
                if c == '`' {
                    state = Lexeme::Code;
                }
            }
        }
    }

    // Interpreted strings and runes cannot span lines.
    if matches!(state, Lexeme::Interpreted | Lexeme::Rune) {
        state = Lexeme::Code;
    }

    (delta, leading, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_literal_closers_dedent() {
        let code = "x := T{\nA: map[string]int{\n\"a\": 1,\n},\n}\n";
        assert_eq!(
            reindent(code),
            "x := T{\n\tA: map[string]int{\n\t\t\"a\": 1,\n\t},\n}\n"
        );
    }

    #[test]
    fn brackets_in_strings_are_ignored() {
        let code = "f := func() {\nfmt.Println(\"{ not a block\")\n}\n";
        assert_eq!(
            reindent(code),
            "f := func() {\n\tfmt.Println(\"{ not a block\")\n}\n"
        );
    }

    #[test]
    fn struct_tags_do_not_confuse_depth() {
        let code = "type M struct {\nName types.String `tfsdk:\"name\"`\n}\n";
        assert_eq!(
            reindent(code),
            "type M struct {\n\tName types.String `tfsdk:\"name\"`\n}\n"
        );
    }

    #[test]
    fn switch_cases_sit_at_switch_depth() {
        let code = "switch v {\ncase 1:\nreturn\ndefault:\nreturn\n}\n";
        assert_eq!(
            reindent(code),
            "switch v {\ncase 1:\n\treturn\ndefault:\n\treturn\n}\n"
        );
    }

    #[test]
    fn double_closer_lines_return_to_outer_depth() {
        let code = "return f(x, map[string]int{\n\"a\": 1,\n})\n";
        assert_eq!(reindent(code), "return f(x, map[string]int{\n\t\t\"a\": 1,\n})\n");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let code = "func f() {\n\n   \nreturn\n}";
        assert_eq!(reindent(code), "func f() {\n\n\n\treturn\n}");
    }
}
