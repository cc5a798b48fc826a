use crate::{
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::eval,
        parser::core::parse,
        value::core::Value,
    },
};

/// The fixed indentation unit that marks block membership.
pub const INDENT_UNIT: &str = "    ";

/// The outcome of one processed script line.
///
/// `line` is the 1-based position of the line within the slice that was
/// processed; for a loop body re-run each iteration it is relative to the
/// dedented body, not the enclosing script.
#[derive(Debug)]
pub struct Record {
    /// 1-based line number within the processed slice.
    pub line:    usize,
    /// The evaluated value, or the error the line produced.
    pub outcome: Result<Value, Error>,
}

/// Processes a script, line by line, against a single shared environment.
///
/// Per line, in order of precedence:
/// - blank lines and `#` comments are skipped without a record,
/// - `if <cond>` and `while <cond>` headers introduce a block of
///   immediately following lines indented by one [`INDENT_UNIT`],
/// - a top-level `=` outside any comparison makes the line an assignment,
///   which mutates the environment and produces a record only on failure,
/// - anything else is an expression whose value (or error) is recorded.
///
/// An error never aborts the run; the failing line gets an error record
/// and processing continues. A failed assignment leaves the environment
/// untouched.
///
/// Loops share this one environment across iterations, so a counter
/// mutated in the body is visible to the next condition check.
pub fn process_lines(lines: &[&str], env: &mut Environment) -> Vec<Record> {
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let number = i + 1;
        let trimmed = lines[i].trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            i += 1;
            continue;
        }

        if let Some(condition) = trimmed.strip_prefix("if ") {
            i += process_if(lines, i, trimmed, condition, env, &mut records);
            continue;
        }

        if let Some(condition) = trimmed.strip_prefix("while ") {
            i += process_while(lines, i, trimmed, condition, env, &mut records);
            continue;
        }

        if let Some((name, rhs)) = split_assignment(trimmed) {
            if let Err(error) = evaluate(rhs, env).map(|value| env.set(name, value)) {
                records.push(Record { line:    number,
                                      outcome: Err(Error::Equation { line:   trimmed.to_string(),
                                                                     source: Box::new(error), }), });
            }
            i += 1;
            continue;
        }

        records.push(Record { line:    number,
                              outcome: evaluate(trimmed, env), });
        i += 1;
    }

    records
}

/// Handles an `if` header at `lines[at]`. Returns how many lines were
/// consumed (header plus any skipped block).
///
/// A truthy condition consumes only the header, letting the block lines
/// fall through to normal processing; a falsy condition or a condition
/// error skips the whole block.
fn process_if(lines: &[&str],
              at: usize,
              header: &str,
              condition: &str,
              env: &Environment,
              records: &mut Vec<Record>)
              -> usize {
    let block = block_len(lines, at);
    if block == 0 {
        records.push(Record { line:    at + 1,
                              outcome: Err(Error::Parse(ParseError::MissingBlock { header: header.to_string(), })), });
        return 1;
    }

    match evaluate(condition, env) {
        Ok(value) if value.is_truthy() => 1,
        Ok(_) => 1 + block,
        Err(error) => {
            records.push(Record { line:    at + 1,
                                  outcome: Err(error), });
            1 + block
        },
    }
}

/// Handles a `while` header at `lines[at]`. Returns how many lines were
/// consumed (header plus body).
///
/// The condition is re-evaluated before every iteration against the same
/// environment the body mutates. Body records are numbered relative to
/// the dedented body.
fn process_while(lines: &[&str],
                 at: usize,
                 header: &str,
                 condition: &str,
                 env: &mut Environment,
                 records: &mut Vec<Record>)
                 -> usize {
    let block = block_len(lines, at);
    if block == 0 {
        records.push(Record { line:    at + 1,
                              outcome: Err(Error::Parse(ParseError::MissingBlock { header: header.to_string(), })), });
        return 1;
    }

    let body: Vec<&str> = lines[at + 1..=at + block].iter()
                                                    .map(|line| line.strip_prefix(INDENT_UNIT).unwrap_or(line))
                                                    .collect();

    loop {
        match evaluate(condition, env) {
            Ok(value) if value.is_truthy() => records.extend(process_lines(&body, env)),
            Ok(_) => break,
            Err(error) => {
                records.push(Record { line:    at + 1,
                                      outcome: Err(error), });
                break;
            },
        }
    }

    1 + block
}

/// Counts the lines immediately following `lines[at]` that belong to its
/// block, i.e. start with one [`INDENT_UNIT`].
fn block_len(lines: &[&str], at: usize) -> usize {
    lines[at + 1..].iter()
                   .take_while(|line| line.starts_with(INDENT_UNIT))
                   .count()
}

/// Parses and evaluates one expression against the environment.
fn evaluate(source: &str, env: &Environment) -> Result<Value, Error> {
    let expr = parse(source)?;
    Ok(eval(&expr, env)?)
}

/// Splits a line into an assignment target and right-hand side, if it is
/// an assignment.
///
/// The split happens at the first `=` that is not part of a comparison
/// operator (`==`, `<=`, `>=`, `!=`), and only when the left-hand side is
/// a plain identifier. Lines like `x == 1` or `2 = 3` are not assignments
/// and fall through to expression handling, where the latter fails with a
/// proper parse error.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'=' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'=') {
            i += 2;
            continue;
        }
        if i > 0 && matches!(bytes[i - 1], b'=' | b'<' | b'>' | b'!') {
            i += 1;
            continue;
        }

        let name = line[..i].trim();
        let rhs = line[i + 1..].trim();
        if is_identifier(name) {
            return Some((name, rhs));
        }
        return None;
    }

    None
}

/// Tests whether `name` is a valid variable name: a letter or underscore
/// followed by letters, digits or underscores.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_assignment_splits() {
        assert_eq!(split_assignment("x = 5"), Some(("x", "5")));
        assert_eq!(split_assignment("total=a+b"), Some(("total", "a+b")));
    }

    #[test]
    fn comparisons_are_not_assignments() {
        assert_eq!(split_assignment("x == 1"), None);
        assert_eq!(split_assignment("x <= 1"), None);
        assert_eq!(split_assignment("x >= 1"), None);
        assert_eq!(split_assignment("x != 1"), None);
    }

    #[test]
    fn assignment_with_comparison_on_rhs_splits() {
        assert_eq!(split_assignment("y = x == 1"), Some(("y", "x == 1")));
        assert_eq!(split_assignment("y = x < 2"), Some(("y", "x < 2")));
    }

    #[test]
    fn invalid_targets_are_rejected() {
        assert_eq!(split_assignment("2 = 3"), None);
        assert_eq!(split_assignment("x + 1 = 2"), None);
        assert_eq!(split_assignment("= 5"), None);
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("value2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a b"));
    }
}
