//! Argument-list splitting.

use directives_core::{ParsedArgument, Span, SplitError, Splitter};

use crate::cursor::{Cursor, is_ident_continue, is_ident_start};

/// Default [`Splitter`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentSplitter;

impl ArgumentSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for ArgumentSplitter {
    fn split(&self, source: &str) -> Result<Vec<ParsedArgument>, SplitError> {
        split(source)
    }
}

/// Split an argument list at its top-level commas.
///
/// Values are whitespace-trimmed. A single trailing comma is accepted;
/// any other empty argument is an error, as is a positional argument
/// that follows a named one.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn split(source: &str) -> Result<Vec<ParsedArgument>, SplitError> {
    let mut cursor = Cursor::new(source);
    let mut args = Vec::new();
    let mut seen_named = false;

    loop {
        cursor.eat_while(char::is_whitespace);
        if cursor.is_eof() {
            break;
        }

        let span = here(&cursor, 1);
        let start = cursor.offset();
        scan_argument(&mut cursor)?;
        let text = cursor.slice_from(start).trim();

        if text.is_empty() {
            return Err(SplitError::EmptyArgument { span });
        }

        let arg = classify(text).ok_or(SplitError::EmptyArgument { span })?;
        if arg.is_named() {
            seen_named = true;
        } else if seen_named {
            return Err(SplitError::PositionalAfterNamed { span });
        }
        args.push(arg);

        if !cursor.eat(',') {
            break;
        }
    }

    Ok(args)
}

/// Byte offset just past the bracket that closes the one `source` starts with.
///
/// Quoted strings and nested brackets inside the group are skipped, so the
/// host can find where a directive's argument list ends. Returns `0` when
/// `source` does not start with an opening bracket.
pub fn matching_close(source: &str) -> Result<usize, SplitError> {
    let mut cursor = Cursor::new(source);
    let mut stack = Vec::new();

    if !cursor.check(|ch| closing_for(ch).is_some()) {
        return Ok(0);
    }

    loop {
        step(&mut cursor, &mut stack)?;
        if stack.is_empty() {
            return Ok(cursor.offset() as usize);
        }
        if cursor.is_eof() {
            return Err(unclosed(&stack));
        }
    }
}

/// Consume one argument, stopping before a top-level comma or at EOF.
fn scan_argument(cursor: &mut Cursor<'_>) -> Result<(), SplitError> {
    let mut stack = Vec::new();

    while let Some(ch) = cursor.peek() {
        if ch == ',' && stack.is_empty() {
            break;
        }
        step(cursor, &mut stack)?;
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(unclosed(&stack))
    }
}

/// Consume one unit: a whole quoted string, a bracket, or a plain character.
fn step(cursor: &mut Cursor<'_>, stack: &mut Vec<(char, Span)>) -> Result<(), SplitError> {
    let Some(ch) = cursor.peek() else {
        return Ok(());
    };

    match ch {
        '\'' | '"' => scan_string(cursor, ch),
        '(' | '[' | '{' => {
            stack.push((ch, here(cursor, 1)));
            cursor.advance();
            Ok(())
        }
        ')' | ']' | '}' => {
            let span = here(cursor, 1);
            match stack.pop() {
                Some((open, _)) if closing_for(open) == Some(ch) => {
                    cursor.advance();
                    Ok(())
                }
                Some((open, _)) => Err(SplitError::MismatchedBracket {
                    found: ch,
                    expected: closing_for(open).unwrap_or(ch),
                    span,
                }),
                None => Err(SplitError::UnexpectedClose { found: ch, span }),
            }
        }
        _ => {
            cursor.advance();
            Ok(())
        }
    }
}

fn scan_string(cursor: &mut Cursor<'_>, quote: char) -> Result<(), SplitError> {
    let span = here(cursor, 1);
    cursor.advance();

    while let Some(ch) = cursor.advance() {
        if ch == '\\' {
            cursor.advance();
        } else if ch == quote {
            return Ok(());
        }
    }

    Err(SplitError::UnterminatedString { span })
}

/// Build a [`ParsedArgument`] from trimmed argument text.
///
/// Returns `None` for `name =>` with nothing after the arrow.
fn classify(text: &str) -> Option<ParsedArgument> {
    let mut cursor = Cursor::new(text);

    if cursor.check(is_ident_start) {
        let name = cursor.eat_while(is_ident_continue);
        cursor.eat_while(char::is_whitespace);
        if cursor.eat_str("=>") {
            let value = cursor.rest().trim();
            if value.is_empty() {
                return None;
            }
            return Some(ParsedArgument::named(name, value));
        }
    }

    Some(ParsedArgument::positional(text))
}

fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn unclosed(stack: &[(char, Span)]) -> SplitError {
    // Report the innermost group; it is the one the input ran out inside.
    let (open, span) = stack[stack.len() - 1];
    SplitError::UnclosedBracket { open, span }
}

#[inline]
fn here(cursor: &Cursor<'_>, len: u32) -> Span {
    Span::new(cursor.line(), cursor.column(), len)
}
