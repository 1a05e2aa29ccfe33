// Shared lexical scanner behind the per-language grammars.
//
// The scanner turns source text into a flat stream of CodeComponents. Two
// obligations keep the line accounting in highlight::line honest: every
// whitespace run outside a token is emitted as a Whitespace component, and
// no non-whitespace component ever contains a newline (multi-line constructs
// such as block comments emit their interior whitespace separately).

use nom::{
    branch::alt,
    bytes::complete::{escaped, is_not, tag, take_while, take_while1},
    character::complete::{char, digit1, none_of, not_line_ending},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};

use super::line::{CodeComponent, TokenKind};

/// How a language marks preprocessor-like constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreprocStyle {
    /// `#ident`, e.g. Swift's `#if` / `#available`
    HashIdent,
    /// `#[...]` / `#![...]` attributes
    HashAttribute,
}

/// Lexical shape of one language
#[derive(Debug, Clone, Copy)]
pub(crate) struct Syntax {
    pub keywords: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    pub preproc: PreprocStyle,
    /// `@ident` counts as a keyword (Swift attributes)
    pub at_attributes: bool,
    /// single-quoted character literals are tokens (Rust; excludes lifetimes)
    pub char_literals: bool,
}

/// Component sink that remembers the trailing characters of the last two
/// non-whitespace components; '.'-preceded identifiers classify by what
/// stood before the dot
struct Emitter {
    out: Vec<CodeComponent>,
    prev: Option<char>,
    prev2: Option<char>,
}

impl Emitter {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            prev: None,
            prev2: None,
        }
    }

    fn push(&mut self, component: CodeComponent) {
        if !component.is_whitespace() {
            self.prev2 = self.prev;
            self.prev = component.text().chars().last();
        }
        self.out.push(component);
    }

    fn token(&mut self, text: &str, kind: TokenKind) {
        self.push(CodeComponent::Token(text.to_string(), kind));
    }
}

pub(crate) fn scan(source: &str, syntax: &Syntax) -> Vec<CodeComponent> {
    let mut emit = Emitter::new();
    let mut rest = source;

    while !rest.is_empty() {
        if let Ok((next, ws)) = whitespace_run(rest) {
            emit.push(CodeComponent::Whitespace(ws.to_string()));
            rest = next;
            continue;
        }

        if rest.starts_with(syntax.line_comment) {
            if let Ok((next, text)) = line_comment(rest, syntax.line_comment) {
                emit.token(text, TokenKind::Comment);
                rest = next;
                continue;
            }
        }

        if rest.starts_with(syntax.block_comment.0) {
            rest = block_comment(rest, syntax.block_comment, &mut emit.out);
            // comment pieces don't participate in dot-access context
            emit.prev = None;
            emit.prev2 = None;
            continue;
        }

        if rest.starts_with('"') {
            if let Ok((next, text)) = string_literal(rest) {
                emit.token(text, TokenKind::String);
                rest = next;
                continue;
            }
        }

        if syntax.char_literals && rest.starts_with('\'') {
            if let Ok((next, text)) = char_literal(rest) {
                emit.token(text, TokenKind::String);
                rest = next;
                continue;
            }
        }

        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            if let Ok((next, text)) = number(rest) {
                emit.token(text, TokenKind::Number);
                rest = next;
                continue;
            }
        }

        if rest.starts_with('#') {
            if let Ok((next, text)) = preprocessing(rest, syntax.preproc) {
                emit.token(text, TokenKind::Preprocessing);
                rest = next;
                continue;
            }
        }

        if syntax.at_attributes && rest.starts_with('@') {
            if let Ok((next, text)) = at_attribute(rest) {
                emit.token(text, TokenKind::Keyword);
                rest = next;
                continue;
            }
        }

        if let Ok((next, word)) = identifier(rest) {
            let following = next.chars().next();
            match classify_word(word, emit.prev, emit.prev2, following, syntax) {
                Some(kind) => emit.token(word, kind),
                None => emit.push(CodeComponent::Plain(word.to_string())),
            }
            rest = next;
            continue;
        }

        // any other single character is punctuation
        let ch = rest.chars().next().expect("rest is non-empty");
        emit.push(CodeComponent::Plain(ch.to_string()));
        rest = &rest[ch.len_utf8()..];
    }

    emit.out
}

fn classify_word(
    word: &str,
    prev: Option<char>,
    prev2: Option<char>,
    following: Option<char>,
    syntax: &Syntax,
) -> Option<TokenKind> {
    if prev == Some('.') {
        if following == Some('(') {
            return Some(TokenKind::Call);
        }
        // `foo.bar` is a property access, a bare `.bar` is dot access
        let after_value =
            prev2.is_some_and(|c| c.is_alphanumeric() || c == '_' || c == ')' || c == ']');
        return Some(if after_value {
            TokenKind::Property
        } else {
            TokenKind::DotAccess
        });
    }

    if syntax.keywords.contains(&word) {
        return Some(TokenKind::Keyword);
    }

    if word.chars().next().is_some_and(char::is_uppercase) {
        return Some(TokenKind::Type);
    }

    if following == Some('(') {
        return Some(TokenKind::Call);
    }

    None
}

fn whitespace_run(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        digit1,
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        opt(tuple((
            char('.'),
            digit1,
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        ))),
    )))(input)
}

fn line_comment<'a>(input: &'a str, prefix: &str) -> IResult<&'a str, &'a str> {
    recognize(pair(tag(prefix), not_line_ending))(input)
}

/// A double-quoted string, terminated by the closing quote or by end of
/// line (unterminated literals never swallow the newline)
fn string_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('"'),
        opt(escaped(is_not("\"\\\n"), '\\', none_of("\n"))),
        opt(char('"')),
    )))(input)
}

fn char_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('\''),
        alt((
            preceded(char('\\'), recognize(none_of("\n"))),
            recognize(none_of("'\n")),
        )),
        char('\''),
    )))(input)
}

fn preprocessing(input: &str, style: PreprocStyle) -> IResult<&str, &str> {
    match style {
        PreprocStyle::HashIdent => recognize(pair(char('#'), identifier))(input),
        PreprocStyle::HashAttribute => attribute(input),
    }
}

/// `#[...]` or `#![...]`, confined to one line; bracket nesting tracked so
/// `#[cfg(feature = "x")]` comes out as one token
fn attribute(input: &str) -> IResult<&str, &str> {
    let (after_intro, intro) = recognize(tuple((char('#'), opt(char('!')), char('['))))(input)?;

    let mut depth = 1usize;
    let mut end = intro.len();
    for (offset, ch) in after_intro.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    end = intro.len() + offset + 1;
                    break;
                }
            }
            '\n' => {
                end = intro.len() + offset;
                break;
            }
            _ => {}
        }
        if ch != '\n' {
            end = intro.len() + offset + ch.len_utf8();
        }
    }

    Ok((&input[end..], &input[..end]))
}

fn at_attribute(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('@'), identifier))(input)
}

/// Scan a block comment, emitting the pieces directly: comment text runs as
/// Comment tokens and interior whitespace as Whitespace components, so that
/// multi-line comments keep the per-line accounting intact. Nesting is
/// honored; an unterminated comment runs to end of input. Returns the
/// remaining input.
fn block_comment<'a>(
    input: &'a str,
    (open, close): (&str, &str),
    out: &mut Vec<CodeComponent>,
) -> &'a str {
    let mut depth = 0usize;
    let mut pos = 0usize;
    let mut segment_start = 0usize;

    fn flush(out: &mut Vec<CodeComponent>, input: &str, from: usize, to: usize) {
        if from < to {
            out.push(CodeComponent::Token(
                input[from..to].to_string(),
                TokenKind::Comment,
            ));
        }
    }

    while pos < input.len() {
        let rest = &input[pos..];
        if rest.starts_with(open) {
            depth += 1;
            pos += open.len();
        } else if rest.starts_with(close) {
            depth -= 1;
            pos += close.len();
            if depth == 0 {
                flush(out, input, segment_start, pos);
                return &input[pos..];
            }
        } else {
            let ch = rest.chars().next().expect("rest is non-empty");
            if ch.is_whitespace() {
                flush(out, input, segment_start, pos);
                let run: IResult<&str, &str> = whitespace_run(rest);
                let (_, ws) = run.expect("current char is whitespace");
                out.push(CodeComponent::Whitespace(ws.to_string()));
                pos += ws.len();
                segment_start = pos;
            } else {
                pos += ch.len_utf8();
            }
        }
    }

    flush(out, input, segment_start, pos);
    &input[pos..]
}
