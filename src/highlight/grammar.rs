use nom::{
    bytes::complete::{take_till1, take_while1},
    IResult,
};

use super::lexer::{self, PreprocStyle, Syntax};
use super::line::CodeComponent;

/// A lexical ruleset that classifies code text into components.
///
/// Implementations must emit every whitespace run as a `Whitespace`
/// component and never place a newline inside any other component; the line
/// builder relies on this for its count invariant.
pub trait Grammar {
    fn name(&self) -> &'static str;

    fn scan(&self, source: &str) -> Vec<CodeComponent>;
}

/// The identity grammar: no classification at all, just the
/// whitespace/plain-text split that line accounting needs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGrammar;

impl Grammar for NoGrammar {
    fn name(&self) -> &'static str {
        "none"
    }

    fn scan(&self, source: &str) -> Vec<CodeComponent> {
        let mut out = Vec::new();
        let mut rest = source;
        while !rest.is_empty() {
            let ws: IResult<&str, &str> = take_while1(char::is_whitespace)(rest);
            if let Ok((next, run)) = ws {
                out.push(CodeComponent::Whitespace(run.to_string()));
                rest = next;
                continue;
            }
            let run: IResult<&str, &str> = take_till1(char::is_whitespace)(rest);
            let (next, text) = run.expect("rest starts with non-whitespace");
            out.push(CodeComponent::Plain(text.to_string()));
            rest = next;
        }
        out
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RustGrammar;

const RUST_SYNTAX: Syntax = Syntax {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "union", "unsafe", "use", "where", "while",
    ],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    preproc: PreprocStyle::HashAttribute,
    at_attributes: false,
    char_literals: true,
};

impl Grammar for RustGrammar {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn scan(&self, source: &str) -> Vec<CodeComponent> {
        lexer::scan(source, &RUST_SYNTAX)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SwiftGrammar;

const SWIFT_SYNTAX: Syntax = Syntax {
    keywords: &[
        "actor", "any", "as", "associatedtype", "async", "await", "break", "case", "catch",
        "class", "continue", "convenience", "default", "defer", "deinit", "didSet", "do", "else",
        "enum", "extension", "fallthrough", "false", "fileprivate", "final", "for", "func", "get",
        "guard", "if", "import", "in", "indirect", "init", "inout", "internal", "is", "lazy",
        "let", "mutating", "nil", "nonmutating", "open", "operator", "override", "postfix",
        "prefix", "private", "protocol", "public", "repeat", "required", "rethrows", "return",
        "self", "Self", "set", "some", "static", "struct", "subscript", "super", "switch",
        "throw", "throws", "true", "try", "typealias", "unowned", "var", "weak", "where", "while",
        "willSet",
    ],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    preproc: PreprocStyle::HashIdent,
    at_attributes: true,
    char_literals: false,
};

impl Grammar for SwiftGrammar {
    fn name(&self) -> &'static str {
        "swift"
    }

    fn scan(&self, source: &str) -> Vec<CodeComponent> {
        lexer::scan(source, &SWIFT_SYNTAX)
    }
}

/// Language selector for code blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// No highlighting; the whole block renders as plain text
    #[default]
    None,
    Rust,
    Swift,
}

impl Language {
    pub fn grammar(&self) -> &'static dyn Grammar {
        match self {
            Language::Rust => &RustGrammar,
            Language::Swift => &SwiftGrammar,
            Language::None => &NoGrammar,
        }
    }

    pub fn name(&self) -> &'static str {
        self.grammar().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::TokenKind;

    #[test]
    fn test_no_grammar_is_identity() {
        let components = NoGrammar.scan("let x = 1;\n");
        assert!(components
            .iter()
            .all(|c| matches!(c, CodeComponent::Plain(_) | CodeComponent::Whitespace(_))));
        let reassembled: String = components.iter().map(|c| c.text()).collect();
        assert_eq!(reassembled, "let x = 1;\n");
    }

    #[test]
    fn test_rust_grammar_classifies_keywords() {
        let components = RustGrammar.scan("pub fn main() {}");
        assert!(components.contains(&CodeComponent::Token(
            "pub".to_string(),
            TokenKind::Keyword
        )));
        assert!(components.contains(&CodeComponent::Token("fn".to_string(), TokenKind::Keyword)));
    }

    #[test]
    fn test_swift_grammar_attributes_and_preprocessing() {
        let components = SwiftGrammar.scan("@MainActor func go() {}\n#if os(macOS)");
        assert!(components.contains(&CodeComponent::Token(
            "@MainActor".to_string(),
            TokenKind::Keyword
        )));
        assert!(components.contains(&CodeComponent::Token(
            "#if".to_string(),
            TokenKind::Preprocessing
        )));
    }

    #[test]
    fn test_language_grammar_lookup() {
        assert_eq!(Language::Rust.name(), "rust");
        assert_eq!(Language::Swift.name(), "swift");
        assert_eq!(Language::None.name(), "none");
    }
}
