//! The loxscript scanner/lexer.
//!
//! Converts source text into a stream of classified tokens, one linear
//! pass, left to right. Malformed lexemes (unexpected characters,
//! unterminated strings, unterminated block comments) are reported as
//! diagnostics and skipped; the scan always covers the whole buffer.

use crate::char_codes::*;
use loxscript_ast::token::{LiteralValue, Token};
use loxscript_ast::token_kind::TokenKind;
use loxscript_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The output of one whole-source scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Tokens in source order; the last is always `EndOfFileToken`.
    pub tokens: Vec<Token>,
    /// Diagnostics for malformed lexemes, in source order.
    pub diagnostics: DiagnosticCollection,
}

/// The scanner converts loxscript source text into tokens.
///
/// One instance serves one `scan_tokens` call; it holds no state outside
/// that call's lifetime, so separate scans share nothing.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Start of the current lexeme.
    start: usize,
    /// Current position in the text.
    current: usize,
    /// Current line (1-based), advanced at each newline.
    line: u32,
    /// The line the current lexeme began on. Multi-line strings and
    /// comments advance `line` while their token keeps this one.
    token_line: u32,
    /// Accumulated tokens.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            token_line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the whole buffer and return every token plus every diagnostic.
    ///
    /// Exactly one end-of-input token is appended, always last, for any
    /// input including the empty string.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_at_end() {
            self.start = self.current;
            self.token_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Classify one lexeme starting at `start`.
    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::OpenParenToken),
            ')' => self.add_token(TokenKind::CloseParenToken),
            '[' => self.add_token(TokenKind::OpenBracketToken),
            ']' => self.add_token(TokenKind::CloseBracketToken),
            ',' => self.add_token(TokenKind::CommaToken),
            '.' => self.add_token(TokenKind::DotToken),
            '-' => self.add_token(TokenKind::MinusToken),
            '+' => self.add_token(TokenKind::PlusToken),
            ';' => self.add_token(TokenKind::SemicolonToken),
            ':' => self.add_token(TokenKind::ColonToken),
            '*' => self.add_token(TokenKind::AsteriskToken),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::ExclamationEqualsToken
                } else {
                    TokenKind::ExclamationToken
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualsEqualsToken
                } else {
                    TokenKind::EqualsToken
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessThanEqualsToken
                } else {
                    TokenKind::LessThanToken
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterThanEqualsToken
                } else {
                    TokenKind::GreaterThanToken
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else if self.match_char('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::SlashToken);
                }
            }

            '"' | '\'' => self.scan_string(ch),

            // Whitespace carries no token.
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            _ if is_digit(ch) => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                let text = ch.to_string();
                self.diagnostics.add(Diagnostic::new(
                    self.token_line,
                    &messages::UNEXPECTED_CHARACTER_0,
                    &[&text],
                ));
            }
        }
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    /// Whether the cursor has reached the end of the text.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.text.len()
    }

    /// Consume and return the character at the cursor.
    #[inline]
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Look at the character at the cursor without consuming it.
    ///
    /// `None` past the end of the text, so comparisons against real
    /// characters never falsely match there.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// Look at the character at cursor + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.current + offset).copied()
    }

    /// Consume the next character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Convert a range of chars to a String.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.chars_to_string(self.start, self.current);
        self.tokens.push(Token::new(kind, lexeme, None, self.token_line));
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: LiteralValue) {
        let lexeme = self.chars_to_string(self.start, self.current);
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.token_line));
    }

    // ========================================================================
    // Lexeme-specific scanning
    // ========================================================================

    /// Discard the rest of the line after `//`.
    ///
    /// The terminating newline is left for the outer loop, which owns the
    /// line counter increment.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.current += 1;
        }
    }

    /// Discard a `/* ... */` span, counting embedded newlines.
    ///
    /// Reaching end of input before `*/` reports a diagnostic at the line
    /// the comment began and leaves the cursor at the end of the buffer.
    fn skip_block_comment(&mut self) {
        loop {
            if self.is_at_end() {
                self.diagnostics.add(Diagnostic::new(
                    self.token_line,
                    &messages::UNTERMINATED_BLOCK_COMMENT,
                    &[],
                ));
                return;
            }
            if self.peek() == Some('*') && self.char_at(1) == Some('/') {
                self.current += 2;
                return;
            }
            if self.advance() == '\n' {
                self.line += 1;
            }
        }
    }

    /// Scan a string literal opened by `quote` (`"` or `'`).
    ///
    /// Strings may span lines; the token reports the line the opening
    /// quote was on. The literal excludes the quotes. An unterminated
    /// string yields a diagnostic and no token.
    fn scan_string(&mut self, quote: char) {
        while let Some(ch) = self.peek() {
            if ch == quote {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.diagnostics.add(Diagnostic::new(
                self.token_line,
                &messages::UNTERMINATED_STRING_LITERAL,
                &[],
            ));
            return;
        }

        // The closing quote.
        self.current += 1;

        let value = self.chars_to_string(self.start + 1, self.current - 1);
        self.add_token_with_literal(TokenKind::StringLiteral, LiteralValue::String(value));
    }

    /// Scan a numeric literal: digits with an optional fraction.
    ///
    /// A `.` is consumed only when a digit follows it; `1.` scans as the
    /// number `1` with the dot left for the next dispatch cycle.
    fn scan_number(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }

        if self.peek() == Some('.') && self.char_at(1).map_or(false, is_digit) {
            self.current += 1;
            while self.peek().map_or(false, is_digit) {
                self.current += 1;
            }
        }

        let text = self.chars_to_string(self.start, self.current);
        let value: f64 = text.parse().expect("digit run should parse as f64");
        self.add_token_with_literal(TokenKind::NumericLiteral, LiteralValue::Number(value));
    }

    /// Scan an identifier or reserved word.
    fn scan_identifier(&mut self) {
        while self.peek().map_or(false, is_alpha_numeric) {
            self.current += 1;
        }

        let text = self.chars_to_string(self.start, self.current);

        if let Some(keyword) = TokenKind::from_keyword(&text) {
            self.tokens
                .push(Token::new(keyword, text, None, self.token_line));
            return;
        }

        self.tokens
            .push(Token::new(TokenKind::Identifier, text, None, self.token_line));
    }
}
