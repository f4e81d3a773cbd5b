//! Block delimiter trie.
//!
//! The three delimiters are stored in a character trie so raw-mode scanning
//! can find the longest delimiter starting at any position in one walk.

use rustc_hash::FxHashMap;
use weft_diagnostic::ConfigurationError;
use weft_ir::TokenKind;

const USED_TWICE: &str = "block delimiter used twice";

#[derive(Debug, Default)]
struct Node {
    kind: Option<TokenKind>,
    children: FxHashMap<char, Node>,
}

/// Validated delimiters and escape character.
#[derive(Debug)]
pub struct Delimiters {
    root: Node,
    escape: char,
}

impl Delimiters {
    /// Build the trie.
    ///
    /// Fails when a delimiter is empty, when two delimiters are identical,
    /// or when a delimiter is the escape character. Continue and end
    /// delimiters are scanned right after block-mode tokens, so they also
    /// fail when they start with a character block mode would read as part
    /// of an expression. The begin delimiter is only ever seen in raw mode.
    pub fn new(
        block_begin: &str,
        block_continue: &str,
        block_end: &str,
        escape: char,
    ) -> Result<Self, ConfigurationError> {
        let mut delimiters = Delimiters {
            root: Node::default(),
            escape,
        };

        for (setting, text, kind) in [
            ("block_begin", block_begin, TokenKind::BlockBegin),
            ("block_continue", block_continue, TokenKind::BlockContinue),
            ("block_end", block_end, TokenKind::BlockEnd),
        ] {
            delimiters.store(setting, text, kind)?;
        }

        Ok(delimiters)
    }

    fn store(
        &mut self,
        setting: &'static str,
        text: &str,
        kind: TokenKind,
    ) -> Result<(), ConfigurationError> {
        let Some(first) = text.chars().next() else {
            return Err(ConfigurationError::new(setting, text, "block delimiter is empty"));
        };
        if text.chars().eq(std::iter::once(self.escape)) {
            return Err(ConfigurationError::new(
                setting,
                text,
                "block delimiter is the escape character",
            ));
        }
        if kind != TokenKind::BlockBegin && starts_expression(first) {
            return Err(ConfigurationError::new(
                setting,
                text,
                "block delimiter starts with an expression character",
            ));
        }

        let mut node = &mut self.root;
        for c in text.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.kind.is_some() {
            return Err(ConfigurationError::new(setting, text, USED_TWICE));
        }
        node.kind = Some(kind);
        Ok(())
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    /// Longest delimiter at the start of `text`, with its byte length.
    pub fn longest_match(&self, text: &str) -> Option<(TokenKind, usize)> {
        let mut node = &self.root;
        let mut found = None;

        for (offset, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(kind) = node.kind {
                found = Some((kind, offset + c.len_utf8()));
            }
        }

        found
    }
}

/// Characters that begin a block-mode token.
///
/// `&` and `|` are absent: alone they are not operators, so block mode hands
/// them back unconsumed.
fn starts_expression(c: char) -> bool {
    c <= ' '
        || c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '\'' | '"' | '!' | '%' | '(' | ')' | '*' | '+' | ',' | '-' | '.' | '/' | ':'
                | '<' | '=' | '>' | '[' | ']'
        )
}
