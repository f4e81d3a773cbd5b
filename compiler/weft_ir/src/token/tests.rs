use super::*;

use pretty_assertions::assert_eq;

#[test]
fn test_keyword_matching() {
    let token = Token::new(TokenKind::Symbol, "for", Location::START);
    assert!(token.is_keyword("for"));
    assert!(!token.is_keyword("while"));

    let string = Token::new(TokenKind::String, "for", Location::START);
    assert!(!string.is_keyword("for"));
}

#[test]
fn test_describe() {
    let eof = Token::new(TokenKind::EndOfFile, "", Location::new(3, 7));
    assert_eq!(eof.describe(), "<eof>");
    assert_eq!(Token::new(TokenKind::Plus, "+", Location::START).describe(), "+");
    assert_eq!(TokenKind::BracketEnd.to_string(), "']'");
}

#[test]
fn test_delimiters() {
    assert!(TokenKind::BlockBegin.is_delimiter());
    assert!(TokenKind::BlockEnd.is_delimiter());
    assert!(!TokenKind::DoublePipe.is_delimiter());
}

#[test]
fn test_location_advance() {
    let location = Location::START.advance('a').advance('b');
    assert_eq!(location, Location::new(1, 3));
    assert_eq!(location.advance('\n'), Location::new(2, 1));
    assert_eq!(Location::new(2, 5).to_string(), "line 2, column 5");
}
