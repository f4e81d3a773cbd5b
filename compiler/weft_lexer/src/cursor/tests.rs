use super::*;

use pretty_assertions::assert_eq;

#[test]
fn test_bump_tracks_lines_and_columns() {
    let mut cursor = Cursor::new("ab\ncé");

    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.bump(), Some('b'));
    assert_eq!(cursor.location(), Location::new(1, 3));
    assert_eq!(cursor.bump(), Some('\n'));
    assert_eq!(cursor.location(), Location::new(2, 1));
    assert_eq!(cursor.peek(), Some('é'));
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.rest(), "");
    assert_eq!(cursor.bump(), None);
}

#[test]
fn test_lookahead_by_copy() {
    let cursor = Cursor::new("xyz");
    let mut lookahead = cursor;
    lookahead.bump();

    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(lookahead.current(), Some('y'));
}

#[test]
fn test_eat_while() {
    let mut cursor = Cursor::new("abc123");
    assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), "abc");
    assert_eq!(cursor.rest(), "123");
}

#[test]
fn test_advance_consumes_bytes() {
    let mut cursor = Cursor::new("{{\nx");
    assert_eq!(cursor.advance(3), "{{\n");
    assert_eq!(cursor.location(), Location::new(2, 1));
    assert_eq!(cursor.advance(10), "x");
}
