use super::*;

#[test]
fn one_line_source() {
    let source = "int f(int x)";
    let table = LineOffsetTable::new(source);
    assert_eq!(table.line_start(2), None);
    assert_eq!(table.line_col(source, 0), (1, 1));
    assert_eq!(table.line_col(source, 12), (1, 13));
}

#[test]
fn newline_ends_its_own_line() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::new(source);
    assert_eq!(table.line_of(3), 1);
    assert_eq!(table.line_of(4), 2);
    assert_eq!(table.line_col(source, 7), (2, 4));
    assert_eq!(table.line_col(source, 10), (3, 1));
}

#[test]
fn column_is_a_char_count() {
    let source = "int λ() const";
    let table = LineOffsetTable::new(source);
    // `(` is byte 6 and the sixth character
    assert_eq!(table.line_col(source, 6), (1, 6));
}

#[test]
fn offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::new(source);
    assert_eq!(table.line_col(source, 40), (1, 3));
}

#[test]
fn line_text_drops_crlf_and_lf() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::new(source);
    let lines: Vec<_> = (0..=4).map(|n| table.line_text(source, n)).collect();
    assert_eq!(
        lines,
        vec![None, Some("first"), Some("second"), Some("third"), None]
    );
}

#[test]
fn trailing_newline_starts_an_empty_line() {
    let source = "x\n";
    let table = LineOffsetTable::new(source);
    assert_eq!(table.line_start(2), Some(2));
    assert_eq!(table.line_start(3), None);
    assert_eq!(table.line_col(source, 2), (2, 1));
    assert_eq!(table.line_text(source, 2), Some(""));
}
