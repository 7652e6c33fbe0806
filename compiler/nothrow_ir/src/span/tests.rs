use super::*;

#[test]
fn width_and_emptiness() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());

    let point = Span::point(42);
    assert_eq!(point, Span::new(42, 42));
    assert_eq!(point.len(), 0);
    assert!(point.is_empty());
}

#[test]
fn inverted_span_is_empty() {
    let span = Span::new(9, 3);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn contains_excludes_end() {
    let span = Span::new(10, 20);
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
    assert!(!Span::point(5).contains(5));
}

#[test]
fn fits_within_source() {
    assert!(Span::new(0, 8).fits_within(8));
    assert!(Span::point(8).fits_within(8));
    assert!(!Span::new(0, 9).fits_within(8));
    assert!(!Span::new(5, 2).fits_within(8));
}

#[test]
fn range_and_formatting() {
    let span = Span::new(100, 200);
    assert_eq!(span.to_range(), 100..200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(Span::default(), Span::point(0));
}
