use quantifiers::{Error, ErrorKind, Grammar, Quantifier, Result};

fn parse_ok(token: &str) -> (u64, Option<u64>) {
    Quantifier::from_repr(token)
        .unwrap_or_else(|err| panic!("Parser failed for token {token:?}: {err}"))
        .to_tuple()
}

fn format_err(token: &str) -> Error {
    Error::Format {
        token: token.to_string(),
    }
}

#[test]
fn test_bracketed_forms() {
    assert_eq!(parse_ok("{2,5}"), (2, Some(5)));
    assert_eq!(parse_ok("(3,)"), (3, None));
    assert_eq!(parse_ok("<7>"), (7, Some(7)));
    assert_eq!(parse_ok("[0,1]"), (0, Some(1)));
    assert_eq!(parse_ok("{,5}"), (0, Some(5)));
}

#[test]
fn test_empty_literals() {
    assert_eq!(parse_ok("{}"), (0, None));
    assert_eq!(parse_ok("{,}"), (0, None));
    assert_eq!(parse_ok(""), (0, None));
}

#[test]
fn test_whitespace() {
    assert_eq!(parse_ok("  {2,5}\t"), (2, Some(5)));
    assert_eq!(parse_ok("{1 , 4}"), (1, Some(4)));
    assert_eq!(parse_ok("{1 ,}"), (1, None));
    assert_eq!(parse_ok("{6 }"), (6, Some(6)));
}

#[test]
fn test_unbracketed_forms() {
    assert_eq!(parse_ok("5"), (5, Some(5)));
    assert_eq!(parse_ok("2,5"), (2, Some(5)));
    assert_eq!(parse_ok("3,"), (3, None));
}

#[test]
fn test_trailing_text() {
    assert_eq!(
        Quantifier::from_repr("{2,5}extra"),
        Err(format_err("{2,5}extra"))
    );
    assert_eq!(
        Grammar::default().parse_slice("{2,5}extra", 0, None, true),
        Quantifier::new((2, 5))
    );
}

#[test]
fn test_slice_offsets() -> Result<()> {
    let grammar = Grammar::default();
    assert_eq!(
        grammar.parse_slice("xx{2,5}yy", 2, Some(7), false)?,
        Quantifier::new((2, 5))?
    );
    assert_eq!(
        grammar.parse_slice("xx {4} yy", 2, Some(7), false)?,
        Quantifier::new(4)?
    );
    assert_eq!(
        grammar.parse_slice("{1,2}", 0, Some(99), false)?,
        Quantifier::new((1, 2))?
    );
    Ok(())
}

#[test]
fn test_malformed_tokens() {
    for token in ["{2,5", "(2,5}", "{2;5}", "{2,x}", "{2,5}}", "{a}", "{99999999999999999999999999999999999999999}"] {
        assert_eq!(Quantifier::from_repr(token), Err(format_err(token)), "{token}");
    }
}

#[test]
fn test_invalid_ranges() {
    assert_eq!(
        Quantifier::from_repr("{5,2}"),
        Err(Error::Inverted { min: 5, max: 2 })
    );
    assert_eq!(
        Quantifier::from_repr("{,-3}").map_err(|err| err.kind()),
        Err(ErrorKind::Construction)
    );
    assert_eq!(
        Quantifier::from_repr("{18446744073709551615}"),
        Err(Error::BoundOverflow(18_446_744_073_709_551_615))
    );
}

#[test]
fn test_error_message_names_token() {
    let err = Quantifier::from_repr("{2,5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(
        err.to_string(),
        "expected a quantifier representation, not \"{2,5\""
    );
}

#[test]
fn test_fixed_pair() {
    let grammar = Grammar::default().with_fixed_pair(("<", ">"));
    assert_eq!(grammar.parse("<2,5>"), Quantifier::new((2, 5)));
    assert_eq!(grammar.parse("{2,5}"), Err(format_err("{2,5}")));
}

#[test]
fn test_alternative_pairs_in_order() {
    let grammar = Grammar::new(",").with_bracket_pairs([("<<", ">>"), ("<", ">")]);
    assert_eq!(grammar.parse("<<2,3>>"), Quantifier::new((2, 3)));
    assert_eq!(grammar.parse("<4>"), Quantifier::new(4));
    assert_eq!(grammar.parse("{4}"), Err(format_err("{4}")));
}

#[test]
fn test_custom_separator() {
    let grammar = Grammar::default().with_separator("..");
    assert_eq!(grammar.parse("{2..5}"), Quantifier::new((2, 5)));
    assert_eq!(grammar.parse("{2..}"), Quantifier::new((2,)));
    assert_eq!(grammar.parse("{2,5}"), Err(format_err("{2,5}")));
}

#[test]
fn test_empty_separator() {
    let grammar = Grammar::default().with_separator("");
    assert_eq!(grammar.parse("{2 5}"), Quantifier::new((2, 5)));
    assert_eq!(grammar.parse("{5}"), Quantifier::new(5));
}

#[test]
fn test_no_brackets() {
    let grammar = Grammar::new(",");
    assert_eq!(grammar.parse("2,5"), Quantifier::new((2, 5)));
    assert_eq!(grammar.parse("8"), Quantifier::new(8));
    assert_eq!(grammar.parse("{8}"), Err(format_err("{8}")));
}

#[test]
fn test_from_str() {
    assert_eq!("{2,5}".parse::<Quantifier>(), Quantifier::new((2, 5)));
    assert!("nope".parse::<Quantifier>().is_err());
}
