use quantifiers::{BracketPair, Grammar, Quantifier, Result};

#[test]
fn test_default_profile() {
    let grammar = Grammar::default();
    assert_eq!(grammar.separator(), ",");
    assert_eq!(
        grammar.bracket_pairs(),
        [
            BracketPair::new("(", ")"),
            BracketPair::new("{", "}"),
            BracketPair::new("[", "]"),
            BracketPair::new("<", ">"),
        ]
    );
    assert_eq!(grammar.fixed_pair(), None);
    assert_eq!(grammar.format_pair(), Some(&BracketPair::new("(", ")")));
}

#[test]
fn test_format_branches() -> Result<()> {
    assert_eq!(Quantifier::new((3,))?.to_repr(), "(3,)");
    assert_eq!(Quantifier::new(7)?.to_repr(), "(7)");
    assert_eq!(Quantifier::new((0,))?.to_string(), "(0,)");
    Ok(())
}

#[test]
fn test_format_bounded_emits_max() -> Result<()> {
    let range = Quantifier::new((2, 5))?;
    assert_eq!(range.to_repr(), "(2,5)");
    assert_ne!(range.to_repr(), "(2,2)");
    Ok(())
}

#[test]
fn test_round_trip() -> Result<()> {
    let grammars = [
        Grammar::default(),
        Grammar::default().with_fixed_pair(("{", "}")),
        Grammar::new(";"),
        Grammar::new("..").with_bracket_pair(("<<", ">>")),
    ];
    let values = [
        Quantifier::new(0)?,
        Quantifier::new(12)?,
        Quantifier::new((4,))?,
        Quantifier::new((2, 5))?,
        Quantifier::UNBOUNDED,
    ];

    for grammar in &grammars {
        for value in values {
            let token = grammar.format(&value);
            assert_eq!(grammar.parse(&token)?, value, "{token} with {grammar}");
        }
    }
    Ok(())
}

#[test]
fn test_fixed_pair_formatting() -> Result<()> {
    let grammar = Grammar::default().with_fixed_pair(("[", "]"));
    assert_eq!(grammar.format(&Quantifier::new((1, 9))?), "[1,9]");

    let bare = Grammar::new("-");
    assert_eq!(bare.format(&Quantifier::new((1, 9))?), "1-9");
    assert_eq!(bare.format(&Quantifier::new((1,))?), "1-");
    Ok(())
}

#[test]
fn test_profiles_are_independent() {
    let base = Grammar::default();
    let custom = base.clone().with_separator(":").with_bracket_pairs([("|", "|")]);
    assert_eq!(base.separator(), ",");
    assert_eq!(custom.separator(), ":");
    assert_eq!(custom.bracket_pairs().len(), 1);
    assert_eq!(base.bracket_pairs().len(), 4);
}

#[test]
fn test_display() {
    assert_eq!(
        Grammar::default().to_string(),
        "separator \",\", brackets [() {} [] <>]"
    );
    assert_eq!(
        Grammar::new(";").with_fixed_pair(("<", ">")).to_string(),
        "separator \";\", brackets [], fixed <>"
    );
}
