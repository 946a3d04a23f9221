//! Integration tests for joining selectors with combinators.

use cssb::{Combinator, SelectorError, Stringify, class, combine, element, id, pseudo_element};

#[test]
fn test_combine_adjacent_sibling() -> Result<(), SelectorError> {
    let combined = combine(
        &element("div").id("main")?,
        "+",
        &element("table").id("data")?,
    );
    assert_eq!(combined.stringify(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_combine_nested() -> Result<(), SelectorError> {
    let a = element("div").id("main")?.class("container")?;
    let b = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
    let c = element("p").pseudo_element("first-line")?;

    let combined = combine(&a, "+", &combine(&b, "~", &c));
    assert_eq!(
        combined.stringify(),
        format!("{} + {} ~ {}", a.stringify(), b.stringify(), c.stringify())
    );
    assert_eq!(
        combined.stringify(),
        r#"div#main.container + a[href$=".png"]:focus ~ p::first-line"#
    );
    Ok(())
}

#[test]
fn test_combine_left_nested() {
    let combined = combine(
        &combine(&element("ul"), Combinator::Child, &element("li")),
        Combinator::GeneralSibling,
        &class("note"),
    );
    insta::assert_snapshot!(combined, @"ul > li ~ .note");
}

#[test]
fn test_combinator_tokens() {
    assert_eq!(Combinator::Descendant.as_str(), " ");
    assert_eq!(Combinator::Child.as_str(), ">");
    assert_eq!(Combinator::AdjacentSibling.as_str(), "+");
    assert_eq!(Combinator::GeneralSibling.to_string(), "~");
    assert_eq!(
        combine(&id("a"), Combinator::Descendant, &id("b")).as_str(),
        "#a   #b"
    );
}

#[test]
fn test_combinator_token_is_not_validated() {
    let combined = combine(&element("x"), "weird", &element("y"));
    assert_eq!(combined.stringify(), "x weird y");

    let empty = combine(&element("x"), "", &element("y"));
    assert_eq!(empty.stringify(), "x  y");
}

#[test]
fn test_combined_stringify_is_idempotent() {
    let combined = combine(&element("h1"), ">", &pseudo_element("before"));
    assert_eq!(combined.stringify(), combined.stringify());
    assert_eq!(combined.to_string(), "h1 > ::before");
    assert_eq!(String::from(combined.clone()), combined.into_string());
}

#[test]
fn test_operands_are_rendered_once_at_combine_time() -> Result<(), SelectorError> {
    let left = element("div");
    let combined = combine(&left, ">", &element("span"));
    let left = left.class("late")?;
    assert_eq!(left.stringify(), "div.late");
    assert_eq!(combined.stringify(), "div > span");
    Ok(())
}

#[test]
fn test_mixed_operands_through_trait_objects() {
    let parts: Vec<Box<dyn Stringify>> = vec![
        Box::new(element("nav")),
        Box::new(combine(&element("ul"), ">", &element("li"))),
    ];
    let combined = combine(&parts[0], Combinator::Descendant, &parts[1]);
    assert_eq!(combined.stringify(), "nav   ul > li");
}

fn table_rows_chain(descendant: impl AsRef<str>) -> Result<String, SelectorError> {
    let combined = combine(
        &element("div")
            .id("main")?
            .class("container")?
            .class("draggable")?,
        "+",
        &combine(
            &element("table").id("data")?,
            "~",
            &combine(
                &element("tr").pseudo_class("nth-of-type(even)")?,
                descendant,
                &element("td").pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    Ok(combined.stringify())
}

#[test]
fn test_three_level_chain_with_space_token() -> Result<(), SelectorError> {
    assert_eq!(
        table_rows_chain(" ")?,
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}

#[test]
fn test_descendant_combinator_matches_space_token() -> Result<(), SelectorError> {
    assert_eq!(
        table_rows_chain(Combinator::Descendant)?,
        table_rows_chain(" ")?
    );
    assert_eq!(
        combine(&element("tr"), Combinator::Descendant, &element("td")).stringify(),
        "tr   td"
    );
    Ok(())
}
