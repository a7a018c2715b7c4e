//! Tests for the rule-based tagging engine.

use crate::lead::domain::{
    ProductLine, TagCondition, TagInput, TagRule, derive_tags, derive_tags_with,
};
use rstest::rstest;
use std::collections::BTreeSet;

fn line(name: &str, quantity: u32) -> ProductLine {
    ProductLine::new(name, quantity).expect("valid product line")
}

fn tags_of(message: Option<&str>, phone: Option<&str>, lines: &[ProductLine]) -> BTreeSet<String> {
    derive_tags(&TagInput::new(message, phone, lines))
}

#[rstest]
fn full_submission_yields_all_expected_tags() {
    let lines = vec![line("Vestido rojo", 8)];
    let tags = tags_of(
        Some("Busco un vestido talla M, mi teléfono es 555-1234"),
        Some("555-1234"),
        &lines,
    );

    for expected in [
        "con-productos",
        "cantidad-alta",
        "vestido",
        "consulta-talla",
        "con-telefono",
    ] {
        assert!(tags.contains(expected), "missing tag {expected}: {tags:?}");
    }
}

#[rstest]
fn bare_contact_submission_yields_no_tags() {
    let tags = tags_of(None, None, &[]);
    assert!(tags.is_empty());
}

#[rstest]
fn tagging_is_deterministic() {
    let lines = vec![line("Blazer", 2)];
    let input = TagInput::new(Some("Precio del blazer?"), None, &lines);

    assert_eq!(derive_tags(&input), derive_tags(&input));
}

#[rstest]
fn matching_is_substring_containment_not_tokenization() {
    // "entallada" embeds "talla"; containment still triggers the tag.
    let tags = tags_of(Some("Quiero una camisa entallada"), None, &[]);

    assert!(tags.contains("camisa"));
    assert!(tags.contains("consulta-talla"));
}

#[rstest]
fn matching_ignores_message_case() {
    let tags = tags_of(Some("VESTIDO DE FALDA LARGA"), None, &[]);

    assert!(tags.contains("vestido"));
    assert!(tags.contains("falda"));
}

#[rstest]
#[case(5, false)]
#[case(6, true)]
fn bulk_tag_requires_quantity_strictly_above_threshold(
    #[case] quantity: u32,
    #[case] expected: bool,
) {
    let lines = vec![line("Camisa lino", quantity)];
    let tags = tags_of(None, None, &lines);

    assert!(tags.contains("con-productos"));
    assert_eq!(tags.contains("cantidad-alta"), expected);
}

#[rstest]
fn long_message_earns_the_detailed_tag() {
    let long_message = "Hola, quisiera información sobre pedidos al por mayor \
                        para mi tienda, incluyendo plazos de entrega y condiciones \
                        de pago para distribuidores.";
    let tags = tags_of(Some(long_message), None, &[]);

    assert!(tags.contains("mensaje-detallado"));
}

#[rstest]
fn short_message_does_not_earn_the_detailed_tag() {
    let tags = tags_of(Some("Hola, ¿tienen catálogo?"), None, &[]);
    assert!(!tags.contains("mensaje-detallado"));
}

#[rstest]
fn blank_phone_does_not_count_as_a_phone() {
    let tags = tags_of(None, Some("   "), &[]);
    assert!(!tags.contains("con-telefono"));
}

#[rstest]
fn accented_shipping_keyword_matches() {
    let tags = tags_of(Some("¿Cuánto cuesta el envío a Madrid?"), None, &[]);
    assert!(tags.contains("consulta-envio"));
}

#[rstest]
fn custom_rule_lists_are_evaluated_independently() {
    let rules = vec![TagRule {
        tag: "mayorista",
        condition: TagCondition::QuantityAbove(50),
    }];
    let lines = vec![line("Falda plisada", 120)];

    let tags = derive_tags_with(&rules, &TagInput::new(None, None, &lines));

    assert_eq!(tags, BTreeSet::from(["mayorista".to_owned()]));
}
