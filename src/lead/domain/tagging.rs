//! Rule-based tag derivation for inquiry intake.
//!
//! Tags are derived exactly once, when the inquiry is created, from a
//! normalized view of the submission. Each rule pairs a fixed tag with a
//! condition over that view; the engine collects the tags of every rule
//! whose condition holds. Matching against message text is substring
//! containment on the lowercased message, not tokenization, so a keyword
//! embedded inside a longer word still triggers its tag.

use super::ProductLine;
use std::collections::BTreeSet;

/// Quantity above which an inquiry counts as a bulk request.
pub const BULK_QUANTITY_THRESHOLD: u32 = 5;

/// Character count above which a message counts as detailed.
pub const DETAILED_MESSAGE_CHARS: usize = 100;

/// Normalized view of an inquiry submission used for rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInput {
    message: Option<String>,
    message_chars: usize,
    has_phone: bool,
    product_count: usize,
    max_quantity: u32,
}

impl TagInput {
    /// Builds the normalized view: the message is lowercased once and the
    /// product lines are reduced to the facts the rules look at.
    #[must_use]
    pub fn new(message: Option<&str>, phone: Option<&str>, lines: &[ProductLine]) -> Self {
        let message = message
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase);
        let message_chars = message.as_deref().map_or(0, |text| text.chars().count());
        let has_phone = phone.is_some_and(|value| !value.trim().is_empty());
        let max_quantity = lines
            .iter()
            .map(ProductLine::quantity)
            .max()
            .unwrap_or(0);

        Self {
            message,
            message_chars,
            has_phone,
            product_count: lines.len(),
            max_quantity,
        }
    }
}

/// Condition half of a tagging rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCondition {
    /// At least one product line was submitted.
    HasProducts,
    /// Some product line requests more than this many units.
    QuantityAbove(u32),
    /// The lowercased message contains this fragment.
    MessageContains(&'static str),
    /// A non-blank phone number was submitted.
    HasPhone,
    /// The message is longer than this many characters.
    MessageLongerThan(usize),
}

impl TagCondition {
    /// Evaluates the condition against a normalized submission.
    #[must_use]
    pub fn holds(self, input: &TagInput) -> bool {
        match self {
            Self::HasProducts => input.product_count > 0,
            Self::QuantityAbove(threshold) => input.max_quantity > threshold,
            Self::MessageContains(fragment) => input
                .message
                .as_deref()
                .is_some_and(|text| text.contains(fragment)),
            Self::HasPhone => input.has_phone,
            Self::MessageLongerThan(chars) => input.message_chars > chars,
        }
    }
}

/// One tagging rule: a fixed tag applied when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    /// Tag contributed when the condition holds.
    pub tag: &'static str,
    /// Condition evaluated against the normalized submission.
    pub condition: TagCondition,
}

/// Returns the built-in rule list.
///
/// The product-category keywords tag with the keyword itself; the intent
/// keywords (`talla`, `precio`, `envío`) tag with a `consulta-` prefix.
#[must_use]
pub fn default_rules() -> Vec<TagRule> {
    vec![
        TagRule {
            tag: "con-productos",
            condition: TagCondition::HasProducts,
        },
        TagRule {
            tag: "cantidad-alta",
            condition: TagCondition::QuantityAbove(BULK_QUANTITY_THRESHOLD),
        },
        TagRule {
            tag: "vestido",
            condition: TagCondition::MessageContains("vestido"),
        },
        TagRule {
            tag: "blazer",
            condition: TagCondition::MessageContains("blazer"),
        },
        TagRule {
            tag: "camisa",
            condition: TagCondition::MessageContains("camisa"),
        },
        TagRule {
            tag: "pantalón",
            condition: TagCondition::MessageContains("pantalón"),
        },
        TagRule {
            tag: "falda",
            condition: TagCondition::MessageContains("falda"),
        },
        TagRule {
            tag: "consulta-talla",
            condition: TagCondition::MessageContains("talla"),
        },
        TagRule {
            tag: "consulta-precio",
            condition: TagCondition::MessageContains("precio"),
        },
        TagRule {
            tag: "consulta-envio",
            condition: TagCondition::MessageContains("envío"),
        },
        TagRule {
            tag: "con-telefono",
            condition: TagCondition::HasPhone,
        },
        TagRule {
            tag: "mensaje-detallado",
            condition: TagCondition::MessageLongerThan(DETAILED_MESSAGE_CHARS),
        },
    ]
}

/// Derives the tag set for a submission using the built-in rules.
///
/// Pure and deterministic: identical input always yields the identical
/// set, and set semantics make duplicates impossible.
#[must_use]
pub fn derive_tags(input: &TagInput) -> BTreeSet<String> {
    derive_tags_with(&default_rules(), input)
}

/// Derives the tag set for a submission using a caller-supplied rule list.
#[must_use]
pub fn derive_tags_with(rules: &[TagRule], input: &TagInput) -> BTreeSet<String> {
    rules
        .iter()
        .filter(|rule| rule.condition.holds(input))
        .map(|rule| rule.tag.to_owned())
        .collect()
}
