//! Structural queries over a parsed element model.
//!
//! Every query is a pure filter over [`ParseResult::elements`] and returns
//! matches in document order.

use crate::model::{Element, ParseResult};

/// Returns every element accepted by `predicate`.
pub fn find<'a, P>(parsed: &'a ParseResult, predicate: P) -> Vec<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    parsed.elements.iter().filter(|e| predicate(e)).collect()
}

/// Elements of the given type, compared case-insensitively.
#[must_use]
pub fn by_type<'a>(parsed: &'a ParseResult, element_type: &str) -> Vec<&'a Element> {
    find(parsed, |e| e.is_type(element_type))
}

/// Elements carrying the given attribute key.
#[must_use]
pub fn with_attribute<'a>(parsed: &'a ParseResult, name: &str) -> Vec<&'a Element> {
    find(parsed, |e| e.has_attribute(name))
}

/// `div`/`span` elements with a click handler but no `role`.
#[must_use]
pub fn interactive_without_role(parsed: &ParseResult) -> Vec<&Element> {
    find(parsed, |e| {
        e.is_any_type(&["div", "span"]) && has_click_handler(e) && !e.has_attribute("role")
    })
}

/// `input`/`select`/`textarea` elements with neither an `id` nor an accessible name.
#[must_use]
pub fn unlabeled_form_controls(parsed: &ParseResult) -> Vec<&Element> {
    find(parsed, |e| {
        e.is_any_type(&["input", "select", "textarea"])
            && !e.has_attribute("id")
            && !e.has_accessible_name()
    })
}

/// `img` elements without an `alt` attribute. `alt=""` counts as present.
#[must_use]
pub fn images_without_alt(parsed: &ParseResult) -> Vec<&Element> {
    find(parsed, |e| e.is_type("img") && !e.has_attribute("alt"))
}

/// `button` elements with no accessible name and no child content.
#[must_use]
pub fn unlabeled_buttons(parsed: &ParseResult) -> Vec<&Element> {
    find(parsed, |e| {
        e.is_type("button") && !e.has_accessible_name() && !e.has_children
    })
}

fn has_click_handler(element: &Element) -> bool {
    element
        .attributes
        .keys()
        .any(|k| k.eq_ignore_ascii_case("onclick"))
}
