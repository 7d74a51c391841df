//! The built-in rule set.

use crate::patterns::{pattern_rules, PatternError, CATALOG};
use crate::{
    button_label, color_contrast, form_control_label, heading_structure, image_alt,
    interactive_role, landmark_regions, ButtonLabel, ColorContrast, FormControlLabel,
    HeadingStructure, ImageAlt, InteractiveRole, LandmarkRegions,
};
use wcag_lint_core::RuleBox;

/// Ids of the element-model rules, in registration order.
const STRUCTURAL_IDS: &[&str] = &[
    interactive_role::ID,
    form_control_label::ID,
    image_alt::ID,
    button_label::ID,
    heading_structure::ID,
    landmark_regions::ID,
    color_contrast::ID,
];

/// Returns the rules that work on the parsed element model.
#[must_use]
pub fn structural_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InteractiveRole::new()),
        Box::new(FormControlLabel::new()),
        Box::new(ImageAlt::new()),
        Box::new(ButtonLabel::new()),
        Box::new(HeadingStructure::new()),
        Box::new(LandmarkRegions::new()),
        Box::new(ColorContrast::new()),
    ]
}

/// Returns all available rules: structural rules first, then the
/// pattern catalog.
///
/// # Errors
///
/// Returns [`PatternError`] if a catalog pattern fails to compile.
pub fn all_rules() -> Result<Vec<RuleBox>, PatternError> {
    let mut rules = structural_rules();
    rules.extend(
        pattern_rules()?
            .into_iter()
            .map(|rule| Box::new(rule) as RuleBox),
    );
    Ok(rules)
}

/// Ids of every built-in rule, in [`all_rules`] order.
#[must_use]
pub fn rule_ids() -> Vec<&'static str> {
    STRUCTURAL_IDS
        .iter()
        .copied()
        .chain(CATALOG.iter().map(|def| def.id))
        .collect()
}
