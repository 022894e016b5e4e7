//! Class tokens sourced from the external stylesheet.
//!
//! The stylesheet is an opaque collaborator: these constants name its hooks
//! and all of the actual visual/animation CSS lives outside this crate.

pub const COLLAPSIBLE: &str = "Collapsible";
pub const OPEN: &str = "open";
pub const ANIMATING: &str = "animating";
pub const FULLY_OPEN: &str = "fullyOpen";
pub const EXPAND_ON_PRINT: &str = "expandOnPrint";

/// Concatenate the tokens whose condition holds, keeping declaration order.
pub fn class_names(tokens: &[(&'static str, bool)]) -> Vec<&'static str> {
    tokens
        .iter()
        .filter(|(_, on)| *on)
        .map(|(token, _)| *token)
        .collect()
}
