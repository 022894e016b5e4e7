use crate::collapsible::Collapsible;

/// "Some enclosing collapsible is currently expanding."
///
/// The source environment would broadcast this ambiently down the tree; here
/// each node hands the flag to its children explicitly at update time.
/// Descendants only read it, the nearest ancestor writes it. A descendant
/// that updates while the flag is set skips its own height animation and
/// renders instantly, so nested collapsibles never double-animate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandContext {
    pub ancestor_expanding: bool,
}

impl ExpandContext {
    /// Context for a collapsible with no collapsible ancestors.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context to hand to `collapsible`'s descendants: set once any
    /// enclosing collapsible (this one included) is in the middle of an
    /// expand.
    pub fn descend(self, collapsible: &Collapsible) -> Self {
        Self {
            ancestor_expanding: self.ancestor_expanding
                || (collapsible.is_open() && collapsible.is_animating()),
        }
    }
}
