/// Interaction state of an input field, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Inactive,
    /// Pointer over the field.
    Hovered,
    /// Reserved for a field holding content; never entered, styled like
    /// [`VisualState::Inactive`].
    Activated,
    /// The field's editor holds keyboard focus.
    Focused,
}

impl VisualState {
    /// Resolves the state from this frame's predicates. Focus outranks hover
    /// and a disabled frame is always inactive.
    pub fn resolve(hovered: bool, focused: bool, disabled: bool) -> Self {
        if disabled {
            return Self::Inactive;
        }
        if focused {
            Self::Focused
        } else if hovered {
            Self::Hovered
        } else {
            Self::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_outranks_hover_unless_disabled() {
        for hovered in [false, true] {
            for focused in [false, true] {
                let expected = match (hovered, focused) {
                    (_, true) => VisualState::Focused,
                    (true, false) => VisualState::Hovered,
                    (false, false) => VisualState::Inactive,
                };
                assert_eq!(VisualState::resolve(hovered, focused, false), expected);
                assert_eq!(VisualState::resolve(hovered, focused, true), VisualState::Inactive);
            }
        }
    }
}
