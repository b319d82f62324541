/// Where the floating label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    /// Centered in the field, acting as the placeholder.
    Resting,
    /// Small and raised above the value.
    Floated,
}

impl LabelPosition {
    pub fn class(&self) -> &'static str {
        match self {
            LabelPosition::Resting => "resting",
            LabelPosition::Floated => "floated",
        }
    }
}

/// Which color the floating label takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Muted,
    Accent,
    Error,
}

impl LabelColor {
    pub fn class(&self) -> &'static str {
        match self {
            LabelColor::Muted => "muted",
            LabelColor::Accent => "accent",
            LabelColor::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingLabelState {
    pub position: LabelPosition,
    pub color: LabelColor,
}

/// Derive the label's position and color.
///
/// Position and color are never stored: they are a function of the listbox
/// being open, a value being selected, and the error flag. Error always wins
/// the color; an open listbox wins accent; everything else is muted.
pub fn label_state(is_open: bool, has_value: bool, is_error: bool) -> FloatingLabelState {
    let position = if is_open || has_value {
        LabelPosition::Floated
    } else {
        LabelPosition::Resting
    };
    let color = if is_error {
        LabelColor::Error
    } else if is_open {
        LabelColor::Accent
    } else {
        LabelColor::Muted
    };
    FloatingLabelState { position, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_floats_when_open_or_holding_a_value() {
        assert_eq!(label_state(false, false, false).position, LabelPosition::Resting);
        assert_eq!(label_state(true, false, false).position, LabelPosition::Floated);
        assert_eq!(label_state(false, true, false).position, LabelPosition::Floated);
        assert_eq!(label_state(true, true, false).position, LabelPosition::Floated);
    }

    #[test]
    fn closing_without_a_value_reverts_to_resting() {
        let open = label_state(true, false, false);
        assert_eq!(open.position, LabelPosition::Floated);
        let closed = label_state(false, false, false);
        assert_eq!(closed.position, LabelPosition::Resting);

        // a selected value keeps it floated after close
        assert_eq!(label_state(false, true, false).position, LabelPosition::Floated);
    }

    #[test]
    fn error_color_wins_over_everything() {
        for is_open in [false, true] {
            for has_value in [false, true] {
                assert_eq!(
                    label_state(is_open, has_value, true).color,
                    LabelColor::Error
                );
            }
        }
    }

    #[test]
    fn open_gets_accent_otherwise_muted() {
        assert_eq!(label_state(true, false, false).color, LabelColor::Accent);
        assert_eq!(label_state(true, true, false).color, LabelColor::Accent);
        assert_eq!(label_state(false, false, false).color, LabelColor::Muted);
        assert_eq!(label_state(false, true, false).color, LabelColor::Muted);
    }
}
