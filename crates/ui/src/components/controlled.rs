use dioxus::prelude::*;

/// Who owns a component's value: the caller (controlled) or the component
/// itself (uncontrolled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Controlled,
    Uncontrolled,
}

impl ValueSource {
    /// Ownership follows from whether a `value` prop was supplied.
    pub fn resolve(controlled_value_present: bool) -> Self {
        if controlled_value_present {
            ValueSource::Controlled
        } else {
            ValueSource::Uncontrolled
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSource::Controlled)
    }
}

/// Resolve value ownership once for the lifetime of a component instance.
///
/// Components must not flip between controlled and uncontrolled mid-flight;
/// whatever mode the first render sees is the mode for the instance.
pub fn use_value_source<T>(controlled_value: &Option<T>) -> ValueSource {
    let present = controlled_value.is_some();
    use_hook(move || ValueSource::resolve(present))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn presence_of_value_prop_decides_ownership() {
        assert_eq!(ValueSource::resolve(true), ValueSource::Controlled);
        assert_eq!(ValueSource::resolve(false), ValueSource::Uncontrolled);
        assert!(ValueSource::Controlled.is_controlled());
        assert!(!ValueSource::Uncontrolled.is_controlled());
    }
}
