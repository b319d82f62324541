use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

static NEXT_FIELD: AtomicU64 = AtomicU64::new(1);

/// Stable element ids for one form field instance.
///
/// The hint and error ids are what gets wired into `aria-describedby` on the
/// field's focusable element. Ids are allocated once per component instance
/// and survive re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIds {
    /// Id of the focusable element itself, also the `for` target of its label.
    pub field: String,
    /// Id of the hint text element.
    pub hint: String,
    /// Id of the error message element.
    pub error: String,
}

impl FieldIds {
    fn from_base(base: &str) -> Self {
        Self {
            field: base.to_string(),
            hint: format!("{base}-hint"),
            error: format!("{base}-error"),
        }
    }

    fn generate() -> Self {
        let n = NEXT_FIELD.fetch_add(1, Ordering::Relaxed);
        Self::from_base(&format!("atrium-field-{n}"))
    }

    /// The `aria-describedby` value for the current hint/error presence.
    ///
    /// The error id is only referenced while an error message is actually
    /// rendered; a dangling reference would be announced as silence by some
    /// screen readers.
    pub fn described_by(&self, has_hint: bool, has_error: bool) -> Option<String> {
        match (has_hint, has_error) {
            (true, true) => Some(format!("{} {}", self.hint, self.error)),
            (true, false) => Some(self.hint.clone()),
            (false, true) => Some(self.error.clone()),
            (false, false) => None,
        }
    }
}

/// Resolve the ids for a field instance: the caller's id if one was supplied,
/// otherwise a generated `atrium-field-<n>` base. Resolved once per instance.
pub fn use_field_ids(explicit: Option<String>) -> FieldIds {
    use_hook(move || match explicit {
        Some(base) => FieldIds::from_base(&base),
        None => FieldIds::generate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_base_is_respected() {
        let ids = FieldIds::from_base("due-date");
        assert_eq!(ids.field, "due-date");
        assert_eq!(ids.hint, "due-date-hint");
        assert_eq!(ids.error, "due-date-error");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = FieldIds::generate();
        let b = FieldIds::generate();
        assert_ne!(a.field, b.field);
    }

    #[test]
    fn described_by_reflects_presence() {
        let ids = FieldIds::from_base("f");
        assert_eq!(ids.described_by(false, false), None);
        assert_eq!(ids.described_by(true, false), Some("f-hint".to_string()));
        assert_eq!(ids.described_by(false, true), Some("f-error".to_string()));
        assert_eq!(
            ids.described_by(true, true),
            Some("f-hint f-error".to_string())
        );
    }
}
