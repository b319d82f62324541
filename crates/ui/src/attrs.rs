use dioxus::prelude::*;

/// Flatten attribute groups into a single list, base attributes first.
///
/// Components build their own base attributes (class, data-* variants) and
/// append whatever the caller passed through `#[props(extends =
/// GlobalAttributes)]`. Caller attributes come last so they win when the
/// renderer resolves duplicates.
pub fn merge_attributes(groups: Vec<Vec<Attribute>>) -> Vec<Attribute> {
    groups.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_preserves_group_order() {
        let base = vec![Attribute::new("class", "button", None, false)];
        let caller = vec![
            Attribute::new("id", "save", None, false),
            Attribute::new("data-test", "x", None, false),
        ];
        let merged = merge_attributes(vec![base, caller]);
        let names: Vec<&str> = merged.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["class", "id", "data-test"]);
    }

    #[test]
    fn merge_of_empty_groups_is_empty() {
        assert_eq!(merge_attributes(vec![vec![], vec![]]).len(), 0);
    }
}
