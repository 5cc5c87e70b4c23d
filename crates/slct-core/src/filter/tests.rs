use proptest::prelude::*;

use super::{matches_prefix, menu_entries, MenuEntry};
use slct_types::{SelectConfig, SelectOption};

fn colors() -> Vec<SelectOption<u32>> {
    vec![
        SelectOption::new("Red", 1),
        SelectOption::new("Blue", 2),
        SelectOption::new("black", 3),
        SelectOption::new("Green", 4),
    ]
}

#[test]
fn test_no_search_lists_everything_in_order() {
    let entries = menu_entries(&colors(), None, &SelectConfig::new());
    assert_eq!(
        entries,
        vec![MenuEntry::Option(0), MenuEntry::Option(1), MenuEntry::Option(2), MenuEntry::Option(3)]
    );
    assert_eq!(menu_entries(&colors(), Some(""), &SelectConfig::new()).len(), 4);
}

#[test]
fn test_prefix_is_case_insensitive() {
    let entries = menu_entries(&colors(), Some("B"), &SelectConfig::new());
    assert_eq!(entries, vec![MenuEntry::Option(1), MenuEntry::Option(2)]);
}

#[test]
fn test_prefix_not_substring() {
    let entries = menu_entries(&colors(), Some("lue"), &SelectConfig::new());
    assert!(entries.is_empty());
}

#[test]
fn test_create_entry_prepended() {
    let config = SelectConfig::new().with_creatable(true);
    let entries = menu_entries(&colors(), Some("bl"), &config);

    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], MenuEntry::Create { .. }));
    assert_eq!(
        entries[0],
        MenuEntry::Create { search: "bl".to_string(), label: "Create \"bl\"".to_string() }
    );
    assert_eq!(entries[1], MenuEntry::Option(1));
}

#[test]
fn test_no_create_entry_on_exact_value_match() {
    let options = vec![SelectOption::new("Teal", "teal".to_string())];
    let config = SelectConfig::new().with_creatable(true);

    let entries = menu_entries(&options, Some("teal"), &config);
    assert_eq!(entries, vec![MenuEntry::Option(0)]);

    // Label match alone is not enough: the value must equal the search text.
    let entries = menu_entries(&options, Some("Teal"), &config);
    assert!(matches!(entries[0], MenuEntry::Create { .. }));
}

#[test]
fn test_create_entry_without_any_match() {
    let config = SelectConfig::new().with_creatable(true);
    let entries = menu_entries(&colors(), Some("purple"), &config);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].option_index(), None);
}

#[test]
fn test_matches_prefix_unicode() {
    assert!(matches_prefix("Ärger", "är"));
    assert!(!matches_prefix("Ärger", "ar"));
}

fn arb_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C]{0,4}", 0..12)
}

proptest! {
    /// Filtering keeps exactly the prefix matches, in original order.
    #[test]
    fn prop_filter_is_ordered_prefix_match(labels in arb_labels(), search in "[a-cA-C]{0,2}") {
        let options: Vec<SelectOption<usize>> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| SelectOption::new(l.clone(), i))
            .collect();

        let got: Vec<usize> = menu_entries(&options, Some(search.as_str()), &SelectConfig::new())
            .into_iter()
            .filter_map(|e| e.option_index())
            .collect();

        let expected: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.to_lowercase().starts_with(&search.to_lowercase()))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// At most one create entry, and only ever at the front.
    #[test]
    fn prop_create_entry_only_first(labels in arb_labels(), search in "[a-c]{1,2}") {
        let options: Vec<SelectOption<String>> =
            labels.iter().map(|l| SelectOption::new(l.clone(), l.clone())).collect();
        let config = SelectConfig::new().with_creatable(true);

        let entries = menu_entries(&options, Some(search.as_str()), &config);
        let creates = entries.iter().filter(|e| matches!(e, MenuEntry::Create { .. })).count();

        prop_assert!(creates <= 1);
        if creates == 1 {
            let first_is_create = matches!(entries[0], MenuEntry::Create { .. });
            prop_assert!(first_is_create);
            prop_assert!(!labels.contains(&search));
        }
    }
}
