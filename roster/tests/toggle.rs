use chrono::NaiveDate;
use roster::{view, Class, Element, Friday, Guest, GuestList, Role, Roster};

fn friday(id: i64, day: u32, guests: Vec<Guest>) -> Friday {
    Friday {
        id,
        date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
        details: None,
        max_guests: 10,
        guests,
    }
}

fn guest(name: &str) -> Guest {
    Guest {
        name: name.to_string(),
        email: None,
    }
}

fn sample_list() -> GuestList {
    GuestList::new(Roster {
        fridays: vec![
            friday(1, 7, vec![guest("Ada"), guest("Grace")]),
            friday(2, 14, vec![]),
        ],
    })
}

fn container<'a>(root: &'a Element, id: &str) -> &'a Element {
    roster::find_element(root, id).unwrap()
}

// ============================================================================
// Derived State Tags
// ============================================================================

#[test]
fn test_groups_start_collapsed() {
    let list = sample_list();
    let root = view(&list);

    let group = container(&root, "friday-1");
    assert_eq!(group.class, Some(Class::GuestLevel));
    assert_eq!(group.class.unwrap().as_str(), "guest-level");

    for row in group.child_elements() {
        assert_eq!(row.class, Some(Class::Guest));
        let label = row.find_role(Role::NameLabel).unwrap();
        assert_eq!(label.class, Some(Class::GuestName));
    }
}

#[test]
fn test_toggle_expands_container_guests_and_labels() {
    let mut list = sample_list();
    assert_eq!(list.toggle("friday-1"), Some(true));

    let root = view(&list);
    let group = container(&root, "friday-1");
    assert_eq!(group.class, Some(Class::GuestLevelExpanded));

    for row in group.child_elements() {
        assert_eq!(row.class, Some(Class::GuestExpanded));
        let label = row.find_role(Role::NameLabel).unwrap();
        assert_eq!(label.class, Some(Class::GuestNameExpanded));
    }
}

#[test]
fn test_toggle_back_collapses_everything() {
    let mut list = sample_list();
    assert_eq!(list.toggle("friday-1"), Some(true));
    assert_eq!(list.toggle("friday-1"), Some(false));

    let root = view(&list);
    let group = container(&root, "friday-1");
    assert_eq!(group.class, Some(Class::GuestLevel));

    for row in group.child_elements() {
        assert_eq!(row.class, Some(Class::Guest));
        let label = row.find_role(Role::NameLabel).unwrap();
        assert_eq!(label.class, Some(Class::GuestName));
    }
}

#[test]
fn test_double_toggle_round_trips_the_tree() {
    let mut list = sample_list();
    let before = view(&list);

    list.toggle("friday-1");
    list.toggle("friday-1");

    assert_eq!(view(&list), before);
}

#[test]
fn test_expand_scenario_uses_exact_tag_names() {
    // Two guests, each row carrying a marker and a name label.
    let mut list = sample_list();
    let root = view(&list);
    assert_eq!(
        container(&root, "friday-1").class.unwrap().as_str(),
        "guest-level"
    );

    list.toggle("friday-1");
    let root = view(&list);
    let group = container(&root, "friday-1");

    assert_eq!(group.class.unwrap().as_str(), "guest-level-expanded");
    assert_eq!(group.child_elements().len(), 2);
    for row in group.child_elements() {
        assert_eq!(row.class.unwrap().as_str(), "guest-expanded");
        let label = row.find_role(Role::NameLabel).unwrap();
        assert_eq!(label.class.unwrap().as_str(), "guest-name-expanded");
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_group_with_no_guests_still_toggles() {
    let mut list = sample_list();
    assert_eq!(list.toggle("friday-2"), Some(true));

    let root = view(&list);
    let group = container(&root, "friday-2");
    assert_eq!(group.class, Some(Class::GuestLevelExpanded));
    assert!(group.child_elements().is_empty());

    assert_eq!(list.toggle("friday-2"), Some(false));
}

#[test]
fn test_unknown_element_id_is_ignored() {
    let mut list = sample_list();
    assert_eq!(list.toggle("friday-999"), None);

    let root = view(&list);
    assert_eq!(container(&root, "friday-1").class, Some(Class::GuestLevel));
    assert_eq!(container(&root, "friday-2").class, Some(Class::GuestLevel));
}

#[test]
fn test_toggle_only_affects_its_group() {
    let mut list = sample_list();
    list.toggle("friday-1");

    let root = view(&list);
    assert_eq!(
        container(&root, "friday-1").class,
        Some(Class::GuestLevelExpanded)
    );
    assert_eq!(container(&root, "friday-2").class, Some(Class::GuestLevel));
}

#[test]
fn test_every_guest_row_carries_a_name_label() {
    let mut list = sample_list();

    for _ in 0..2 {
        let root = view(&list);
        let group = container(&root, "friday-1");
        let names: Vec<_> = group
            .child_elements()
            .iter()
            .map(|row| {
                row.find_role(Role::NameLabel)
                    .and_then(|label| label.text_content())
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["Ada", "Grace"]);

        list.toggle("friday-1");
    }
}

// ============================================================================
// Keyboard Selection
// ============================================================================

#[test]
fn test_selection_wraps_both_ways() {
    let mut list = sample_list();
    assert_eq!(list.selected_index(), 0);

    list.select_next();
    assert_eq!(list.selected_index(), 1);
    list.select_next();
    assert_eq!(list.selected_index(), 0);

    list.select_prev();
    assert_eq!(list.selected_index(), 1);
}

#[test]
fn test_toggle_selected_targets_the_selected_group() {
    let mut list = sample_list();
    list.select_next();
    assert_eq!(list.toggle_selected(), Some(true));

    let root = view(&list);
    assert_eq!(container(&root, "friday-1").class, Some(Class::GuestLevel));
    assert_eq!(
        container(&root, "friday-2").class,
        Some(Class::GuestLevelExpanded)
    );
}

#[test]
fn test_toggle_selected_on_empty_roster() {
    let mut list = GuestList::new(Roster::default());
    assert_eq!(list.toggle_selected(), None);
    list.select_next();
    list.select_prev();
    assert_eq!(list.selected_index(), 0);
}
