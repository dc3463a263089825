use chrono::NaiveDate;
use roster::{layout, view, Friday, Guest, GuestList, Rect, Roster};

fn sample_list() -> GuestList {
    GuestList::new(Roster {
        fridays: vec![
            Friday {
                id: 1,
                date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                details: None,
                max_guests: 10,
                guests: vec![
                    Guest {
                        name: "Ada".to_string(),
                        email: None,
                    },
                    Guest {
                        name: "Grace".to_string(),
                        email: None,
                    },
                ],
            },
            Friday {
                id: 2,
                date: NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
                details: None,
                max_guests: 10,
                guests: vec![],
            },
        ],
    })
}

// ============================================================================
// Group Rows
// ============================================================================

#[test]
fn test_collapsed_group_takes_one_row() {
    let list = sample_list();
    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 12));

    assert_eq!(result.get("friday-1"), Some(&Rect::new(0, 0, 40, 1)));
    assert_eq!(result.get("friday-2"), Some(&Rect::new(0, 1, 40, 1)));
    assert_eq!(result.get("guest-list"), Some(&Rect::new(0, 0, 40, 2)));
}

#[test]
fn test_expanded_group_lays_guests_on_indented_rows() {
    let mut list = sample_list();
    list.toggle("friday-1");

    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 12));

    // Heading plus one row per guest
    assert_eq!(result.get("friday-1"), Some(&Rect::new(0, 0, 40, 3)));

    let first = result.get("friday-1-guest-0").unwrap();
    assert_eq!((first.x, first.y), (2, 1));
    let second = result.get("friday-1-guest-1").unwrap();
    assert_eq!((second.x, second.y), (2, 2));

    // The next group moves down past the expanded rows
    assert_eq!(result.get("friday-2"), Some(&Rect::new(0, 3, 40, 1)));
}

#[test]
fn test_name_label_sits_after_the_marker() {
    let mut list = sample_list();
    list.toggle("friday-1");

    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 12));

    let marker = result.get("friday-1-guest-0-marker").unwrap();
    assert_eq!(marker, &Rect::new(2, 1, 1, 1));

    let label = result.get("friday-1-guest-0-name").unwrap();
    assert_eq!(label.x, marker.right() + 1);
    assert_eq!(label.width, 3); // "Ada"
}

#[test]
fn test_collapsed_guests_have_no_rect() {
    let list = sample_list();
    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 12));

    assert!(result.get("friday-1-guest-0").is_none());
    assert!(result.get("friday-1-guest-0-name").is_none());
}

#[test]
fn test_empty_group_expanded_keeps_its_heading_row() {
    let mut list = sample_list();
    list.toggle("friday-2");

    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 12));

    assert_eq!(result.get("friday-2"), Some(&Rect::new(0, 1, 40, 1)));
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn test_rows_past_the_bottom_are_dropped() {
    let mut list = sample_list();
    list.toggle("friday-1");

    let root = view(&list);
    let result = layout(&root, Rect::from_size(40, 2));

    assert!(result.get("friday-1-guest-0").is_some());
    assert!(result.get("friday-1-guest-1").is_none());
    assert!(result.get("friday-2").is_none());

    // The container rect covers the visible rows only
    assert_eq!(result.get("friday-1"), Some(&Rect::new(0, 0, 40, 2)));
}

#[test]
fn test_long_names_are_clipped_to_the_viewport() {
    let mut list = GuestList::new(Roster {
        fridays: vec![Friday {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            details: None,
            max_guests: 10,
            guests: vec![Guest {
                name: "Someone With A Very Long Name Indeed".to_string(),
                email: None,
            }],
        }],
    });
    list.toggle("friday-1");

    let root = view(&list);
    let result = layout(&root, Rect::from_size(12, 4));

    let label = result.get("friday-1-guest-0-name").unwrap();
    assert_eq!(label.right(), 12);
}

#[test]
fn test_empty_area_yields_no_rects() {
    let list = sample_list();
    let root = view(&list);

    assert!(layout(&root, Rect::from_size(0, 0)).is_empty());
}
