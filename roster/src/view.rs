use crate::element::{Class, Element, Role};
use crate::list::{GuestGroup, GuestList};
use crate::model::Guest;

const COLLAPSED_GLYPH: char = '▸';
const EXPANDED_GLYPH: char = '▾';

/// Build the element tree for the current roster state.
///
/// Every state tag in the tree is derived here from each group's expansion
/// flag. Ids are stable across rebuilds so activations hit the same group
/// frame after frame.
pub fn view(list: &GuestList) -> Element {
    let selected = list.selected_index();
    Element::column().id("guest-list").children(
        list.groups()
            .iter()
            .enumerate()
            .map(|(index, group)| group_element(group, index == selected)),
    )
}

fn group_element(group: &GuestGroup, selected: bool) -> Element {
    let expanded = group.is_expanded();
    let friday = &group.friday;

    let glyph = if expanded {
        EXPANDED_GLYPH
    } else {
        COLLAPSED_GLYPH
    };
    let mut heading = format!("{glyph} {}", friday.heading());
    if friday.is_full() {
        heading.push_str(" · full");
    }
    if expanded {
        if let Some(details) = &friday.details {
            heading.push_str(" — ");
            heading.push_str(details);
        }
    }

    let group_id = group.element_id();
    Element::group(heading)
        .id(&group_id)
        .class(Class::guest_level(expanded))
        .clickable(true)
        .highlighted(selected)
        .children(
            friday
                .guests
                .iter()
                .enumerate()
                .map(|(index, guest)| guest_element(&group_id, index, guest, expanded)),
        )
}

fn guest_element(group_id: &str, index: usize, guest: &Guest, expanded: bool) -> Element {
    let guest_id = format!("{group_id}-guest-{index}");

    let mut row = Element::row()
        .id(&guest_id)
        .class(Class::guest(expanded))
        .child(
            Element::text("•")
                .id(format!("{guest_id}-marker"))
                .role(Role::Marker),
        )
        .child(
            Element::text(&guest.name)
                .id(format!("{guest_id}-name"))
                .class(Class::guest_name(expanded))
                .role(Role::NameLabel),
        );

    if let Some(email) = &guest.email {
        row = row.child(
            Element::text(email)
                .id(format!("{guest_id}-email"))
                .role(Role::Email),
        );
    }

    row
}
