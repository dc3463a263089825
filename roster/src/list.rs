use crate::model::{Friday, Roster};

/// Expansion state for one pizza night's guest list.
///
/// The `expanded` flag is the only authority on the group's state. The view
/// layer derives every on-screen tag from it, so the container, its guest
/// rows, and their name labels always agree by construction.
#[derive(Debug, Clone)]
pub struct GuestGroup {
    pub friday: Friday,
    expanded: bool,
}

impl GuestGroup {
    /// Groups start collapsed.
    pub fn new(friday: Friday) -> Self {
        Self {
            friday,
            expanded: false,
        }
    }

    /// Id of this group's container element in the view tree.
    pub fn element_id(&self) -> String {
        format!("friday-{}", self.friday.id)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded. Both directions are driven by
    /// the same activation; there is no terminal state. Returns the new
    /// state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

/// The whole roster plus interaction state.
#[derive(Debug, Clone)]
pub struct GuestList {
    groups: Vec<GuestGroup>,
    selected: usize,
}

impl GuestList {
    pub fn new(roster: Roster) -> Self {
        let groups = roster.fridays.into_iter().map(GuestGroup::new).collect();
        Self {
            groups,
            selected: 0,
        }
    }

    pub fn groups(&self) -> &[GuestGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&GuestGroup> {
        self.groups.get(self.selected)
    }

    /// Toggle the group owning the activated element. Activations on ids
    /// that belong to no group are ignored. Returns the group's new state.
    pub fn toggle(&mut self, element_id: &str) -> Option<bool> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.element_id() == element_id)?;
        let expanded = group.toggle();
        log::debug!(
            "[list] {} is now {}",
            element_id,
            if expanded { "expanded" } else { "collapsed" }
        );
        Some(expanded)
    }

    /// Toggle the keyboard-selected group.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        self.groups.get_mut(self.selected).map(GuestGroup::toggle)
    }

    pub fn select_next(&mut self) {
        if !self.groups.is_empty() {
            self.selected = (self.selected + 1) % self.groups.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.groups.is_empty() {
            self.selected = (self.selected + self.groups.len() - 1) % self.groups.len();
        }
    }
}
