use std::fmt;

/// State tags for the guest list tree.
///
/// Tags come in collapsed/expanded pairs for the three node kinds: the group
/// container, each guest row, and each guest's name label. They are derived
/// from a group's expansion flag every time the view is built, never stored
/// on their own, so the container and its descendants cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    GuestLevel,
    GuestLevelExpanded,
    Guest,
    GuestExpanded,
    GuestName,
    GuestNameExpanded,
}

impl Class {
    /// Tag for a group container in the given state.
    pub fn guest_level(expanded: bool) -> Self {
        if expanded {
            Self::GuestLevelExpanded
        } else {
            Self::GuestLevel
        }
    }

    /// Tag for a guest row in the given state.
    pub fn guest(expanded: bool) -> Self {
        if expanded {
            Self::GuestExpanded
        } else {
            Self::Guest
        }
    }

    /// Tag for a guest's name label in the given state.
    pub fn guest_name(expanded: bool) -> Self {
        if expanded {
            Self::GuestNameExpanded
        } else {
            Self::GuestName
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(
            self,
            Self::GuestLevelExpanded | Self::GuestExpanded | Self::GuestNameExpanded
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GuestLevel => "guest-level",
            Self::GuestLevelExpanded => "guest-level-expanded",
            Self::Guest => "guest",
            Self::GuestExpanded => "guest-expanded",
            Self::GuestName => "guest-name",
            Self::GuestNameExpanded => "guest-name-expanded",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named purpose of a node within its guest row.
///
/// Lookups go through the role, not the child's position, so a row with a
/// missing or reordered part can never cause an out-of-bounds access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Marker,
    NameLabel,
    Email,
}
