use super::{Color, Style};
use crate::element::{Class, Role};

/// Maps derived state tags and roles to concrete styles.
pub trait Theme: Send + Sync {
    /// Style for a tagged element.
    fn class_style(&self, class: Class) -> Style;

    /// Style for an untagged element with a role.
    fn role_style(&self, role: Role) -> Style;

    /// Base fill for the whole surface.
    fn base(&self) -> Style;

    /// Background for the keyboard-selected heading row.
    fn highlight(&self) -> Color;
}

/// Built-in dark theme.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::oklch(0.16, 0.015, 260.0),
            foreground: Color::oklch(0.92, 0.01, 260.0),
            muted: Color::oklch(0.62, 0.02, 260.0),
            accent: Color::oklch(0.72, 0.14, 55.0),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn class_style(&self, class: Class) -> Style {
        match class {
            Class::GuestLevel => Style::new().foreground(self.muted),
            Class::GuestLevelExpanded => Style::new().foreground(self.accent).bold(),
            Class::Guest => Style::new().foreground(self.muted).dim(),
            Class::GuestExpanded => Style::new().foreground(self.foreground),
            Class::GuestName => Style::new().foreground(self.muted).dim(),
            Class::GuestNameExpanded => Style::new().foreground(self.foreground.lighten(0.05)),
        }
    }

    fn role_style(&self, role: Role) -> Style {
        match role {
            Role::Marker => Style::new().foreground(self.accent),
            Role::NameLabel => Style::new().foreground(self.foreground),
            Role::Email => Style::new().foreground(self.muted).dim(),
        }
    }

    fn base(&self) -> Style {
        Style::new()
            .foreground(self.foreground)
            .background(self.background)
    }

    fn highlight(&self) -> Color {
        self.background.lighten(0.1)
    }
}
