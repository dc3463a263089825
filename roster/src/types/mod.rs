mod color;
mod enums;
mod style;
mod theme;

pub use color::{Color, Rgb};
pub use enums::{Direction, TextStyle};
pub use style::Style;
pub use theme::{DefaultTheme, Theme};
