pub mod buffer;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod list;
pub mod model;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;
pub mod view;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Class, Content, Element, Role};
pub use error::RosterError;
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use list::{GuestGroup, GuestList};
pub use model::{Friday, Guest, Roster};
pub use terminal::Terminal;
pub use types::*;
pub use view::view;
