use std::sync::atomic::{AtomicU64, Ordering};

use super::{Class, Role};
use crate::types::Direction;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Content of an element: a text run or nested children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the guest list presentation tree.
///
/// The tree is rebuilt from the roster state on every frame. Elements carry
/// derived presentation tags only; the authoritative expansion state lives
/// on the owning [`GuestGroup`](crate::list::GuestGroup).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,

    /// Derived state tag, resolved to a style by the theme.
    pub class: Option<Class>,

    /// Named purpose of this node within its parent row.
    pub role: Option<Role>,

    /// Heading line of a group container. Rendered on the container's first
    /// row in the container's own style; the children below it stay exactly
    /// the guest rows.
    pub heading: Option<String>,

    /// Layout direction for children.
    pub direction: Direction,

    pub clickable: bool,

    /// Keyboard selection highlight.
    pub highlighted: bool,

    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            class: None,
            role: None,
            heading: None,
            direction: Direction::Column,
            clickable: false,
            highlighted: false,
            content: Content::None,
        }
    }
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn column() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a group container with a heading line. Children added later
    /// are hidden while the container's tag says collapsed.
    pub fn group(heading: impl Into<String>) -> Self {
        Self {
            id: generate_id("group"),
            heading: Some(heading.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.class = Some(class);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, or an empty slice for leaf elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Find the first direct child carrying the given role.
    pub fn find_role(&self, role: Role) -> Option<&Element> {
        self.child_elements()
            .iter()
            .find(|child| child.role == Some(role))
    }

    /// Text content, if this is a text leaf.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
