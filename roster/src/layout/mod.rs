mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::Direction;

/// Indentation of guest rows under their group heading.
const GROUP_INDENT: u16 = 2;
/// Gap between the parts of a guest row.
const ROW_GAP: u16 = 1;

/// Computed rects by element id. Elements hidden by a collapsed container
/// have no entry; they are invisible and unhittable.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay the guest list out as lines of text.
///
/// A group container takes one row for its heading. While its tag says
/// expanded, each guest row follows on its own indented line; while it says
/// collapsed, the guests receive no rect at all. A container's own rect
/// spans its heading and every visible guest line, so a click anywhere
/// inside the group resolves to the container, like the original bubbling
/// click.
pub fn layout(root: &Element, area: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if !area.is_empty() {
        place(root, area.x, area.y, area, &mut result);
    }
    result
}

/// Place an element at (x, y), returning the number of rows consumed.
fn place(element: &Element, x: u16, y: u16, area: Rect, out: &mut LayoutResult) -> u16 {
    if y >= area.bottom() || x >= area.right() {
        return 0;
    }

    match &element.content {
        Content::None => {
            out.insert(element.id.clone(), Rect::new(x, y, 0, 1));
            1
        }
        Content::Text(text) => {
            let width = (display_width(text) as u16).min(area.right() - x);
            out.insert(element.id.clone(), Rect::new(x, y, width, 1));
            1
        }
        Content::Children(children) => match (element.heading.is_some(), element.direction) {
            (true, _) => place_group(element, children, x, y, area, out),
            (false, Direction::Row) => place_row(element, children, x, y, area, out),
            (false, Direction::Column) => place_column(element, children, x, y, area, out),
        },
    }
}

fn place_group(
    element: &Element,
    children: &[Element],
    x: u16,
    y: u16,
    area: Rect,
    out: &mut LayoutResult,
) -> u16 {
    // Heading row first; guests only while the derived tag says expanded.
    let mut height = 1;

    let expanded = element.class.is_none_or(|class| class.is_expanded());
    if expanded {
        let child_x = (x + GROUP_INDENT).min(area.right());
        for child in children {
            height += place(child, child_x, y + height, area, out);
        }
    }

    out.insert(element.id.clone(), Rect::new(x, y, area.right() - x, height));
    height
}

fn place_row(
    element: &Element,
    children: &[Element],
    x: u16,
    y: u16,
    area: Rect,
    out: &mut LayoutResult,
) -> u16 {
    let mut cursor = x;
    for child in children {
        if cursor >= area.right() {
            break;
        }
        let consumed = place(child, cursor, y, area, out);
        if consumed > 0 {
            if let Some(rect) = out.get(&child.id) {
                cursor = rect.right() + ROW_GAP;
            }
        }
    }

    out.insert(element.id.clone(), Rect::new(x, y, area.right() - x, 1));
    1
}

fn place_column(
    element: &Element,
    children: &[Element],
    x: u16,
    y: u16,
    area: Rect,
    out: &mut LayoutResult,
) -> u16 {
    let mut height = 0;
    for child in children {
        height += place(child, x, y + height, area, out);
    }

    out.insert(element.id.clone(), Rect::new(x, y, area.right() - x, height));
    height
}
