use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::text::truncate_to_width;
use crate::types::{Rgb, Style, Theme};

/// Render the element tree into the buffer, resolving state tags to styles
/// through the theme.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    theme: &dyn Theme,
    buf: &mut Buffer,
) {
    let base = theme.base();
    let fg = resolve_fg(&base, theme);
    let bg = resolve_bg(&base, theme);
    buf.fill(fg, bg);

    render_element(root, layout, theme, bg, buf);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    theme: &dyn Theme,
    inherited_bg: Rgb,
    buf: &mut Buffer,
) {
    // No rect means the element is hidden by a collapsed container.
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = element_style(element, theme);
    let fg = style
        .foreground
        .map(|color| color.to_rgb())
        .unwrap_or_else(|| resolve_fg(&theme.base(), theme));

    let mut bg = style
        .background
        .map(|color| color.to_rgb())
        .unwrap_or(inherited_bg);

    // Selection highlight covers the heading row only.
    if element.highlighted {
        bg = theme.highlight().to_rgb();
        fill_row(buf, rect.x, rect.right(), rect.y, bg);
    }

    if let Some(heading) = &element.heading {
        let text = truncate_to_width(heading, rect.width as usize);
        buf.set_str(rect.x, rect.y, &text, fg, bg, style.text_style);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let text = truncate_to_width(text, rect.width as usize);
            buf.set_str(rect.x, rect.y, &text, fg, bg, style.text_style);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, theme, inherited_bg, buf);
            }
        }
    }
}

fn element_style(element: &Element, theme: &dyn Theme) -> Style {
    if let Some(class) = element.class {
        theme.class_style(class)
    } else if let Some(role) = element.role {
        theme.role_style(role)
    } else {
        theme.base()
    }
}

fn resolve_fg(style: &Style, theme: &dyn Theme) -> Rgb {
    style
        .foreground
        .or(theme.base().foreground)
        .map(|color| color.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255))
}

fn resolve_bg(style: &Style, theme: &dyn Theme) -> Rgb {
    style
        .background
        .or(theme.base().background)
        .map(|color| color.to_rgb())
        .unwrap_or(Rgb::new(0, 0, 0))
}

fn fill_row(buf: &mut Buffer, x_start: u16, x_end: u16, y: u16, bg: Rgb) {
    for x in x_start..x_end.min(buf.width()) {
        if let Some(cell) = buf.get_mut(x, y) {
            cell.bg = bg;
        }
    }
}
