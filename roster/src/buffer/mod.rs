mod cell;

pub use cell::Cell;

use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a string starting at (x, y), returning the column after the
    /// last written cell. Wide characters occupy two columns; the second is
    /// marked as a continuation so it is never flushed on its own.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb, style: TextStyle) -> u16 {
        let mut cursor = x;
        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if cursor >= self.width || cursor + width > self.width {
                break;
            }

            self.set(
                cursor,
                y,
                Cell::new(ch).with_fg(fg).with_bg(bg).with_text_style(style),
            );
            if width == 2 {
                self.set(
                    cursor + 1,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        text_style: style,
                        wide_continuation: true,
                    },
                );
            }
            cursor += width;
        }
        cursor
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Fill every cell with the given colors, keeping the blank glyph.
    pub fn fill(&mut self, fg: Rgb, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg,
                bg,
                text_style: TextStyle::new(),
                wide_continuation: false,
            };
        }
    }
}
