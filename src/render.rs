//! Terminal output: a pair of in-memory cell layers composited into the
//! terminal each frame through a buffered crossterm writer.

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, event, execute, queue};
use std::io::{self, BufWriter, Stdout, Write};

/// One drawn character. A space is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: Color::Reset,
        }
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

/// A fixed-size drawing surface. The widget keeps two of these stacked:
/// the tree layer and the snow overlay.
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    /// Plot a character. Out-of-bounds coordinates are silently dropped so
    /// drawing code never has to clamp.
    pub fn set(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = Cell { ch, color };
    }

    pub fn get(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return Cell::default();
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Draw a string starting at (x, y), clipped to the surface.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.set(x + i as i32, y, ch, color);
            }
        }
    }

    /// Count of non-empty cells; used by tests to assert something was drawn.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Raw-mode terminal wrapper: alternate screen, hidden cursor, mouse
/// capture, and a full-frame buffered present.
pub struct TerminalRenderer {
    out: BufWriter<Stdout>,
    width: u16,
    height: u16,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            out: BufWriter::new(io::stdout()),
            width,
            height,
        })
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            Clear(ClearType::All)
        )
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn get_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn manual_resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;
        execute!(self.out, Clear(ClearType::All))
    }

    /// Composite the snow overlay on top of the tree layer and write the
    /// whole frame. Color changes are batched to keep the escape stream
    /// small.
    pub fn present(&mut self, base: &Canvas, overlay: &Canvas) -> io::Result<()> {
        let mut current_color = Color::Reset;
        queue!(self.out, cursor::MoveTo(0, 0), ResetColor)?;

        for y in 0..self.height {
            queue!(self.out, cursor::MoveTo(0, y))?;
            for x in 0..self.width {
                let over = overlay.get(x, y);
                let cell = if over.is_empty() { base.get(x, y) } else { over };

                if !cell.is_empty() && cell.color != current_color {
                    queue!(self.out, SetForegroundColor(cell.color))?;
                    current_color = cell.color;
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }

        self.out.flush()
    }
}
