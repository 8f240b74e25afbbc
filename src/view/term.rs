//! Crossterm-backed [`Surface`] implementation.
//!
//! Commands are queued into the wrapped writer and pushed out by
//! [`Surface::flush`], so a burst of writes for one key event reaches the
//! terminal as a single syscall.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    style::Print,
    terminal::{self, Clear, ClearType, ScrollUp},
    QueueableCommand,
};

use super::surface::Surface;

/// A terminal surface over any `Write`, normally stdout in raw mode.
#[derive(Debug)]
pub struct TermSurface<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl TermSurface<Stdout> {
    /// Wrap stdout, sized from the current terminal.
    pub fn stdout() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            width,
            height,
        })
    }
}

impl<W: Write> TermSurface<W> {
    pub fn with_size(out: W, width: u16, height: u16) -> Self {
        Self { out, width, height }
    }

    /// Record a new terminal size, typically from a resize event. The
    /// caller is expected to trigger a full repaint afterwards.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn viewport_height(&self) -> u16 {
        self.height
    }

    fn viewport_width(&self) -> u16 {
        self.width
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        if row >= self.height || col >= self.width {
            return Ok(());
        }
        // Truncate instead of letting the terminal wrap onto the next row.
        let remaining = (self.width - col) as usize;
        let visible: String = text.chars().take(remaining).collect();
        self.out.queue(MoveTo(col, row))?.queue(Print(visible))?;
        Ok(())
    }

    fn clear_row(&mut self, row: u16) -> io::Result<()> {
        if row >= self.height {
            return Ok(());
        }
        self.out
            .queue(MoveTo(0, row))?
            .queue(Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn clear_from(&mut self, row: u16, col: u16) -> io::Result<()> {
        if row >= self.height || col >= self.width {
            return Ok(());
        }
        self.out
            .queue(MoveTo(col, row))?
            .queue(Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.out.queue(MoveTo(col, row))?;
        Ok(())
    }

    fn scroll_by(&mut self, n: u16) -> io::Result<()> {
        self.out.queue(ScrollUp(n))?;
        Ok(())
    }

    fn erase_all(&mut self) -> io::Result<()> {
        self.out
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
