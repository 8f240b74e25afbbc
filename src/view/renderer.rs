//! Viewport projection.
//!
//! Pure functions from session state to [`Surface`] writes. Two render
//! granularities: incremental (one row, or just the cursor) for
//! per-keystroke edits, and full (erase and rewrite every visible row) for
//! pan changes, line resets and resizes.
//!
//! Row layout: the scrollback window occupies the top `height - 1` rows.
//! In the live view the prompt+input row sits directly below the last
//! visible scrollback row, so it starts at the top of an empty screen and
//! advances downward until it pins to the bottom row. While panning, the
//! bottom row shows a position indicator instead of the prompt.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::model::{LineBuffer, Scrollback};

use super::surface::Surface;

/// Height of the scrollback window for a given viewport: everything except
/// the input/indicator row.
pub fn window_height(surface: &dyn Surface) -> usize {
    surface.viewport_height().saturating_sub(1) as usize
}

/// The row the live prompt+input occupies: just below the visible
/// scrollback, pinned to the bottom once the window is full.
pub fn input_row(scrollback_len: usize, viewport_height: u16) -> u16 {
    let window = viewport_height.saturating_sub(1) as usize;
    scrollback_len.min(window) as u16
}

/// Repaint the prompt+input row and park the cursor after the edit point.
pub fn draw_input_row(
    surface: &mut dyn Surface,
    prompt: &str,
    line: &LineBuffer,
    row: u16,
) -> io::Result<()> {
    let text = format!("{prompt}{}", line.text());
    surface.write_at(row, 0, &text)?;
    // Erase whatever the previous, possibly longer line left behind.
    let end = text.width().min(surface.viewport_width() as usize) as u16;
    surface.clear_from(row, end)?;
    park_cursor(surface, prompt, line, row)
}

/// Move the visible cursor to the edit point without redrawing text.
pub fn park_cursor(
    surface: &mut dyn Surface,
    prompt: &str,
    line: &LineBuffer,
    row: u16,
) -> io::Result<()> {
    let col = (prompt.width() + line.cursor())
        .min(surface.viewport_width().saturating_sub(1) as usize) as u16;
    surface.move_cursor(row, col)
}

/// Erase the viewport and rewrite every visible row from the scrollback
/// window, overlaying the live prompt+input row when not panned.
pub fn draw_full(
    surface: &mut dyn Surface,
    prompt: &str,
    line: &LineBuffer,
    scrollback: &Scrollback,
) -> io::Result<()> {
    let height = surface.viewport_height();
    if height == 0 {
        return Ok(());
    }
    let window = height.saturating_sub(1) as usize;

    surface.erase_all()?;
    let rows: Vec<&str> = scrollback.window(window).collect();
    for (row, text) in rows.iter().enumerate() {
        surface.write_at(row as u16, 0, text)?;
    }

    if scrollback.is_live() {
        draw_input_row(surface, prompt, line, rows.len() as u16)
    } else {
        draw_pan_indicator(surface, scrollback)
    }
}

/// Incremental repaint after one row was appended while live: the new row
/// lands where the input row was, and the input row moves down (or the
/// viewport scrolls once the window is full).
pub fn append_live_row(
    surface: &mut dyn Surface,
    prompt: &str,
    line: &LineBuffer,
    scrollback: &Scrollback,
    newest: &str,
) -> io::Result<()> {
    let height = surface.viewport_height();
    if height == 0 {
        return Ok(());
    }
    let window = height.saturating_sub(1) as usize;
    if window == 0 {
        return draw_input_row(surface, prompt, line, 0);
    }

    let len = scrollback.len();
    let newest_row = if len <= window {
        len.saturating_sub(1) as u16
    } else {
        surface.scroll_by(1)?;
        height - 2
    };
    surface.clear_row(newest_row)?;
    surface.write_at(newest_row, 0, newest)?;
    draw_input_row(surface, prompt, line, newest_row + 1)
}

fn draw_pan_indicator(surface: &mut dyn Surface, scrollback: &Scrollback) -> io::Result<()> {
    let height = surface.viewport_height();
    let window = height.saturating_sub(1) as usize;
    let row = height - 1;
    let indicator = format!(
        "[scrollback {}/{}]",
        scrollback.pan_offset(),
        scrollback.max_pan(window)
    );
    surface.clear_row(row)?;
    surface.write_at(row, 0, &indicator)?;
    let col = indicator
        .width()
        .min(surface.viewport_width().saturating_sub(1) as usize) as u16;
    surface.move_cursor(row, col)
}
