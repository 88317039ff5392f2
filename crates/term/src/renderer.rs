//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written. [`TerminalFrontend`] wires this to the engine's [`Renderer`]
//! seam so a driver can draw snapshots directly.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::engine::Renderer;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers,
    /// so the caller gets the old frame back to draw the next one into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Snapshot-to-terminal pipeline: view, reusable framebuffer, diffing output.
pub struct TerminalFrontend<W: Write = io::Stdout> {
    term: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    /// Fixed viewport; `None` asks the terminal for its size every frame.
    viewport: Option<Viewport>,
}

impl TerminalFrontend<io::Stdout> {
    pub fn new(view: GameView) -> Self {
        Self::with_renderer(TerminalRenderer::new(), view)
    }
}

impl<W: Write> TerminalFrontend<W> {
    pub fn with_renderer(term: TerminalRenderer<W>, view: GameView) -> Self {
        Self {
            term,
            view,
            fb: FrameBuffer::new(0, 0),
            viewport: None,
        }
    }

    /// Draw into a fixed viewport instead of querying the terminal.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn terminal(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.term
    }

    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or_else(|| {
            let (w, h) = terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }
}

impl<W: Write> Renderer for TerminalFrontend<W> {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }
    for (y, (old, new)) in prev
        .cells()
        .chunks_exact(w)
        .zip(next.cells().chunks_exact(w))
        .enumerate()
    {
        let mut x = 0;
        while x < w {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && old[x] != new[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::CellStyle;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.put_char(x, 0, 'X', style);
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_runs_split_per_row_and_gap() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(4, 2);
        let mut b = FrameBuffer::new(4, 2);
        b.put_char(0, 0, 'A', style);
        b.put_char(3, 0, 'B', style);
        b.put_char(1, 1, 'C', style);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 1), (3, 0, 1), (1, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let fb = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn draw_swap_full_then_diff() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let style = CellStyle::default();

        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "ABCD", style);
        term.draw_swap(&mut fb).unwrap();
        let first_len = term.out.len();
        assert!(String::from_utf8_lossy(&term.out).contains("ABCD"));

        // Only one cell changes, so only that glyph is written.
        fb.put_str(0, 0, "ABXD", style);
        term.draw_swap(&mut fb).unwrap();
        let second = String::from_utf8_lossy(&term.out[first_len..]).into_owned();
        assert!(second.contains('X'));
        assert!(!second.contains('A'));
    }

    #[test]
    fn style_conversion_is_exact() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
