//! `LinePainter`: styled single-line frame painter.

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::{cursor::MoveTo, queue, style::Print};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::render::RenderSink;

/// Foreground colors for the two segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    /// Color of the first segment.
    pub first: Color,
    /// Color of the second segment.
    pub second: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        // The palette of the hero line this animator came from: accent
        // yellow for the lead-in, plain white for the payoff.
        Self {
            first: Color::Yellow,
            second: Color::White,
        }
    }
}

/// Paints each frame at a fixed position, erasing leftovers from the
/// previous, possibly wider, frame.
///
/// All escape sequences for a frame are queued into an internal buffer and
/// flushed with a single write, so a frame never appears half-drawn.
pub struct LinePainter<W: Write> {
    out: W,
    column: u16,
    row: u16,
    style: LineStyle,
    /// Display width of the previous frame, for erase-padding.
    last_width: usize,
    buf: Vec<u8>,
}

impl<W: Write> LinePainter<W> {
    /// Create a painter drawing at `(column, row)` with the default style.
    pub fn new(out: W, column: u16, row: u16) -> Self {
        Self::with_style(out, column, row, LineStyle::default())
    }

    /// Create a painter with custom segment colors.
    pub const fn with_style(out: W, column: u16, row: u16, style: LineStyle) -> Self {
        Self {
            out,
            column,
            row,
            style,
            last_width: 0,
            buf: Vec::new(),
        }
    }

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn paint(&mut self, first: &str, second: &str) -> std::io::Result<()> {
        let width = UnicodeWidthStr::width(first) + UnicodeWidthStr::width(second);
        let padding = self.last_width.saturating_sub(width);

        self.buf.clear();
        queue!(
            self.buf,
            MoveTo(self.column, self.row),
            SetForegroundColor(self.style.first),
            Print(first),
            SetForegroundColor(self.style.second),
            Print(second),
            ResetColor,
        )?;
        for _ in 0..padding {
            self.buf.push(b' ');
        }

        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.last_width = width;
        Ok(())
    }

    /// Blank the painter's line and forget the previous frame width.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn erase(&mut self) -> std::io::Result<()> {
        self.buf.clear();
        queue!(self.buf, MoveTo(self.column, self.row))?;
        for _ in 0..self.last_width {
            self.buf.push(b' ');
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.last_width = 0;
        Ok(())
    }

    /// Consume the painter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RenderSink for LinePainter<W> {
    fn render(&mut self, first: &str, second: &str) {
        // A failing terminal should not take the animation down with it.
        if let Err(err) = self.paint(first, second) {
            log::error!("line painter write failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(frames: &[(&str, &str)]) -> String {
        let mut painter = LinePainter::new(Vec::new(), 2, 5);
        for (first, second) in frames {
            painter.paint(first, second).unwrap();
        }
        String::from_utf8_lossy(&painter.into_inner()).into_owned()
    }

    #[test]
    fn test_paint_emits_text_and_position() {
        let out = painted(&[("AB", "C")]);
        assert!(out.contains("AB"));
        assert!(out.contains('C'));
        // MoveTo(2, 5) is 1-indexed on the wire.
        assert!(out.contains("\u{1b}[6;3H"));
    }

    #[test]
    fn test_paint_pads_when_frame_shrinks() {
        let out = painted(&[("ABCD", ""), ("A", "")]);
        // The second frame is 3 columns narrower; it must erase them.
        let after_last_a = out.rfind('A').unwrap();
        let tail = &out[after_last_a..];
        assert!(tail.contains("   "));
    }

    #[test]
    fn test_paint_wide_graphemes_pad_by_display_width() {
        // "日" occupies two columns; erasing it needs two spaces.
        let out = painted(&[("日", ""), ("", "")]);
        let tail = out.rsplit('H').next().unwrap();
        assert!(tail.contains("  "));
    }

    #[test]
    fn test_erase_blanks_previous_frame() {
        let mut painter = LinePainter::new(Vec::new(), 0, 0);
        painter.paint("hello", "!").unwrap();
        painter.erase().unwrap();
        let out = String::from_utf8_lossy(&painter.into_inner()).into_owned();
        let tail = out.rsplit('H').next().unwrap();
        assert_eq!(tail, "      ");
    }
}
