//! TerminalRenderer: writes rendered frames to a real terminal.
//!
//! Output goes through two small capabilities so the session loop does not
//! depend on crossterm directly: [`DisplaySink`] for drawing and
//! [`ViewportSource`] for the current terminal size.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::fb::CharBuffer;
use crate::frame::{RenderedFrame, Viewport};

/// Size used when the terminal cannot report one.
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// Something frames can be drawn on.
pub trait DisplaySink {
    /// Clear the screen and move the cursor to the top-left corner.
    fn clear_home(&mut self) -> Result<()>;

    /// Append every row of `buf`, one line each.
    fn write_buffer(&mut self, buf: &CharBuffer) -> Result<()>;

    /// Append a single line of text.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Make everything written since the last `clear_home` visible.
    fn present(&mut self) -> Result<()>;

    /// Draw a full frame: minimap, then view, then status lines.
    fn show_frame(&mut self, frame: &RenderedFrame, status: &[String]) -> Result<()> {
        self.clear_home()?;
        self.write_buffer(&frame.minimap)?;
        self.write_buffer(&frame.view)?;
        for line in status {
            self.write_line(line)?;
        }
        self.present()
    }
}

/// Reports the current display size in character cells.
pub trait ViewportSource {
    fn viewport(&mut self) -> Viewport;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        tracing::info!("terminal raw mode enabled");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::info!("terminal restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl DisplaySink for TerminalRenderer {
    fn clear_home(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_home_into(&mut self.buf)
    }

    fn write_buffer(&mut self, buf: &CharBuffer) -> Result<()> {
        encode_buffer_into(buf, &mut self.buf)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        encode_line_into(line, &mut self.buf)
    }

    fn present(&mut self) -> Result<()> {
        self.flush_buf()
    }
}

/// Viewport source backed by the controlling terminal's size.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSize;

impl ViewportSource for TerminalSize {
    fn viewport(&mut self) -> Viewport {
        match terminal::size() {
            Ok((w, h)) => Viewport::new(w, h),
            Err(_) => FALLBACK_VIEWPORT,
        }
    }
}

/// Encode "clear screen, cursor home" into `out`.
pub fn encode_clear_home_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode every row of `buf` as a raw-mode line (`\r\n` terminated).
pub fn encode_buffer_into(buf: &CharBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut utf8 = [0u8; 4];
    for y in 0..buf.height() {
        for &ch in buf.row(y) {
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.extend_from_slice(b"\r\n");
    }
    Ok(())
}

/// Encode one line of text (`\r\n` terminated).
pub fn encode_line_into(line: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(line))?;
    out.extend_from_slice(b"\r\n");
    Ok(())
}
