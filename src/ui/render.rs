//! Incremental panel rendering.
//!
//! A panel is a static block (header, hints) painted once, followed by a
//! dynamic block rewritten in place on every frame. The renderer remembers
//! how many dynamic lines it drew last, moves the cursor back up over them
//! and overwrites each line. A full repaint (clear screen, static block,
//! dynamic block) happens on the first frame, when forced, or on every
//! frame under `RepaintStrategy::Full`.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::config::RepaintStrategy;

use super::terminal::ClearStrategy;

/// Line terminator valid in both cooked and raw terminal modes.
pub const NEWLINE: &str = "\r\n";

#[derive(Debug, Clone)]
pub struct PanelRenderer {
    strategy: RepaintStrategy,
    clear: ClearStrategy,
    static_rendered: bool,
    prev_dynamic_lines: usize,
    full_repaints: usize,
}

impl PanelRenderer {
    pub fn new(strategy: RepaintStrategy, clear: ClearStrategy) -> Self {
        Self {
            strategy,
            clear,
            static_rendered: false,
            prev_dynamic_lines: 0,
            full_repaints: 0,
        }
    }

    /// Forget what is on screen; the next frame is a full repaint.
    pub fn reset(&mut self) {
        self.static_rendered = false;
        self.prev_dynamic_lines = 0;
    }

    pub fn dynamic_line_count(&self) -> usize {
        self.prev_dynamic_lines
    }

    /// Number of full repaints performed so far
    pub fn full_repaints(&self) -> usize {
        self.full_repaints
    }

    pub fn render<W, F>(
        &mut self,
        out: &mut W,
        dynamic: &[String],
        force_full: bool,
        paint_static: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if force_full || !self.static_rendered || !self.strategy.is_incremental() {
            self.clear.clear(out)?;
            paint_static(out)?;
            self.static_rendered = true;
            self.prev_dynamic_lines = 0;
            self.full_repaints += 1;
        }

        if self.prev_dynamic_lines > 0 {
            out.queue(cursor::MoveToPreviousLine(line_count(self.prev_dynamic_lines)))?;
        }

        for line in dynamic {
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            write!(out, "{line}{NEWLINE}")?;
        }

        // blank leftovers from a taller previous frame, then step back above them
        let surplus = self.prev_dynamic_lines.saturating_sub(dynamic.len());
        if surplus > 0 {
            for _ in 0..surplus {
                out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
                write!(out, "{NEWLINE}")?;
            }
            out.queue(cursor::MoveToPreviousLine(line_count(surplus)))?;
        }

        out.flush()?;
        self.prev_dynamic_lines = dynamic.len();
        Ok(())
    }
}

fn line_count(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
