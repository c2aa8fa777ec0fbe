use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};
use is_terminal::IsTerminal;

/// What the attached terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub columns: u16,
    pub rows: u16,
}

impl TerminalCapabilities {
    /// Capabilities from an environment lookup, the tty flag and the
    /// reported size (80x24 when unknown).
    pub fn from_env(
        env: impl Fn(&str) -> Option<String>,
        is_tty: bool,
        size: Option<(u16, u16)>,
    ) -> Self {
        let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let (columns, rows) = size.unwrap_or((80, 24));
        Self {
            is_tty,
            color: is_tty && !dumb && env("NO_COLOR").is_none(),
            unicode: !dumb && locale_is_unicode(&env),
            columns,
            rows,
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::from_env(
        |name| std::env::var(name).ok(),
        io::stdout().is_terminal(),
        terminal::size().ok(),
    )
}

/// The first locale variable that is set decides; C and POSIX mean ASCII.
fn locale_is_unicode(env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|name| env(name).filter(|value| !value.is_empty()))
        .map(|value| !matches!(value.to_ascii_lowercase().as_str(), "c" | "posix"))
        .unwrap_or(true)
}

/// Where the engine learns the terminal height, polled once per frame.
pub trait TerminalSize {
    fn height(&self) -> u16;
}

/// The real terminal; falls back to 24 rows when the size is unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveTerminal;

impl TerminalSize for LiveTerminal {
    fn height(&self) -> u16 {
        terminal::size().map(|(_, h)| h).unwrap_or(24)
    }
}

/// A terminal of fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub u16);

impl TerminalSize for FixedSize {
    fn height(&self) -> u16 {
        self.0
    }
}

impl<T: TerminalSize + ?Sized> TerminalSize for &T {
    fn height(&self) -> u16 {
        (**self).height()
    }
}

/// How a full repaint wipes the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStrategy {
    /// Run the platform's clear command (`cls` on Windows, `clear` elsewhere)
    Native,
    /// Cursor home followed by erase-display
    Ansi,
}

impl ClearStrategy {
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            ClearStrategy::Native
        } else {
            ClearStrategy::Ansi
        }
    }

    pub fn clear<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        match self {
            ClearStrategy::Ansi => {
                out.queue(cursor::MoveTo(0, 0))?;
                out.queue(terminal::Clear(terminal::ClearType::All))?;
                Ok(())
            }
            ClearStrategy::Native => {
                out.flush()?;
                let status = if cfg!(windows) {
                    std::process::Command::new("cmd").args(["/C", "cls"]).status()
                } else {
                    std::process::Command::new("clear").status()
                };
                match status {
                    Ok(_) => Ok(()),
                    // no clear command available: fall back to escapes
                    Err(_) => ClearStrategy::Ansi.clear(out),
                }
            }
        }
    }
}

/// Hides the cursor (and optionally enables raw mode) for its lifetime.
///
/// Every write during a menu goes through the guard. Dropping it shows the
/// cursor again and leaves raw mode, on normal return, error or panic.
pub struct TerminalGuard<'a, W: Write> {
    out: &'a mut W,
    raw_mode: bool,
}

impl<'a, W: Write> TerminalGuard<'a, W> {
    pub fn acquire(out: &'a mut W, raw_mode: bool) -> io::Result<Self> {
        let raw_mode = raw_mode && io::stdin().is_terminal();
        if raw_mode {
            terminal::enable_raw_mode()?;
        }
        let guard = Self { out, raw_mode };
        guard.out.queue(cursor::Hide)?;
        guard.out.flush()?;
        Ok(guard)
    }

    /// Make the cursor visible while the guard is still held (text input).
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.out.queue(cursor::Show)?;
        self.out.flush()
    }
}

impl<W: Write> Write for TerminalGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalGuard<'_, W> {
    fn drop(&mut self) {
        let _ = self.show_cursor();
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Exit status after Ctrl-C (128 + SIGINT).
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Put the terminal back after a Ctrl-C that arrived as a signal: show the
/// cursor and leave raw mode. Returns the exit status to use.
///
/// In raw mode Ctrl-C is read as a key and the guard cleans up. In cooked
/// mode the terminal driver raises SIGINT instead and no destructor runs.
pub fn restore_after_interrupt<W: Write + ?Sized>(out: &mut W) -> i32 {
    let _ = out.queue(cursor::Show);
    let _ = out.flush();
    // no-op unless raw mode was enabled by this process
    let _ = terminal::disable_raw_mode();
    INTERRUPT_EXIT_CODE
}

/// Install a process-wide Ctrl-C handler that restores stdout and exits
/// with [`INTERRUPT_EXIT_CODE`]. Call once, early in `main`.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let code = restore_after_interrupt(&mut io::stdout());
        std::process::exit(code);
    })
}
