//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::render::{Line, LineStyle};

/// A wrapper around stdout that restores the terminal on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for full-screen rendering.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default hook prints the panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        Ok(Self { stdout })
    }

    /// Get the terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Draw a frame of lines from the top-left corner.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (_, height) = self.size()?;
        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(
                self.stdout,
                MoveTo(0, y as u16),
                Clear(ClearType::CurrentLine)
            )?;
            match line.style {
                LineStyle::Normal => {}
                LineStyle::Title => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                LineStyle::Header => queue!(
                    self.stdout,
                    SetAttribute(Attribute::Bold),
                    SetAttribute(Attribute::Underlined)
                )?,
                LineStyle::Cursor => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
                LineStyle::Muted => queue!(self.stdout, SetForegroundColor(Color::DarkGrey))?,
                LineStyle::Error => queue!(self.stdout, SetForegroundColor(Color::Red))?,
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        let used = lines.len().min(height as usize) as u16;
        queue!(self.stdout, MoveTo(0, used), Clear(ClearType::FromCursorDown))?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
