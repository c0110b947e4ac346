//! Terminal presentation collaborator.
//!
//! The core supplies only the color grid and its dimensions; this module
//! owns event polling, nearest-neighbor resampling to the terminal's cell
//! grid, and the actual present.

use crossterm::{
    cursor, event,
    event::{Event, KeyCode, KeyModifiers},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal,
};
use std::{
    io::{self, Write},
    time::Duration,
};

use crate::{targets::resample_index, types::Rgb8};

/// Raw-mode/alternate-screen guard. Restores the terminal on drop, so an
/// early return or panic in the caller's frame loop cannot leave the
/// terminal unusable.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = crossterm::execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        ) {
            let _ = crossterm::execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { active: true })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let _ = crossterm::execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        self.active = false;
    }
}

/// Drains pending input and reports whether the user asked to quit
/// (`q`, `Esc`, or Ctrl-C). Waits at most `timeout` for the first event.
pub fn poll_done(timeout: Duration) -> io::Result<bool> {
    let mut wait = timeout;
    while event::poll(wait)? {
        wait = Duration::ZERO;
        if let Event::Key(key) = event::read()? {
            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.code == KeyCode::Esc || key.code == KeyCode::Char('q') {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Presents a color grid on the terminal, one background-colored cell per
/// character, resampled to the current terminal size.
pub struct TerminalPresenter {
    cols: u16,
    rows: u16,
}

impl TerminalPresenter {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    pub fn surface_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        colors: &[Rgb8],
        src_w: usize,
        src_h: usize,
    ) -> io::Result<()> {
        if colors.len() != src_w.saturating_mul(src_h) || src_w == 0 || src_h == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "color grid length does not match dimensions",
            ));
        }
        if let Ok((cols, rows)) = terminal::size() {
            self.cols = cols;
            self.rows = rows;
        }

        let out_w = self.cols as usize;
        let out_h = self.rows as usize;
        for row in 0..out_h {
            let sy = resample_index(row, out_h, src_h);
            queue!(out, cursor::MoveTo(0, row as u16))?;
            let mut current: Option<Rgb8> = None;
            for col in 0..out_w {
                let sx = resample_index(col, out_w, src_w);
                let px = colors[sy * src_w + sx];
                if current != Some(px) {
                    queue!(
                        out,
                        SetBackgroundColor(Color::Rgb {
                            r: px.r,
                            g: px.g,
                            b: px.b,
                        })
                    )?;
                    current = Some(px);
                }
                queue!(out, Print(' '))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}
