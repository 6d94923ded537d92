//! Console presentation: frame layout and in-place redraw.

use std::io::{self, Write};

use crossterm::{cursor, execute};

use crate::domain::Grid;

/// Lines a frame occupies beyond the grid itself: the step counter, the
/// blank separator, and the trailing newline written by `rewind`.
const FRAME_OVERHEAD_LINES: usize = 3;

/// Presentation seam between the driver and the terminal. The engine renders
/// through this trait and carries no terminal dependency of its own.
pub trait FramePresenter {
    /// Show one frame: the 1-based step counter, a blank line, then the grid.
    fn frame(&mut self, step: u64, grid: &Grid) -> io::Result<()>;

    /// Move the cursor back over a frame of the given grid height so the next
    /// frame overdraws it in place.
    fn rewind(&mut self, height: usize) -> io::Result<()>;

    /// Show the completion message after the final frame.
    fn finished(&mut self) -> io::Result<()>;
}

/// Presenter that animates on stdout using ANSI cursor movement.
pub struct ConsolePresenter {
    out: io::Stdout,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePresenter for ConsolePresenter {
    fn frame(&mut self, step: u64, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "Step {step}\n")?;
        writeln!(self.out, "{grid}")?;
        self.out.flush()
    }

    fn rewind(&mut self, height: usize) -> io::Result<()> {
        execute!(
            self.out,
            cursor::MoveUp((height + FRAME_OVERHEAD_LINES) as u16)
        )?;
        writeln!(self.out)
    }

    fn finished(&mut self) -> io::Result<()> {
        writeln!(self.out, "Finish.")
    }
}
