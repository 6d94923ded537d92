use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::Grid;
use crate::error::ConfigError;
use crate::rendering::FramePresenter;

/// Outcome of advancing the simulation by one generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Running,
    Finished,
}

/// Simulation coordinates the automaton: it owns the current grid, a
/// two-deep history of earlier boards for termination detection, and the
/// pacing interval between frames.
pub struct Simulation {
    current: Grid,
    history: VecDeque<Grid>,
    interval: Duration,
}

impl Simulation {
    /// Build a simulation over a randomly seeded grid.
    pub fn new(
        height: usize,
        width: usize,
        init_rate: f64,
        interval_secs: f64,
    ) -> Result<Self, ConfigError> {
        let interval = Duration::try_from_secs_f64(interval_secs)
            .map_err(|_| ConfigError::Interval(interval_secs))?;
        let grid = Grid::random(height, width, init_rate)?;
        Ok(Self::from_grid(grid, interval))
    }

    /// Build a simulation over a prepared grid.
    pub fn from_grid(grid: Grid, interval: Duration) -> Self {
        Self {
            current: grid,
            history: VecDeque::with_capacity(2),
            interval,
        }
    }

    /// The board as of the latest generation
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// True once the board matches the snapshot taken two generations ago.
    ///
    /// This recognizes fixed points and period-2 oscillators only. A board
    /// cycling with a longer period never settles, and the run loop keeps
    /// animating until the process is interrupted. Known limitation of the
    /// two-snapshot heuristic, kept deliberately in place of general cycle
    /// detection.
    pub fn settled(&self) -> bool {
        self.history.len() > 1 && self.current == self.history[0]
    }

    /// Advance one generation unless the board has settled.
    ///
    /// The history retains at most the two most recent boards, oldest first;
    /// the oldest is evicted before the current board is snapshotted. Each
    /// snapshot is an independent copy, never an alias of the live grid.
    pub fn advance(&mut self) -> Status {
        if self.settled() {
            return Status::Finished;
        }
        if self.history.len() > 1 {
            self.history.pop_front();
        }
        self.history.push_back(self.current.clone());
        self.current = self.current.next_generation();
        Status::Running
    }

    /// Render and evolve until the board settles: present a frame, advance,
    /// pause for the configured interval, and rewind the presenter so the
    /// next frame overdraws the last one in place.
    pub fn run<P: FramePresenter>(&mut self, presenter: &mut P) -> io::Result<()> {
        debug!(
            height = self.current.height(),
            width = self.current.width(),
            interval_secs = self.interval.as_secs_f64(),
            "starting run loop"
        );

        let mut step: u64 = 1;
        loop {
            presenter.frame(step, &self.current)?;
            if self.advance() == Status::Finished {
                info!(step, "board settled");
                return presenter.finished();
            }
            step += 1;
            thread::sleep(self.interval);
            presenter.rewind(self.current.height())?;
        }
    }
}
