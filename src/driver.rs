// Standard library
use std::time::{Duration, Instant};

// External libraries
use tracing::{debug, info, trace};

// LIFE
use crate::automaton::CellState;
use crate::config::Config;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::patterns::Pattern;
use crate::simulator;

/// Owns the current generation and everything the interactive loop needs
/// around it. Each step replaces `grid` with a freshly computed one.
pub struct Driver {
    grid: Grid,
    generation: u64,
    running: bool,
    interval: Duration,
    last_step: Option<Instant>,
}

impl Driver {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut driver = Self::with_grid(Grid::new(config.rows, config.cols)?, config.interval());
        driver.running = config.start_running;
        if let Some(pattern) = config.pattern.as_deref().and_then(Pattern::by_name) {
            let origin = pattern.centered_origin(&driver.grid);
            driver.seed(pattern, origin);
        }
        Ok(driver)
    }

    /// Paused driver around an existing generation.
    pub fn with_grid(grid: Grid, interval: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            running: false,
            interval,
            last_step: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        let interval_ms = interval.as_millis() as u64;
        debug!(interval_ms, "interval changed");
        self.interval = interval;
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!(generation = self.generation, running, "simulation toggled");
        }
        self.running = running;
    }

    pub fn toggle_running(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    /// Advances one generation if running and at least `interval` has passed
    /// since the previous step. Returns whether a step happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let due = match self.last_step {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.advance();
            self.last_step = Some(now);
        }
        due
    }

    /// Advances one generation regardless of the running flag.
    pub fn step_once(&mut self) {
        self.advance();
    }

    /// Advances `nb_gens` generations back to back, ignoring the running flag
    /// and the interval.
    pub fn run_for(&mut self, nb_gens: u64) {
        for _ in 0..nb_gens {
            self.advance();
        }
        info!(
            generation = self.generation,
            population = self.population(),
            "ran {} generations",
            nb_gens
        );
    }

    fn advance(&mut self) {
        self.grid = simulator::step(&self.grid);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
    }

    pub fn toggle_cell(&mut self, pos: impl Into<Position>) -> Result<CellState> {
        let pos = pos.into();
        let state = self.grid.get(pos)?.toggle();
        self.grid.set(pos, state)?;
        debug!(row = pos.row(), col = pos.col(), ?state, "cell toggled");
        Ok(state)
    }

    /// Maps a point in world units to the cell under it, `None` when the
    /// point is off the grid.
    pub fn cell_at_point(&self, x: f32, y: f32, cell_size: f32) -> Option<Position> {
        if cell_size.is_nan() || cell_size <= 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let pos = Position::new(
            (y / cell_size).floor() as isize,
            (x / cell_size).floor() as isize,
        );
        if self.grid.dim().contains(pos) {
            Some(pos)
        } else {
            None
        }
    }

    /// Toggles the cell under a pointer. Clicks outside the grid are ignored.
    pub fn toggle_at_point(&mut self, x: f32, y: f32, cell_size: f32) -> Option<CellState> {
        let pos = self.cell_at_point(x, y, cell_size)?;
        self.toggle_cell(pos).ok()
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }

    /// Clears the grid and places `pattern` at `origin`.
    pub fn seed(&mut self, pattern: &Pattern, origin: Position) {
        self.grid.clear();
        let written = pattern.apply(&mut self.grid, origin);
        self.generation = 0;
        info!(pattern = pattern.name, cells = written, "grid seeded");
    }
}
