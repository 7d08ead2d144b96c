// Standard library
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

// External libraries
use cascade::cascade;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyModifiers, MouseButton, MouseEvent,
    },
    execute, queue,
    style::{style, Attribute, Color, Print, PrintStyledContent, StyledContent},
    terminal,
};
use tracing::{debug, info};

// LIFE
mod module;
mod styled_text;
use crate::automaton::CellState;
use crate::camera::Camera;
use crate::driver::Driver;
use crate::patterns::PATTERNS;
use module::Module;
use styled_text::StyledText;

pub type Size = (u16, u16);

/// How cells are drawn in the terminal.
pub trait TermDrawable {
    fn style(&self) -> StyledContent<char>;
}

impl TermDrawable for CellState {
    fn style(&self) -> StyledContent<char> {
        match self {
            CellState::Dead => style('·').with(Color::DarkGrey),
            CellState::Alive => style('█').with(Color::Green).attribute(Attribute::Bold),
        }
    }
}

/// Interactive front end: renders the driver's grid through a camera and
/// translates keys and mouse clicks into driver calls.
///
/// Every character of the automaton panel covers `cell_size / 2` display
/// units horizontally and `cell_size` vertically, so a cell at zoom 1 is two
/// characters wide and one tall.
pub struct TerminalUI {
    auto_mod: Module,
    info_mod: Module,
    driver: Driver,
    camera: Camera,
    cell_size: f32,
    pattern_idx: usize,
    dirty: bool,
}

impl TerminalUI {
    pub fn new(driver: Driver, cell_size: u32) -> crossterm::Result<Self> {
        let size = terminal::size()?;
        let (auto_mod, info_mod) = Self::create_modules(size);
        let cell_size = cell_size as f32;
        let (rows, cols) = driver.grid().dimensions();
        let mut camera = Camera::new(Self::camera_offset(&auto_mod, cell_size));
        camera.target = (cols as f32 * cell_size / 2.0, rows as f32 * cell_size / 2.0);
        Ok(Self {
            auto_mod,
            info_mod,
            driver,
            camera,
            cell_size,
            pattern_idx: 0,
            dirty: true,
        })
    }

    /// Runs the polling loop until the user quits. The terminal is restored on
    /// exit, including when drawing fails.
    pub fn run(&mut self) -> crossterm::Result<()> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        info!("terminal UI started");

        let result = self.event_loop(&mut out);

        execute!(
            out,
            DisableMouseCapture,
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        terminal::disable_raw_mode()?;
        info!(generation = self.driver.generation(), "terminal UI stopped");
        result
    }

    fn event_loop(&mut self, out: &mut Stdout) -> crossterm::Result<()> {
        self.draw_frame(out)?;
        loop {
            if event::poll(FRAME_TIME)? {
                match event::read()? {
                    Event::Key(key) => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(MouseEvent::Down(MouseButton::Left, x, y, _)) => {
                        self.click(x, y)
                    }
                    Event::Mouse(MouseEvent::ScrollUp(..)) => self.zoom(1.0),
                    Event::Mouse(MouseEvent::ScrollDown(..)) => self.zoom(-1.0),
                    Event::Resize(width, height) => {
                        self.resize((width, height));
                        self.draw_frame(out)?;
                    }
                    _ => (),
                }
            }

            if self.driver.tick(Instant::now()) {
                self.dirty = true;
            }
            if self.dirty {
                self.draw_automaton(out)?;
                self.draw_info(out)?;
                out.flush()?;
                self.dirty = false;
            }
        }
        Ok(())
    }

    /// Returns `false` when the key asks to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Char(' ') => {
                self.driver.toggle_running();
            }
            KeyCode::Char('n') => self.driver.step_once(),
            KeyCode::Char('c') => self.driver.clear(),
            KeyCode::Char('p') => self.next_pattern(),
            KeyCode::Up | KeyCode::Char('w') => self.pan(0.0, -1.0),
            KeyCode::Down | KeyCode::Char('s') => self.pan(0.0, 1.0),
            KeyCode::Left | KeyCode::Char('a') => self.pan(-1.0, 0.0),
            KeyCode::Right | KeyCode::Char('d') => self.pan(1.0, 0.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom(1.0),
            KeyCode::Char('-') => self.zoom(-1.0),
            KeyCode::Char('[') => self.scale_interval(2.0),
            KeyCode::Char(']') => self.scale_interval(0.5),
            _ => return true,
        }
        self.dirty = true;
        true
    }

    fn click(&mut self, x: u16, y: u16) {
        if !self.auto_mod.contains(x, y) {
            return;
        }
        let (wx, wy) = self.screen_to_world(x, y);
        if let Some(state) = self.driver.toggle_at_point(wx, wy, self.cell_size) {
            debug!(x, y, ?state, "click");
            self.dirty = true;
        }
    }

    fn pan(&mut self, d_cols: f32, d_rows: f32) {
        let step = PAN_CELLS * self.cell_size / self.camera.zoom;
        self.camera.pan(d_cols * step, d_rows * step);
    }

    fn zoom(&mut self, wheel: f32) {
        self.camera.zoom_by(wheel);
        self.dirty = true;
    }

    fn scale_interval(&mut self, factor: f64) {
        let millis = (self.driver.interval().as_millis() as f64 * factor)
            .max(MIN_INTERVAL_MS)
            .min(MAX_INTERVAL_MS);
        self.driver.set_interval(Duration::from_millis(millis as u64));
    }

    fn next_pattern(&mut self) {
        let pattern = &PATTERNS[self.pattern_idx % PATTERNS.len()];
        self.pattern_idx += 1;
        let origin = pattern.centered_origin(self.driver.grid());
        self.driver.seed(pattern, origin);
    }

    /// World coordinates of the center of terminal character `(x, y)`.
    fn screen_to_world(&self, x: u16, y: u16) -> (f32, f32) {
        let (char_w, char_h) = (self.cell_size / 2.0, self.cell_size);
        self.camera
            .screen_to_world((x as f32 + 0.5) * char_w, (y as f32 + 0.5) * char_h)
    }

    fn draw_frame(&mut self, out: &mut Stdout) -> crossterm::Result<()> {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        self.auto_mod.draw(out)?;
        self.info_mod.draw(out)?;
        self.draw_automaton(out)?;
        self.draw_info(out)?;
        out.flush()?;
        Ok(())
    }

    fn draw_automaton(&self, out: &mut Stdout) -> crossterm::Result<()> {
        let (px, py) = self.auto_mod.render_pos();
        let (width, height) = self.auto_mod.render_size();
        let grid = self.driver.grid();
        for y in py..(py + height) {
            queue!(out, cursor::MoveTo(px, y))?;
            for x in px..(px + width) {
                let (wx, wy) = self.screen_to_world(x, y);
                match self.driver.cell_at_point(wx, wy, self.cell_size) {
                    Some(pos) => {
                        queue!(out, PrintStyledContent(grid.get_or_dead(pos).style()))?
                    }
                    None => queue!(out, Print(' '))?,
                }
            }
        }
        Ok(())
    }

    fn draw_info(&self, out: &mut Stdout) -> crossterm::Result<()> {
        let (x, y) = self.info_mod.render_pos();
        let (max_len, _) = self.info_mod.render_size();
        let (rows, cols) = self.driver.grid().dimensions();

        let status = if self.driver.is_running() {
            style(String::from("RUNNING")).with(Color::Green)
        } else {
            style(String::from("PAUSED")).with(Color::Red).attribute(Attribute::Bold)
        };
        let lines = vec![
            cascade!(
                StyledText::new();
                ..push(style(String::from(" Generation: ")).attribute(Attribute::Italic));
                ..push(style(self.driver.generation().to_string()));
                ..push(style(String::from("   ")));
                ..push(status);
            ),
            cascade!(
                StyledText::new();
                ..push(style(String::from(" Population: ")).attribute(Attribute::Italic));
                ..push(style(self.driver.population().to_string()));
            ),
            cascade!(
                StyledText::new();
                ..push(style(String::from(" Grid      : ")).attribute(Attribute::Italic));
                ..push(style(format!("{} x {}", rows, cols)));
                ..push(style(String::from("   Interval: ")).attribute(Attribute::Italic));
                ..push(style(format!("{} ms", self.driver.interval().as_millis())));
                ..push(style(String::from("   Zoom: ")).attribute(Attribute::Italic));
                ..push(style(format!("{:.2}", self.camera.zoom)));
            ),
            StyledText::from(vec![style(String::from(
                " [space] run/pause  [n] step  [c] clear  [p] pattern  [wasd] pan  [+/-] zoom  [[/]] speed  [q] quit",
            ))
            .with(Color::DarkGrey)]),
        ];

        self.info_mod.clear_content(out)?;
        for (idx, line) in lines.iter().enumerate() {
            line.draw(out, cursor::MoveTo(x, y + idx as u16), max_len)?;
        }
        Ok(())
    }

    fn resize(&mut self, size: Size) {
        let (mut auto_mod, mut info_mod) = Self::create_modules(size);
        auto_mod.set_title(self.auto_mod.title().clone());
        info_mod.set_title(self.info_mod.title().clone());
        self.auto_mod = auto_mod;
        self.info_mod = info_mod;
        self.camera.offset = Self::camera_offset(&self.auto_mod, self.cell_size);
        debug!(width = size.0, height = size.1, "terminal resized");
    }

    fn create_modules(size: Size) -> (Module, Module) {
        let height_automaton = size.1.saturating_sub(HEIGHT_INFO);
        let auto_mod = Module::new(
            StyledText::from(vec![style(String::from("Conway's Game of Life"))]),
            (0, 0),
            (size.0, height_automaton),
        );
        let info_mod = Module::new(
            StyledText::from(vec![
                style(String::from("Information")).attribute(Attribute::Italic)
            ]),
            (0, height_automaton),
            (size.0, HEIGHT_INFO),
        );
        (auto_mod, info_mod)
    }

    /// Screen-space center of the automaton panel.
    fn camera_offset(auto_mod: &Module, cell_size: f32) -> (f32, f32) {
        let (px, py) = auto_mod.render_pos();
        let (width, height) = auto_mod.render_size();
        (
            (px as f32 + width as f32 / 2.0) * cell_size / 2.0,
            (py as f32 + height as f32 / 2.0) * cell_size,
        )
    }
}

const FRAME_TIME: Duration = Duration::from_millis(16);
const HEIGHT_INFO: u16 = 6;
const PAN_CELLS: f32 = 4.0;
const MIN_INTERVAL_MS: f64 = 10.0;
const MAX_INTERVAL_MS: f64 = 5000.0;
