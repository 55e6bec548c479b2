//! Main TUI application state and logic

use crate::calculator::display::format_decimal;
use crate::calculator::{Calculator, Key, Outcome, Tape};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

/// The main application state
pub struct App {
    /// The calculator core
    pub calculator: Calculator,

    /// Presses made this session
    pub tape: Tape,

    /// Where the keypad was last drawn, for mouse hit-testing
    pub keypad_area: Rect,

    /// Most recently clicked key, highlighted on the keypad
    pub last_pressed: Option<Key>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app with an empty tape holding at most `tape_lines` lines
    pub fn new(calculator: Calculator, tape_lines: usize) -> Self {
        App {
            calculator,
            tape: Tape::new(tape_lines),
            keypad_area: Rect::default(),
            last_pressed: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator window opened");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Every event is handled to completion before the next read
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }
        info!(presses = self.tape.len(), "calculator window closed");

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), size);

        // Display on top, keypad and tape in the middle, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        panes::render_display_pane(
            frame,
            main_chunks[0],
            &self.calculator.display(),
            self.calculator.pending(),
            self.calculator.is_error(),
        );

        self.keypad_area = columns[0];
        panes::render_keypad_pane(frame, self.keypad_area, self.last_pressed);

        panes::render_tape_pane(frame, columns[1], &self.tape);

        let memory = self.calculator.memory();
        let memory_text = (memory != 0.0).then(|| format_decimal(memory));
        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            memory_text.as_deref(),
            self.calculator.is_error(),
        );
    }

    /// Handle keyboard events. Keys are not typed; the keyboard only closes
    /// the window.
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle mouse events: a left click on a button presses it
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match panes::key_at(self.keypad_area, mouse.column, mouse.row) {
                Some(key) => self.click(key),
                None => debug!(column = mouse.column, row = mouse.row, "click outside keypad"),
            }
        }
    }

    /// Press `key` as if its button had been clicked
    pub fn click(&mut self, key: Key) {
        let outcome = self.calculator.press(key);
        let display = self.calculator.display();

        self.tape
            .record(key.label(), &display, self.calculator.is_error());
        self.last_pressed = Some(key);
        self.status_message = match outcome {
            Outcome::Entered => "Ready!".to_string(),
            Outcome::OperatorSelected => format!("{} selected", key),
            Outcome::AwaitingExponent => "Enter the exponent, then =".to_string(),
            Outcome::Value(_) => format!("= {}", display),
            Outcome::Memory(value) => format!("Memory: {}", format_decimal(value)),
            Outcome::Error(e) => format!("Error: {}", e),
        };
    }
}
