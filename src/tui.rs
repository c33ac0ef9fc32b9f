//! Terminal User Interface

use crate::cipher::{apply_cipher, derive_shift_sequence};
use crate::types::Direction;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

const DIRECTIONS: &[(Direction, &str)] = &[
    (Direction::Encrypt, "Encrypt"),
    (Direction::Decrypt, "Decrypt"),
];

enum InputField {
    Key,
    Text,
}

enum FocusedWidget {
    Input(InputField),
    DirectionList,
    Run,
}

pub struct TuiApp {
    key: String,
    text: String,
    direction_state: ListState,
    result: String,
    status_message: String,
    focused: FocusedWidget,
    should_quit: bool,
}

impl TuiApp {
    fn new() -> Self {
        let mut direction_state = ListState::default();
        direction_state.select(Some(0));

        Self {
            key: String::new(),
            text: String::new(),
            direction_state,
            result: String::new(),
            status_message: String::new(),
            focused: FocusedWidget::Input(InputField::Key),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.next_field();
            }
            KeyCode::BackTab => {
                self.prev_field();
            }
            KeyCode::Enter => {
                self.handle_enter();
            }
            KeyCode::Char(c) => {
                self.handle_char(c);
            }
            KeyCode::Backspace => {
                self.handle_backspace();
            }
            KeyCode::Up => {
                if matches!(self.focused, FocusedWidget::DirectionList) {
                    self.prev_direction();
                }
            }
            KeyCode::Down => {
                if matches!(self.focused, FocusedWidget::DirectionList) {
                    self.next_direction();
                }
            }
            _ => {}
        }
    }

    fn next_field(&mut self) {
        self.focused = match self.focused {
            FocusedWidget::Input(InputField::Key) => FocusedWidget::Input(InputField::Text),
            FocusedWidget::Input(InputField::Text) => FocusedWidget::DirectionList,
            FocusedWidget::DirectionList => FocusedWidget::Run,
            FocusedWidget::Run => FocusedWidget::Input(InputField::Key),
        };
    }

    fn prev_field(&mut self) {
        self.focused = match self.focused {
            FocusedWidget::Input(InputField::Key) => FocusedWidget::Run,
            FocusedWidget::Input(InputField::Text) => FocusedWidget::Input(InputField::Key),
            FocusedWidget::DirectionList => FocusedWidget::Input(InputField::Text),
            FocusedWidget::Run => FocusedWidget::DirectionList,
        };
    }

    fn handle_char(&mut self, c: char) {
        match &self.focused {
            FocusedWidget::Input(InputField::Key) => self.key.push(c),
            FocusedWidget::Input(InputField::Text) => self.text.push(c),
            _ => {}
        }
    }

    fn handle_backspace(&mut self) {
        match &self.focused {
            FocusedWidget::Input(InputField::Key) => {
                self.key.pop();
            }
            FocusedWidget::Input(InputField::Text) => {
                self.text.pop();
            }
            _ => {}
        }
    }

    fn next_direction(&mut self) {
        let i = match self.direction_state.selected() {
            Some(i) => {
                if i >= DIRECTIONS.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.direction_state.select(Some(i));
    }

    fn prev_direction(&mut self) {
        let i = match self.direction_state.selected() {
            Some(i) => {
                if i == 0 {
                    DIRECTIONS.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.direction_state.select(Some(i));
    }

    fn handle_enter(&mut self) {
        if matches!(self.focused, FocusedWidget::Run) {
            self.run_cipher();
        }
    }

    fn run_cipher(&mut self) {
        let shifts = match derive_shift_sequence(&self.key) {
            Ok(shifts) => shifts,
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                return;
            }
        };

        let selected = self.direction_state.selected().unwrap_or(0);
        let (direction, label) = DIRECTIONS[selected];

        self.result = apply_cipher(&self.text, &shifts, direction);
        self.status_message = format!("{} successful!", label);
    }
}

fn ui(f: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status
            Constraint::Length(2),  // Help
        ])
        .split(f.size());

    // Title
    let title = Paragraph::new("Vigenère Cipher")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Main content
    let main_chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Left panel - Inputs
    let left_chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),  // Key
            Constraint::Min(5),     // Text
            Constraint::Length(4),  // Direction
            Constraint::Length(3),  // Run button
        ])
        .split(main_chunks[0]);

    // Key input
    let key_style = if matches!(app.focused, FocusedWidget::Input(InputField::Key)) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let key_input = Paragraph::new(app.key.as_str())
        .block(Block::default().borders(Borders::ALL).title("Key (letters only)").border_style(key_style));
    f.render_widget(key_input, left_chunks[0]);

    // Text input
    let text_style = if matches!(app.focused, FocusedWidget::Input(InputField::Text)) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text_input = Paragraph::new(app.text.as_str())
        .block(Block::default().borders(Borders::ALL).title("Text").border_style(text_style))
        .wrap(Wrap { trim: false });
    f.render_widget(text_input, left_chunks[1]);

    // Direction list
    let direction_style = if matches!(app.focused, FocusedWidget::DirectionList) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let directions: Vec<ListItem> = DIRECTIONS
        .iter()
        .map(|(_, label)| ListItem::new(*label))
        .collect();
    let direction_list = List::new(directions)
        .block(Block::default().borders(Borders::ALL).title("Direction (↑↓ to select)").border_style(direction_style))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    f.render_stateful_widget(direction_list, left_chunks[2], &mut app.direction_state);

    // Run button
    let run_style = if matches!(app.focused, FocusedWidget::Run) {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Green)
    };
    let run_btn = Paragraph::new("Run")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(run_style));
    f.render_widget(run_btn, left_chunks[3]);

    // Right panel - Output
    let result_output = Paragraph::new(app.result.as_str())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: false });
    f.render_widget(result_output, main_chunks[1]);

    // Status bar
    let status_color = if app.status_message.starts_with("Error") {
        Color::Red
    } else {
        Color::Green
    };
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(status_color))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    // Help bar
    let help_text = "Tab: Next field | Shift+Tab: Prev | Enter: Run | ↑↓: Select direction | Esc: Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

pub fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = TuiApp::new();

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
