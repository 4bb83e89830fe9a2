use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{fs::File, io};

use mortgage_calculator::payment::{self, PaymentQuote, QuoteError, TERM_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Balance,
    Rate,
    Term,
}

#[derive(Debug, Clone)]
struct FormInputs {
    balance: String,
    rate: String,
    term_index: usize,
}

struct App {
    focus: Field,
    inputs: FormInputs,
    result: Option<Result<PaymentQuote, QuoteError>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            focus: Field::Balance,
            inputs: FormInputs {
                balance: String::new(),
                rate: String::new(),
                term_index: 0,
            },
            result: None,
        }
    }
}

impl App {
    fn term_years(&self) -> u32 {
        TERM_OPTIONS[self.inputs.term_index]
    }

    fn submit(&mut self) {
        let term = self.term_years().to_string();
        self.result = Some(payment::quote(
            &self.inputs.balance,
            &self.inputs.rate,
            &term,
        ));
    }
}

fn export_quote(quote: &PaymentQuote, filename: &str) -> Result<()> {
    let file = File::create(filename)?;
    serde_json::to_writer_pretty(file, quote)?;
    Ok(())
}

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::default();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if handle_form_input(&mut app, key)? {
                return Ok(());
            }
        }
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::Down => {
            app.focus = match app.focus {
                Field::Balance => Field::Rate,
                Field::Rate => Field::Term,
                Field::Term => Field::Balance,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = match app.focus {
                Field::Balance => Field::Term,
                Field::Rate => Field::Balance,
                Field::Term => Field::Rate,
            };
        }
        KeyCode::Enter => app.submit(),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(Ok(quote)) = &app.result {
                let filename = "payment_quote.json";
                match export_quote(quote, filename) {
                    Ok(_) => {
                        eprintln!("Exported to {}", filename);
                    }
                    Err(e) => {
                        eprintln!("Error exporting quote: {}", e);
                    }
                }
            }
        }
        KeyCode::Left | KeyCode::Right => {
            if app.focus == Field::Term {
                app.inputs.term_index = (app.inputs.term_index + 1) % TERM_OPTIONS.len();
            }
        }
        KeyCode::Char(c) => match app.focus {
            Field::Balance if c.is_numeric() || c == '.' || c == '-' => {
                app.inputs.balance.push(c);
            }
            Field::Rate if c.is_numeric() || c == '.' => {
                app.inputs.rate.push(c);
            }
            _ => {}
        },
        KeyCode::Backspace => match app.focus {
            Field::Balance => {
                app.inputs.balance.pop();
            }
            Field::Rate => {
                app.inputs.rate.pop();
            }
            Field::Term => {}
        },
        _ => {}
    }
    Ok(false)
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Mortgage Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_text_field(
        f,
        chunks[1],
        "Loan Amount",
        &format!("${}", app.inputs.balance),
        app.focus == Field::Balance,
    );
    render_text_field(
        f,
        chunks[2],
        "Interest Rate (%)",
        &format!("{}%", app.inputs.rate),
        app.focus == Field::Rate,
    );
    render_term_field(f, chunks[3], app);
    render_result(f, chunks[4], app);

    let help =
        Paragraph::new("Tab/↑↓: move | ←/→: change term | Enter: calculate | e: export | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);
}

fn render_text_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(value.to_string())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(label));
    f.render_widget(field, area);
}

fn render_term_field(f: &mut Frame, area: Rect, app: &App) {
    let options: Vec<Span> = TERM_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, years)| {
            let selected = i == app.inputs.term_index;
            let marker = if selected { "▶" } else { " " };
            let style = if selected && app.focus == Field::Term {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{} {} years   ", marker, years), style)
        })
        .collect();

    let field = Paragraph::new(Line::from(options)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Loan Term (years)"),
    );
    f.render_widget(field, area);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.result {
        Some(Ok(quote)) => Line::from(vec![
            Span::styled(
                format!("${:.2}", quote.monthly_payment),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" is your payment."),
        ]),
        Some(Err(err)) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    };

    let output = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Monthly Payment"),
    );
    f.render_widget(output, area);
}
