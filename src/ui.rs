use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use tokio::runtime::Runtime;
use wealth_board::{
    format_money, Board, Command, Dispatcher, Outcome, PersonSource, MILLIONAIRE_THRESHOLD,
};

pub struct App<S> {
    dispatcher: Dispatcher<S>,
    runtime: Runtime,
    /// Last rendered copy of the board
    pub board: Board,
    pub state: TableState,
    /// Result of the last command, or the error it failed with
    pub status: Option<StatusMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl<S: PersonSource> App<S> {
    pub fn new(dispatcher: Dispatcher<S>, runtime: Runtime) -> Self {
        let board = runtime.block_on(dispatcher.snapshot());

        let mut state = TableState::default();
        if !board.is_empty() {
            state.select(Some(0));
        }

        Self {
            dispatcher,
            runtime,
            board,
            state,
            status: None,
        }
    }

    /// Run a command to completion and redraw from the new board.
    pub fn run_command(&mut self, command: Command) {
        match self.runtime.block_on(self.dispatcher.dispatch(command)) {
            Ok(Outcome::Rerender) => {
                self.status = Some(StatusMessage::Info(format!("{} done", command.as_str())));
            }
            Ok(Outcome::Summary { total }) => {
                self.status = Some(StatusMessage::Info(format!(
                    "Total Wealth: {}",
                    format_money(total)
                )));
            }
            Err(err) => {
                self.status = Some(StatusMessage::Error(err.to_string()));
            }
        }

        self.board = self.runtime.block_on(self.dispatcher.snapshot());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.board.len();
        if len == 0 {
            self.state.select(None);
        } else {
            let i = self.state.selected().unwrap_or(0).min(len - 1);
            self.state.select(Some(i));
        }
    }

    pub fn next(&mut self) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui<S: PersonSource>(app: &mut App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: PersonSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('a') => {
                    app.status = Some(StatusMessage::Info("Fetching random user...".to_string()));
                    terminal.draw(|f| ui(f, app))?;
                    app.run_command(Command::AddPerson);
                }
                KeyCode::Char('d') => app.run_command(Command::DoubleMoney),
                KeyCode::Char('s') => app.run_command(Command::SortByRichest),
                KeyCode::Char('m') => app.run_command(Command::ShowMillionaires),
                KeyCode::Char('w') => app.run_command(Command::CalculateWealth),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => {
                    if !app.board.is_empty() {
                        app.state.select(Some(0));
                    }
                }
                KeyCode::End => {
                    if !app.board.is_empty() {
                        app.state.select(Some(app.board.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui<S: PersonSource>(f: &mut Frame, app: &mut App<S>) {
    let summary_height = if app.board.summaries().is_empty() {
        0
    } else {
        app.board.summaries().len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(0),                 // People
            Constraint::Length(summary_height), // Wealth summaries
            Constraint::Length(3),              // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    if summary_height > 0 {
        render_summaries(f, chunks[2], app);
    }
    render_status_bar(f, chunks[3], app);
}

fn render_header<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let millionaires = app
        .board
        .people()
        .iter()
        .filter(|p| p.money > MILLIONAIRE_THRESHOLD)
        .count();

    let header_text = vec![Line::from(vec![
        Span::styled(
            "Person Wealth",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("People: {}", app.board.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Millionaires: {}", millionaires),
            Style::default().fg(Color::Green),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_table<S>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let header_cells = ["Person", "Wealth"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.board.people().iter().map(|person| {
        let color = if person.money > MILLIONAIRE_THRESHOLD {
            Color::Green
        } else {
            Color::White
        };

        Row::new(vec![
            Cell::from(truncate(&person.name, 40)),
            Cell::from(format_money(person.money)).style(Style::default().fg(color)),
        ])
        .height(1)
    });

    let table = Table::new(rows, [Constraint::Length(42), Constraint::Min(16)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" People "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_summaries<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let lines: Vec<Line> = app
        .board
        .summaries()
        .iter()
        .map(|total| {
            Line::from(vec![
                Span::raw(" Total Wealth: "),
                Span::styled(
                    format_money(*total),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Wealth "),
    );

    f.render_widget(panel, area);
}

fn render_status_bar<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut status_spans = vec![];

    match &app.status {
        Some(StatusMessage::Info(message)) => {
            status_spans.push(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Cyan),
            ));
            status_spans.push(Span::raw("|"));
        }
        Some(StatusMessage::Error(message)) => {
            status_spans.push(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            status_spans.push(Span::raw("|"));
        }
        None => {}
    }

    for (key, label) in [
        ("a", "Add"),
        ("d", "Double"),
        ("s", "Sort"),
        ("m", "Millionaires"),
        ("w", "Wealth"),
        ("↑/↓", "Nav"),
    ] {
        status_spans.push(Span::raw(" "));
        status_spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {} |", label)));
    }
    status_spans.push(Span::raw(" "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
