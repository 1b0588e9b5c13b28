use crate::app::{App, Pane};
use crate::components::list::ListContent;
use crate::components::FormField;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

/// Outcome of one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal; raw mode is undone if the rest of setup fails
    enable_raw_mode()?;
    let mut terminal = restore_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(stdout);
            Ok(Terminal::new(backend)?)
        },
        disable_raw_mode,
    )?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn restore_on_error<T, S, R>(setup: S, restore: R) -> Result<T>
where
    S: FnOnce() -> Result<T>,
    R: FnOnce() -> io::Result<()>,
{
    setup().map_err(|err| {
        if let Err(restore_err) = restore() {
            warn!("could not restore terminal: {}", restore_err);
        }
        err
    })
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(app, key) == Control::Quit {
                return Ok(());
            }
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Control {
    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return Control::Continue;
    }

    match app.focus {
        Pane::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('n') => app.focus = Pane::Form,
            KeyCode::Enter => app.change_selected_title(),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Err(err) = app.older_year() {
                    warn!("{}", err);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Err(err) = app.newer_year() {
                    warn!("{}", err);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            _ => {}
        },
        Pane::Form => match key.code {
            KeyCode::Esc => app.focus = Pane::List,
            KeyCode::Enter => {
                // Errors stay on the form and are drawn next frame
                if app.submit_form().is_ok() {
                    app.focus = Pane::List;
                }
            }
            KeyCode::Down => app.form.focus_next(),
            KeyCode::Up => app.form.focus_previous(),
            KeyCode::Backspace => app.form.pop_char(),
            KeyCode::Char(c) => app.form.push_char(c),
            _ => {}
        },
    }

    Control::Continue
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with year filter
            Constraint::Min(0),    // List + form
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Expense list
            Constraint::Percentage(40), // New expense form
        ])
        .split(chunks[1]);

    render_table(f, content_chunks[0], app);
    render_form(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn pane_border(app: &App, pane: Pane) -> Style {
    if app.focus == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let filter = app.list.filter();

    let mut spans = vec![Span::styled(
        "Filter by year: ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    for (i, year) in filter.options().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }

        let style = if *year == filter.selected() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(year.to_string(), style));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("Total: {}", app.expenses.len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let view = app.list_view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(app, Pane::List))
        .title(format!(" {} {} ", Pane::List.title(), view.selected_year));

    let items = match &view.content {
        ListContent::Empty(message) => {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", message),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )),
            ])
            .block(block);
            f.render_widget(empty, area);
            return;
        }
        ListContent::Items(items) => items,
    };

    let header_cells = ["Date", "Title", "Amount"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = items.iter().map(|item| {
        let cells = vec![
            Cell::from(format!(
                "{} {} {}",
                item.date.day, item.date.month, item.date.year
            )),
            Cell::from(item.title.clone()),
            Cell::from(item.amount.clone()).style(Style::default().fg(Color::Red)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Min(32),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    let mut state = TableState::default();
    state.select(app.selected());
    f.render_stateful_widget(table, area, &mut state);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.focus == Pane::Form;
    let mut content = vec![Line::from("")];

    for field in [FormField::Title, FormField::Amount, FormField::Date] {
        let marker = if editing && app.form.focus() == field {
            Span::styled("→ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        };

        let hint = match field {
            FormField::Date if app.form.value(field).is_empty() => "YYYY-MM-DD",
            _ => "",
        };

        content.push(Line::from(vec![
            marker,
            Span::styled(
                format!("{:<8}", field.label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(app.form.value(field).to_string()),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]));

        if let Some(err) = app.form.errors().and_then(|e| e.for_field(field)) {
            content.push(Line::from(Span::styled(
                format!("          {}", err),
                Style::default().fg(Color::Red),
            )));
        }
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![
        Span::styled(
            "  Enter",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            " to add expense, ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            "Esc",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            " to cancel",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    ]));

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(app, Pane::Form))
            .title(format!(" {} ", Pane::Form.title())),
    );

    f.render_widget(form, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.visible().len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Pane | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Year | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Change Title | "));
    status_spans.push(Span::styled("n", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" New | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::seed_expenses;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(app: &App) -> String {
        draw_sized(app, 120, 30)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_visible_items() {
        let app = App::with_expenses(seed_expenses(), 2021).unwrap();
        let screen = draw(&app);

        assert!(screen.contains("New TV"));
        assert!(screen.contains("$799.49"));
        assert!(screen.contains("February"));
        assert!(!screen.contains("Toilet Paper"));
    }

    #[test]
    fn test_renders_empty_state() {
        let app = App::with_expenses(seed_expenses(), 2023).unwrap();

        assert!(draw(&app).contains("Found no expenses."));
    }

    #[test]
    fn test_arrow_keys_change_year() {
        let mut app = App::with_expenses(seed_expenses(), 2023).unwrap();

        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Left));

        assert_eq!(app.list.selected_year(), 2021);
        assert!(draw(&app).contains("Expenses 2021"));
    }

    #[test]
    fn test_enter_changes_title() {
        let mut app = App::with_expenses(seed_expenses(), 2020).unwrap();

        handle_key(&mut app, key(KeyCode::Enter));

        assert!(draw(&app).contains("Updated!"));
        assert_eq!(app.expenses[0].title, "Toilet Paper");
    }

    #[test]
    fn test_typing_a_new_expense() {
        let mut app = App::with_expenses(seed_expenses(), 2022).unwrap();

        handle_key(&mut app, key(KeyCode::Char('n')));
        for c in "Rent".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Down));
        for c in "800".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Down));
        for c in "2022-03-01".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.focus, Pane::List);
        assert_eq!(app.expenses[0].title, "Rent");
        assert!(draw(&app).contains("$800"));
    }

    #[test]
    fn test_invalid_form_shows_errors() {
        let mut app = App::with_expenses(seed_expenses(), 2022).unwrap();

        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.focus, Pane::Form);
        assert!(draw(&app).contains("title is required"));
    }

    #[test]
    fn test_q_quits_only_from_list() {
        let mut app = App::with_expenses(seed_expenses(), 2022).unwrap();

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), Control::Quit);

        app.focus = Pane::Form;
        assert_eq!(
            handle_key(&mut app, key(KeyCode::Char('q'))),
            Control::Continue
        );
        assert_eq!(app.form.value(FormField::Title), "q");
    }

    #[test]
    fn test_long_title_is_not_cut() {
        let mut expenses = seed_expenses();
        expenses[0].title = "Annual subscription to the neighbourhood garden".to_string();
        let app = App::with_expenses(expenses, 2020).unwrap();

        let screen = draw_sized(&app, 200, 30);

        assert!(screen.contains("Annual subscription to the neighbourhood garden"));
        assert!(screen.contains("$94.12"));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;

        let result: Result<()> = restore_on_error(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored = true;
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let mut restored = false;

        let result = restore_on_error(
            || Ok(7),
            || {
                restored = true;
                Ok(())
            },
        );

        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }
}
