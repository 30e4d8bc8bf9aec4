//! TUI rendering for Guess using ratatui.

mod format;
mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use guess_engine::{App, Phase};

use self::format::{
    attempts_text, feedback_style, feedback_text, outcome_glyph, prompt_text, tally_text,
};

const TITLE: &str = "Welcome to the Guessing Game!";
const HISTORY_COLUMN_WIDTH: u16 = 14;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title + prompt
            Constraint::Length(3), // Input
            Constraint::Length(2), // Feedback + attempts
            Constraint::Min(3),    // History
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette);
    draw_input(frame, app, chunks[1], &palette, &glyphs);
    draw_feedback(frame, app, chunks[2], &palette);
    draw_history(frame, app, chunks[3], &palette, &glyphs);
    draw_hints(frame, app, chunks[4], &palette);
    draw_status_bar(frame, app, chunks[5], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(TITLE, styles::title(palette))),
        Line::from(Span::styled(
            prompt_text(app.attempts_limit()),
            Style::default().fg(palette.text_primary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let guessing = app.phase() == Phase::Guessing;
    let border_style = if guessing {
        Style::default().fg(palette.green)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let prompt = format!("{} ", glyphs.prompt);
    let content = if guessing {
        Line::from(vec![
            Span::styled(prompt.clone(), Style::default().fg(palette.green)),
            Span::styled(
                app.draft_text().to_string(),
                Style::default().fg(palette.text_primary),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Play again? (y/n)",
            Style::default()
                .fg(palette.yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if guessing {
        let offset = prompt.width() + app.draft().before_cursor().width();
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + offset as u16).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_feedback(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let feedback_line = match app.feedback() {
        Some(feedback) => Line::from(Span::styled(
            feedback_text(feedback),
            feedback_style(feedback, palette),
        )),
        None => Line::from(""),
    };
    let lines = vec![
        feedback_line,
        Line::from(Span::styled(
            attempts_text(app.session()),
            Style::default().fg(palette.text_primary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let history = app.session().history();
    // Borders plus header row.
    let visible = usize::from(area.height.saturating_sub(3));
    let skip = history.len().saturating_sub(visible);

    let rows = history.iter().enumerate().skip(skip).map(|(i, record)| {
        Row::new(vec![
            record.number().to_string(),
            record.guess().to_string(),
            outcome_glyph(record.outcome(), glyphs).to_string(),
        ])
        .style(styles::table_row(palette, i))
    });

    let header = Row::new(vec!["Attempt", "Your Guess", "Hint/Result"])
        .style(styles::table_header(palette));

    let table = Table::new(rows, [Constraint::Length(HISTORY_COLUMN_WIDTH); 3])
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary)),
        );
    frame.render_widget(table, area);
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.phase() {
        Phase::Guessing => vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" submit  ", styles::key_hint(palette)),
            Span::styled("Esc", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ],
        Phase::GameOver => vec![
            Span::styled("y", styles::key_highlight(palette)),
            Span::styled(" play again  ", styles::key_hint(palette)),
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ],
    };
    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            tally_text(app.tally(), app.attempts_limit(), glyphs),
            Style::default().fg(palette.text_muted),
        ),
    ]));
    frame.render_widget(status, area);
}
