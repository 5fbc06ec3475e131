//! TUI views and rendering
//!
//! Draws the UI from AppState and never modifies it.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::trace;

use super::state::{AppState, FormField, FormState, Phase};
use crate::domain::{Interest, ItineraryPlan};
use crate::render::{ActivityCategory, PlanView};

const APP_TITLE: &str = "AI Student Travel Planner";
const TAGLINE: &str = "Your next adventure, intelligently planned.";

mod colors {
    use ratatui::style::Color;

    pub const TITLE: Color = Color::Rgb(147, 51, 234); // Purple
    pub const ACCENT: Color = Color::Rgb(79, 70, 229); // Indigo
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const COST: Color = Color::Rgb(22, 163, 74); // Green
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const SELECTED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const DIM: Color = Color::DarkGray;
}

/// Timeline color for an activity category
fn category_color(category: ActivityCategory) -> Color {
    match category {
        ActivityCategory::Food => Color::Rgb(255, 165, 0),
        ActivityCategory::Culture => Color::Rgb(186, 85, 211),
        ActivityCategory::Adventure => Color::Rgb(50, 205, 50),
        ActivityCategory::Nightlife => Color::Rgb(100, 149, 237),
        ActivityCategory::Default => colors::ACCENT,
    }
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(phase = state.phase.name(), "render: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match &state.phase {
        Phase::Collecting => render_form(&state.form, frame, chunks[1]),
        Phase::Requesting => render_loading(state, frame, chunks[1]),
        Phase::Displaying(plan) => render_itinerary(plan, state.scroll, frame, chunks[1]),
        Phase::Failed(message) => render_failure(message, frame, chunks[1]),
    }

    render_footer(state, frame, chunks[2]);
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(colors::TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(colors::DIM))),
    ];
    if !state.model.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("model: {}", state.model),
            Style::default().fg(colors::DIM),
        )));
    }

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Style for a form section title depending on focus
fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn render_form(form: &FormState, frame: &mut Frame, area: Rect) {
    trace!(focus = ?form.focus, "render_form: called");
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ACCENT))
        .title(" Plan a trip ");
    let inner = outer.inner(area).inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    frame.render_widget(outer, area);

    let interest_rows = Interest::ALL.len().div_ceil(2) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Destination
            Constraint::Length(3),                 // Budget
            Constraint::Length(interest_rows + 2), // Interests
            Constraint::Length(1),                 // Error
            Constraint::Length(3),                 // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    // Destination
    let focused = form.focus == FormField::Destination;
    let input = if form.destination.is_empty() {
        Span::styled("e.g., Tokyo, Japan", Style::default().fg(colors::DIM))
    } else {
        Span::raw(form.destination.as_str())
    };
    let destination = Paragraph::new(Line::from(input)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(label_style(focused))
            .title(Span::styled(" Where are you dreaming of going? ", label_style(focused))),
    );
    frame.render_widget(destination, chunks[0]);
    if focused {
        let x = chunks[0].x + 1 + form.cursor as u16;
        frame.set_cursor_position((x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
    }

    // Budget
    let focused = form.focus == FormField::Budget;
    let budget = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(colors::DIM)),
        Span::styled(form.budget.label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ▶  ", Style::default().fg(colors::DIM)),
        Span::styled(form.budget.hint(), Style::default().fg(colors::DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(label_style(focused))
            .title(Span::styled(" What's your travel style? ", label_style(focused))),
    );
    frame.render_widget(budget, chunks[1]);

    // Interests
    let focused = form.focus == FormField::Interests;
    let interests = Paragraph::new(interest_lines(form, focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(label_style(focused))
            .title(Span::styled(" What are your interests? ", label_style(focused))),
    );
    frame.render_widget(interests, chunks[2]);

    if let Some(error) = form.error() {
        let error = Paragraph::new(Span::styled(error, Style::default().fg(colors::ERROR)))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);
    }

    // Submit
    let focused = form.focus == FormField::Submit;
    let label = if form.submitting {
        "Generating Your Adventure..."
    } else {
        "Plan My Trip!"
    };
    let button_style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    };
    let submit = Paragraph::new(Span::styled(format!("  {}  ", label), button_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(label_style(focused)));
    frame.render_widget(submit, chunks[4]);
}

/// Two-column checklist of interests
fn interest_lines(form: &FormState, focused: bool) -> Vec<Line<'static>> {
    let cell = |idx: usize| -> Vec<Span<'static>> {
        let interest = Interest::ALL[idx];
        let selected = form.is_selected(interest);
        let mark = if selected { "[x] " } else { "[ ] " };
        let mut style = if selected {
            Style::default().fg(colors::SELECTED)
        } else {
            Style::default()
        };
        if focused && idx == form.interest_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        vec![Span::styled(format!("{}{:<16}", mark, interest.label()), style)]
    };

    let rows = Interest::ALL.len().div_ceil(2);
    (0..rows)
        .map(|row| {
            let mut spans = cell(row);
            if row + rows < Interest::ALL.len() {
                spans.push(Span::raw("  "));
                spans.extend(cell(row + rows));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let spinner = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let elapsed = state.elapsed_secs();
    let frame_char = spinner[(elapsed as usize) % spinner.len()];

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("{} ", frame_char), Style::default().fg(colors::ACCENT)),
            Span::styled(
                "Crafting your perfect student trip...",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("This might take a moment.", Style::default().fg(colors::DIM))),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{}... ({}s)", state.loading_word, elapsed),
            Style::default().fg(colors::KEYBIND),
        )),
    ];

    let loading = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn render_failure(message: &str, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Oops! Something went wrong.",
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(colors::ERROR))),
        Line::raw(""),
        Line::from(Span::styled(
            "[ Start Over ]",
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    let failure = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ERROR)),
        );
    frame.render_widget(failure, area);
}

/// Lines of the itinerary view: banner, day sections, closing button
fn itinerary_lines(plan: &ItineraryPlan) -> Vec<Line<'_>> {
    let view = PlanView::from_plan(plan);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Your {}-Day Adventure in", view.trip_days),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            view.destination,
            Style::default().fg(colors::TITLE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    for day in &view.days {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                day.heading(),
                Style::default()
                    .fg(Color::White)
                    .bg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(day.daily_budget, Style::default().fg(Color::Yellow)),
        ]));

        for entry in &day.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>12} ", entry.time),
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled("│ ", Style::default().fg(colors::DIM)),
                Span::styled(
                    format!("{} ", entry.category.glyph()),
                    Style::default().fg(category_color(entry.category)),
                ),
                Span::styled(entry.description, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(13)),
                Span::styled("│    ", Style::default().fg(colors::DIM)),
                Span::styled(entry.estimated_cost, Style::default().fg(colors::COST)),
            ]));
        }
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(Span::styled(
            "[ Plan Another Trip ]",
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines
}

fn render_itinerary(plan: &ItineraryPlan, scroll: u16, frame: &mut Frame, area: Rect) {
    trace!(scroll, "render_itinerary: called");
    let lines = itinerary_lines(plan);
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));

    let itinerary = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL))
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(itinerary, area);
}

/// Key hints for the current phase
fn keybinds(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match &state.phase {
        Phase::Collecting => match state.form.focus {
            FormField::Destination => vec![("[Tab]", "Next field"), ("[Enter]", "Plan"), ("[Esc]", "Quit")],
            FormField::Budget => vec![("[←/→]", "Change"), ("[Tab]", "Next field"), ("[q]", "Quit")],
            FormField::Interests => vec![("[↑/↓]", "Move"), ("[Space]", "Toggle"), ("[Tab]", "Next field")],
            FormField::Submit => vec![("[Enter]", "Plan My Trip!"), ("[Tab]", "Next field"), ("[q]", "Quit")],
        },
        Phase::Requesting => vec![("[q]", "Quit")],
        Phase::Displaying(_) => vec![("[↑/↓]", "Scroll"), ("[r]", "Plan Another Trip"), ("[q]", "Quit")],
        Phase::Failed(_) => vec![("[r]", "Start Over"), ("[q]", "Quit")],
    }
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in keybinds(state) {
        spans.push(Span::styled(key, Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    spans.push(Span::styled(
        format!("│ © {} {}", chrono::Local::now().year(), APP_TITLE),
        Style::default().fg(colors::DIM),
    ));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
