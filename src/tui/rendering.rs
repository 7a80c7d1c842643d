use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::layout::AppLayout;
use super::text_panel::TextPanel;
use super::timestamps::format_history_time;
use crate::controller::AppState;
use crate::models::{ConversionDirection, ConversionHistoryItem};
use crate::utils::sanitize_for_display;

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const INDIGO: Color = Color::Rgb(79, 70, 229);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);
const ERROR_RED: Color = Color::Rgb(239, 68, 68);

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which text panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Input,
    Output,
}

impl Panel {
    pub fn toggled(self) -> Self {
        match self {
            Panel::Input => Panel::Output,
            Panel::Output => Panel::Input,
        }
    }
}

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub state: &'a AppState,
    pub focus: Panel,
    /// Panel currently showing the "copied" acknowledgement
    pub copied: Option<Panel>,
    /// Frame counter driving the loading spinner
    pub tick: usize,
    /// Rows the output panel is scrolled down
    pub output_scroll: u16,
}

/// Render the entire UI. Returns the largest scroll offset the output panel
/// accepts at the current size.
pub fn render_ui(frame: &mut Frame, view: &RenderState) -> u16 {
    let state = view.state;
    let layout = AppLayout::new(frame.area(), state.error().is_some());

    if let Some(error) = state.error() {
        render_error_banner(frame, layout.error_area, error);
    }

    let input = TextPanel::new(state.input_label(), state.input_placeholder(), state.input())
        .clearable(true)
        .focused(view.focus == Panel::Input)
        .copied(view.copied == Some(Panel::Input));
    frame.render_widget(input, layout.input_area);

    let output = TextPanel::new(state.output_label(), state.output_placeholder(), state.output())
        .read_only(true)
        .focused(view.focus == Panel::Output)
        .copied(view.copied == Some(Panel::Output))
        .scroll(view.output_scroll);
    let output_max_scroll = output.max_scroll(layout.output_area);
    frame.render_widget(output, layout.output_area);

    render_history(frame, layout.history_area, state.history().items());
    render_status_bar(frame, layout.status_area, state, view.tick);

    output_max_scroll
}

fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(ERROR_RED)),
        Span::styled(
            error.to_string(),
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ERROR_RED)))
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn direction_style(direction: ConversionDirection) -> Style {
    let color = match direction {
        ConversionDirection::UnicodeToBijoy => ACCENT,
        ConversionDirection::BijoyToUnicode => Color::Rgb(59, 130, 246), // Blue
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_history(frame: &mut Frame, area: Rect, items: &[ConversionHistoryItem]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(Span::styled(
            " Recent Conversions ",
            Style::default().fg(INDIGO).add_modifier(Modifier::BOLD),
        ));

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No recent conversion history.",
            Style::default().fg(MUTED),
        ))
        .centered()
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let now = Local::now();
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            // Previews may end in "..." and never span lines
            let original = sanitize_for_display(item.original()).replace(['\n', '\r'], " ");
            let converted = sanitize_for_display(item.converted()).replace(['\n', '\r'], " ");

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", item.direction().badge()),
                    direction_style(item.direction()),
                ),
                Span::styled(
                    format!("{:>12}  ", format_history_time(&item.timestamp(), &now)),
                    Style::default().fg(MUTED),
                ),
                Span::styled(original, Style::default().fg(BRIGHT)),
                Span::styled("  →  ", Style::default().fg(MUTED)),
                Span::raw(converted),
            ]))
        })
        .collect();

    frame.render_widget(List::new(rows).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, tick: usize) {
    let mut parts = vec![];

    parts.push(format!("[{}]", state.direction().badge()));

    if state.is_loading() {
        parts.push(format!("{} Converting...", SPINNER[tick % SPINNER.len()]));
    }

    parts.push("Enter: convert".to_string());
    parts.push("Ctrl+S: swap".to_string());
    parts.push("Ctrl+L: clear".to_string());
    parts.push("Tab: focus".to_string());
    parts.push("PgUp/PgDn: scroll".to_string());
    parts.push("Ctrl+Y: copy".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let style = Style::default().fg(BRIGHT).bg(STATUS_BG);
    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | "))).style(style);

    frame.render_widget(paragraph, area);
}
