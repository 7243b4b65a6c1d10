use crate::manifest::Category;
use crate::ui::app::{App, FocusPane};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Inner width of the category pane.
pub const CATEGORY_PANE_WIDTH: u16 = 22;
/// Width of the package name column.
pub const NAME_COLUMN_WIDTH: usize = 24;
/// Smallest terminal that still fits both panes.
pub const MIN_WIDTH: u16 = CATEGORY_PANE_WIDTH + 2 + 14;
pub const MIN_HEIGHT: u16 = 5;

const TITLE: &str = "mrk brew";
const FOOTER: &str =
    "↑↓/jk move · tab/hl switch pane · space toggle · a all · enter confirm · q quit";
const ELLIPSIS: char = '…';
const CURSOR: &str = "▸ ";
const INSTALLED_MARK: &str = "● ";
const SELECTED_MARK: &str = "✓ ";
const NO_MARK: &str = "  ";
const COLUMN_GAP: usize = 2;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = viewport_area(frame.area(), app.viewport);
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, theme);
        return;
    }

    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, theme, main_chunks[0]);

    // Fixed category pane (plus its two border columns), packages take the rest
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CATEGORY_PANE_WIDTH + 2),
            Constraint::Min(0),
        ])
        .split(main_chunks[1]);

    render_categories(frame, app, theme, body_chunks[0]);
    render_packages(frame, app, theme, body_chunks[1]);

    render_footer(frame, theme, main_chunks[2]);
}

/// The part of the frame covered by the model's viewport. A model that has
/// not been sized yet gets the whole frame.
fn viewport_area(frame_area: Rect, (width, height): (u16, u16)) -> Rect {
    if width == 0 || height == 0 {
        return frame_area;
    }
    Rect {
        width: frame_area.width.min(width),
        height: frame_area.height.min(height),
        ..frame_area
    }
}

/// Cut `text` to at most `width` terminal cells, ending in `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - ELLIPSIS.width().unwrap_or(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > budget {
            break;
        }
        used += cells;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// First visible row of a list so that `cursor` stays inside a window of
/// `height` rows.
pub fn scroll_start(cursor: usize, height: usize) -> usize {
    if cursor >= height {
        cursor + 1 - height
    } else {
        0
    }
}

/// `(total)`, or `(selected/total)` once anything in the category is picked.
pub fn category_badge(category: &Category) -> String {
    let total = category.entries.len();
    match category.selected_count() {
        0 => format!("({total})"),
        selected => format!("({selected}/{total})"),
    }
}

fn pane_block(focused: bool, theme: &Theme) -> Block<'static> {
    let border_color = if focused {
        theme.accent
    } else {
        theme.fg_subtle
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    ));
    let count = Paragraph::new(Span::styled(
        format!("{} selected", app.total_selected()),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    frame.render_widget(title, area);
    frame.render_widget(count, area);
}

fn render_categories(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let focused = app.focus == FocusPane::Categories;
    let inner_width = usize::from(area.width.saturating_sub(2));
    let height = usize::from(area.height.saturating_sub(2));
    let start = scroll_start(app.category_index, height);

    let normal = Style::default().fg(theme.fg);
    let dim = Style::default().fg(theme.fg_subtle);
    let active = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let active_badge = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = app
        .categories
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, category)| {
            let badge = category_badge(category);
            // cursor (2) + name + at least one space + badge
            let name_width = inner_width
                .saturating_sub(badge.width() + 3)
                .max(1);
            let name = truncate(&category.name, name_width);
            let pad = " ".repeat(name_width.saturating_sub(name.width()) + 1);

            let (label, name_style, badge_style) = match (i == app.category_index, focused) {
                (true, true) => (format!("{CURSOR}{name}"), active, active_badge),
                (true, false) => (format!("{CURSOR}{name}"), normal, normal),
                (false, _) => (format!("{NO_MARK}{name}"), normal, dim),
            };

            Line::from(vec![
                Span::styled(label, name_style),
                Span::raw(pad),
                Span::styled(badge, badge_style),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(pane_block(focused, theme)),
        area,
    );
}

fn render_packages(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let focused = app.focus == FocusPane::Packages;
    let block = pane_block(focused, theme);
    let entries = app.current_entries();

    let dim = Style::default().fg(theme.fg_subtle);
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No packages", dim)).block(block),
            area,
        );
        return;
    }

    let inner_width = usize::from(area.width.saturating_sub(2));
    let height = usize::from(area.height.saturating_sub(2));
    let desc_width = inner_width.saturating_sub(NAME_COLUMN_WIDTH + NO_MARK.width() + COLUMN_GAP);
    let start = scroll_start(app.entry_index, height);

    let normal = Style::default().fg(theme.fg);
    let installed = Style::default().fg(theme.fg_installed);
    let selected = Style::default().fg(theme.selected);
    let cursor = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, entry)| {
            let name = truncate(&entry.name, NAME_COLUMN_WIDTH);
            let pad = " ".repeat(
                NAME_COLUMN_WIDTH.saturating_sub(name.width()) + COLUMN_GAP,
            );
            let desc = truncate(entry.description.as_deref().unwrap_or_default(), desc_width);
            let is_cursor = focused && i == app.entry_index;

            let (mark, mark_style, name_style, desc_style) = if entry.installed {
                (INSTALLED_MARK, installed, installed, installed)
            } else if is_cursor {
                let desc_style = if entry.is_selected() { selected } else { dim };
                (CURSOR, cursor, cursor, desc_style)
            } else if entry.is_selected() {
                (SELECTED_MARK, selected, selected, selected)
            } else {
                (NO_MARK, normal, normal, dim)
            };

            Line::from(vec![
                Span::styled(mark, mark_style),
                Span::styled(name, name_style),
                Span::raw(pad),
                Span::styled(desc, desc_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let footer = Paragraph::new(FOOTER).style(Style::default().fg(theme.fg_subtle));
    frame.render_widget(footer, area);
}

fn render_too_small(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new(format!(
        "Terminal too small ({}x{}), need {MIN_WIDTH}x{MIN_HEIGHT}",
        area.width, area.height
    ))
    .style(Style::default().fg(theme.fg_subtle));
    frame.render_widget(message, area);
}
