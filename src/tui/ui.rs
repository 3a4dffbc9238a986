//! Main rendering orchestration for the TUI dashboard.
//!
//! Composes the header, KPI card grid, customizer panel, and footer into
//! a cohesive layout, and records tile rectangles back onto the [`App`]
//! for mouse hit-testing.

use crate::layout as grid_layout;
use crate::tui::app::App;
use crate::widgets::{category_color, KpiTile};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "ChurchAfrica Dashboard";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str =
    "[c] Customize  [a] Recommended  [2-4] Columns  [r] Rows  [d] Density  [[/]] Move  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Width of the customizer side panel in columns.
const CUSTOMIZER_WIDTH: u16 = 38;

/// Renders the full dashboard layout: header, card grid, optional
/// customizer panel, and footer.
///
/// Updates `app.card_areas` and `app.grid_area` with the rectangles of
/// the render pass so mouse events can be hit-tested accurately.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // card grid (+ customizer)
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    if app.customizer_open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(CUSTOMIZER_WIDTH)])
            .split(chunks[1]);
        render_grid(frame, app, body[0]);
        render_customizer(frame, app, body[1]);
    } else {
        render_grid(frame, app, chunks[1]);
    }

    render_footer(frame, app, chunks[2]);

    if app.show_tour {
        render_tour_overlay(frame, area);
    }
}

/// Header with title (left), current date and version (right-aligned).
fn render_header(frame: &mut Frame, area: Rect) {
    let date = chrono::Local::now().format("%a %d %b %Y").to_string();
    let right = format!("{date}  {VERSION_TEXT}");
    let width = area.width as usize;
    let padding = width
        .saturating_sub(HEADER_TEXT.len())
        .saturating_sub(right.len());

    let header = Line::from(vec![
        Span::styled(
            HEADER_TEXT,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// The KPI card grid.
///
/// Tiles are placed row-major from the preview order, truncated to the
/// configured slot capacity; a selection larger than capacity keeps its
/// hidden tail in storage and simply does not render it.
fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let config = app.store.config().clone();
    let density = config.density;
    let gap = grid_layout::card_gap(density);
    let tile_height = grid_layout::card_height(density);
    let columns = config.cards_per_row.count();
    let rows = config.row_count.count();
    let shown = app.display_ids();

    app.grid_area = Some(area);
    app.card_areas.clear();

    if shown.is_empty() {
        let hint = Paragraph::new("No cards selected. Press c to open the customizer.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let mut row_constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Length(tile_height))
        .collect();
    row_constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .spacing(gap)
        .split(area);

    let column_areas: Vec<_> = (0..rows)
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(grid_layout::grid_columns(config.cards_per_row))
                .spacing(gap)
                .split(row_areas[row])
        })
        .collect();

    let drag_index = app.drag.drag_index();
    for (display_index, id) in shown.iter().enumerate() {
        let row = display_index / columns;
        let col = display_index % columns;
        let cell = column_areas[row][col];
        app.card_areas.push(cell);

        let selected = !app.customizer_open && display_index == app.selected;
        match app.registry.get(id) {
            Some(card) => {
                let tile = KpiTile::new(card, density)
                    .selected(selected)
                    .dragging(drag_index == Some(display_index));
                frame.render_widget(tile, cell);
            }
            None => {
                // Card id no longer in the catalog; render it inert
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(id.as_str());
                frame.render_widget(block, cell);
            }
        }
    }
}

/// The customizer side panel: catalog list with visibility checkmarks,
/// slot meter, and the current layout settings.
fn render_customizer(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.store.config();
    let slots = grid_layout::visible_slots(config);
    let used = config.visible_cards.len();

    let meter_style = if used >= slots {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::raw("Slots used: "),
            Span::styled(format!("{used}/{slots}"), meter_style),
        ]),
        Line::from(format!(
            "Columns: {}  Rows: {}  Density: {}",
            config.cards_per_row.count(),
            config.row_count.count(),
            config.density,
        )),
        Line::default(),
    ];

    for (index, card) in app.registry.cards().iter().enumerate() {
        let visible = config.visible_cards.iter().any(|id| id == card.id);
        let mark = if visible { "[x]" } else { "[ ]" };
        let cursor = if index == app.selected { "> " } else { "  " };
        let suffix = if card.recommended { " *" } else { "" };

        let mut style = Style::default().fg(category_color(card.category));
        if index == app.selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::raw(mark),
            Span::raw(" "),
            Span::styled(card.title, style),
            Span::styled(suffix, Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "space toggles, * = recommended",
        Style::default().fg(Color::DarkGray),
    ));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Customize Dashboard"),
    );
    frame.render_widget(panel, area);
}

/// Footer with keybindings, replaced by the status message while one is
/// active.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.status_message {
        Some((message, _)) => Paragraph::new(Line::styled(
            message.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Paragraph::new(Line::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(footer, area);
}

/// First-run tour overlay, centered over the dashboard.
fn render_tour_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 52, 12);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            "Welcome to your dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from("Press c to open the customizer and pick the KPI"),
        Line::from("cards that matter to your congregation."),
        Line::default(),
        Line::from("Drag cards with the mouse (or use [ and ]) to"),
        Line::from("arrange them. Changes are saved automatically."),
        Line::default(),
        Line::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let tour = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Getting started"),
        );
    frame.render_widget(tour, popup);
}

/// A centered rectangle of at most `width` x `height`, clamped to `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
