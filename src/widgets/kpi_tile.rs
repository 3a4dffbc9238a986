//! KPI card tile widget.
//!
//! Renders a single metric tile: bordered block titled with the card
//! name, headline value, and a delta line with a trend arrow. Tile
//! height and inner padding follow the density preset; the grid decides
//! the outer geometry.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::registry::KpiCard;
use crate::widgets::{category_color, trend_color};
use crate::Density;

/// One dashboard grid tile.
pub struct KpiTile<'a> {
    card: &'a KpiCard,
    density: Density,
    selected: bool,
    dragging: bool,
}

impl<'a> KpiTile<'a> {
    /// Creates a tile for `card` at the given density.
    pub fn new(card: &'a KpiCard, density: Density) -> Self {
        Self {
            card,
            density,
            selected: false,
            dragging: false,
        }
    }

    /// Marks the tile as the keyboard/mouse selection.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Marks the tile as the one being dragged.
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    fn border_style(&self) -> Style {
        if self.dragging {
            Style::default()
                .fg(ratatui::style::Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if self.selected {
            Style::default()
                .fg(ratatui::style::Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ratatui::style::Color::DarkGray)
        }
    }
}

impl Widget for KpiTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            self.card.title,
            Style::default().fg(category_color(self.card.category)),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        if self.density == Density::Comfortable {
            lines.push(Line::default());
        }
        lines.push(value_line(self.card));
        lines.push(delta_line(self.card));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// The headline figure line.
fn value_line(card: &KpiCard) -> Line<'static> {
    Line::from(Span::styled(
        card.value,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// The trend arrow plus delta figure line.
fn delta_line(card: &KpiCard) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            card.trend.arrow(),
            Style::default().fg(trend_color(card.trend)),
        ),
        Span::raw(" "),
        Span::styled(card.delta, Style::default().fg(trend_color(card.trend))),
    ])
}
