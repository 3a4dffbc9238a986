//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render
//! loop. All dashboard mutations flow through [`ConfigStore::update`];
//! the app itself only holds view state (selection, panel visibility,
//! the drag preview order).

use crate::layout;
use crate::registry::CardRegistry;
use crate::reorder::{self, hover_commits, CardOrder, DragState};
use crate::store::ConfigStore;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler, MoveDirection};
use crate::tui::ui::render_dashboard;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long transient status messages stay in the footer.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Owner of the persisted dashboard configuration.
    pub store: ConfigStore,
    /// The card catalog.
    pub registry: CardRegistry,
    /// Drag preview of the card ordering, mirroring `visibleCards`
    /// between drags and diverging only while a drag is in flight.
    pub order: CardOrder,
    /// Drag state machine for the grid.
    pub drag: DragState,
    /// Whether the customizer side panel is open.
    pub customizer_open: bool,
    /// Selected index: into the catalog list when the customizer is
    /// open, into the displayed grid otherwise.
    pub selected: usize,
    /// Whether the first-run tour overlay is showing.
    pub show_tour: bool,
    /// Temporary status message shown in the footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Tile rectangles from the last render pass, indexed by display
    /// position. Used by mouse hit-testing.
    pub card_areas: Vec<Rect>,
    /// Grid rectangle from the last render pass. A drop outside it
    /// abandons the drag.
    pub grid_area: Option<Rect>,
    /// Render tick rate.
    tick_rate: Duration,
}

impl App {
    /// Creates a new App over an opened store and registry.
    ///
    /// `tour_enabled` comes from the `[tui] tour` config flag; the
    /// overlay shows only when enabled and not yet dismissed.
    pub fn new(
        store: ConfigStore,
        registry: CardRegistry,
        tick_rate: Duration,
        tour_enabled: bool,
    ) -> Self {
        let order = CardOrder::new(&store.config().visible_cards);
        let show_tour = tour_enabled && !store.tour_seen();
        Self {
            should_quit: false,
            store,
            registry,
            order,
            drag: DragState::default(),
            customizer_open: false,
            selected: 0,
            show_tour,
            status_message: None,
            tick_count: 0,
            card_areas: Vec::new(),
            grid_area: None,
            tick_rate,
        }
    }

    /// Card ids currently shown in the grid: the preview order truncated
    /// to the configured slot capacity.
    pub fn display_ids(&self) -> Vec<String> {
        let limit = layout::visible_slots(self.store.config());
        self.order.ids().iter().take(limit).cloned().collect()
    }

    /// Count of tiles currently shown in the grid.
    pub fn displayed_count(&self) -> usize {
        layout::visible_slots(self.store.config()).min(self.order.len())
    }

    /// Catalog card id at the given customizer list index.
    pub fn catalog_card_id(&self, index: usize) -> Option<String> {
        self.registry.cards().get(index).map(|card| card.id.to_string())
    }

    /// Opens or closes the customizer panel, resetting the selection.
    pub fn toggle_customizer(&mut self) {
        self.customizer_open = !self.customizer_open;
        self.selected = 0;
    }

    /// Esc: close the customizer if open, otherwise reset the selection.
    pub fn escape(&mut self) {
        if self.customizer_open {
            self.customizer_open = false;
        }
        self.selected = 0;
    }

    /// Length of the list the selection currently indexes.
    fn selection_limit(&self) -> usize {
        if self.customizer_open {
            self.registry.len()
        } else {
            self.displayed_count()
        }
    }

    /// Moves the selection down by one, clamped to the last entry.
    pub fn select_next(&mut self) {
        let limit = self.selection_limit();
        if limit == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(limit - 1);
    }

    /// Moves the selection up by one, clamped to index 0.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamps the selection after the underlying list shrank.
    fn clamp_selection(&mut self) {
        let limit = self.selection_limit();
        if limit == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(limit - 1);
        }
    }

    /// Shows a transient footer message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Re-mirrors the preview order from the stored configuration.
    fn mirror_order(&mut self) {
        self.order = CardOrder::new(&self.store.config().visible_cards);
    }

    /// Applies an action produced by key handling.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleCard(id) => self.toggle_card(&id),
            Action::ApplyPreset => {
                let updated = layout::apply_ai_preset(self.store.config(), &self.registry);
                self.store.update(updated);
                self.mirror_order();
                self.clamp_selection();
                self.set_status("Recommended cards applied");
            }
            Action::SetColumns(cards_per_row) => {
                let mut updated = self.store.config().clone();
                updated.cards_per_row = cards_per_row;
                self.store.update(updated);
                self.clamp_selection();
            }
            Action::ToggleRows => {
                let mut updated = self.store.config().clone();
                updated.row_count = updated.row_count.toggle();
                self.store.update(updated);
                self.clamp_selection();
            }
            Action::CycleDensity => {
                let mut updated = self.store.config().clone();
                updated.density = updated.density.cycle();
                let density = updated.density;
                self.store.update(updated);
                self.set_status(format!("Density: {density}"));
            }
            Action::MoveSelected(direction) => self.move_selected(direction),
            Action::DismissTour => {
                self.show_tour = false;
                self.store.mark_tour_seen();
            }
        }
    }

    /// Adds or removes a card, surfacing capacity rejections as a
    /// footer message instead of an error.
    fn toggle_card(&mut self, id: &str) {
        match layout::toggle_card(self.store.config(), id) {
            Ok(updated) => {
                self.store.update(updated);
                let visible = self.store.config().visible_cards.clone();
                self.order.resync(&visible);
                self.clamp_selection();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Moves the selected visible card one position and commits.
    fn move_selected(&mut self, direction: MoveDirection) {
        let shown = self.displayed_count();
        if shown == 0 {
            return;
        }
        let from = self.selected.min(shown - 1);
        let to = match direction {
            MoveDirection::Left => from.checked_sub(1),
            MoveDirection::Right => (from + 1 < shown).then_some(from + 1),
        };
        let Some(to) = to else {
            return;
        };
        let mut updated = self.store.config().clone();
        updated.visible_cards = reorder::move_card(&updated.visible_cards, from, to);
        self.store.update(updated);
        self.mirror_order();
        self.selected = to;
    }

    /// Hit-tests a pointer position against the last render's tiles.
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .position(|area| rect_contains(*area, column, row))
    }

    /// Handles a mouse event: press begins a drag over a tile, motion
    /// applies the midpoint hover heuristic to the preview order, and
    /// release either commits (inside the grid) or abandons the drag.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.hit_test(mouse.column, mouse.row) {
                    if !self.customizer_open {
                        self.selected = index;
                    }
                    self.drag.begin(index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(drag_index) = self.drag.drag_index() else {
                    return;
                };
                let Some(hover_index) = self.hit_test(mouse.column, mouse.row) else {
                    return;
                };
                let Some(target) = self.card_areas.get(hover_index).copied() else {
                    return;
                };
                if hover_commits(drag_index, hover_index, mouse.row, target) {
                    self.order.move_card(drag_index, hover_index);
                    self.drag.retarget(hover_index);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.drag.is_dragging() {
                    return;
                }
                let inside_grid = self
                    .grid_area
                    .map(|area| rect_contains(area, mouse.column, mouse.row))
                    .unwrap_or(false);
                self.drag.complete();
                if inside_grid {
                    self.commit_order();
                } else {
                    // Abandoned drag: revert the preview, nothing persisted
                    self.mirror_order();
                }
            }
            _ => {}
        }
    }

    /// Persists the preview order as the new `visibleCards`.
    fn commit_order(&mut self) {
        let mut updated = self.store.config().clone();
        updated.visible_cards = self.order.ids().to_vec();
        self.store.update(updated);
    }

    /// Runs the TUI application: sets up terminal, enters event loop,
    /// restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            terminal.draw(|frame| {
                render_dashboard(frame, self);
            })?;

            let event = event_handler.next(&mut reader).await?;
            match event {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    if action == Action::Quit {
                        self.should_quit = true;
                        return Ok(());
                    }
                    self.apply_action(action);
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                }
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }
        }
    }
}

/// Returns `true` if the point lies inside the rectangle.
fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
