use crossterm::event::KeyCode;
use rusqlite::Connection;

use crate::db;
use crate::palette;
use crate::types::{Palette, PaletteId};

use super::{AppEvent, AppView};

/// Ticks a status message stays visible. Six ticks at the 250ms tick rate
/// is the same 1.5s flash the copy feedback uses.
const STATUS_TICKS: u8 = 6;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub current: Vec<String>,
    pub saved: Vec<Palette>,
    pub status: Option<String>,
    status_ticks_left: u8,
    pub selected_swatch_index: usize,
    pub selected_saved_index: usize,
    pub confirm_popup: Option<ConfirmPopup>,
}

#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub message: String,
    pub palette_id: PaletteId,
}

impl App {
    pub fn new(db: Connection) -> Self {
        let saved = match db::query_palettes(&db) {
            Ok(palettes) => palettes,
            Err(_) => Vec::new(),
        };
        Self {
            running: true,
            db,
            view: AppView::Generator,
            view_history: Vec::new(),
            current: palette::generate_palette(),
            saved,
            status: None,
            status_ticks_left: 0,
            selected_swatch_index: 0,
            selected_saved_index: 0,
            confirm_popup: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.tick_status(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => match self.view {
                AppView::Generator => self.handle_generator_key(key),
                AppView::Saved => self.handle_saved_key(key),
                AppView::Help => {}
            },
        }
    }

    fn handle_generator_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('g') | KeyCode::Char(' ') => self.generate(),
            KeyCode::Up => {
                if self.selected_swatch_index > 0 {
                    self.selected_swatch_index -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_swatch_index + 1 < self.current.len() {
                    self.selected_swatch_index += 1;
                }
            }
            KeyCode::Char('y') | KeyCode::Enter => self.pick_selected(),
            KeyCode::Char('s') => self.save_current(),
            KeyCode::Char('v') => {
                self.navigate_to(AppView::Saved);
                self.load_saved();
            }
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                if self.selected_saved_index > 0 {
                    self.selected_saved_index -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_saved_index + 1 < self.saved.len() {
                    self.selected_saved_index += 1;
                }
            }
            KeyCode::Enter => self.recall_selected(),
            KeyCode::Char('d') => self.confirm_delete_selected(),
            KeyCode::Char('r') => self.load_saved(),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(popup) = self.confirm_popup.take() {
                    match db::delete_palette(popup.palette_id, &self.db) {
                        Ok(()) => {
                            self.set_status(format!("Deleted palette {}.", popup.palette_id));
                            self.load_saved();
                        }
                        Err(err) => self.set_status(format!("Failed to delete palette: {err}")),
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.confirm_popup = None,
            _ => {}
        }
    }

    /// Replace the current palette with a freshly generated one.
    fn generate(&mut self) {
        self.current = palette::generate_palette();
        self.selected_swatch_index = 0;
    }

    /// Surface the selected swatch's hex value in the status line. The
    /// CLI `show` command prints a saved palette for piping into other
    /// tools.
    fn pick_selected(&mut self) {
        if let Some(hex) = self.current.get(self.selected_swatch_index) {
            let message = format!("Picked {hex}");
            self.set_status(message);
        }
    }

    fn save_current(&mut self) {
        match db::check_palette_exists(&self.current, &self.db) {
            Ok(true) => {
                self.set_status("Palette already saved.");
                return;
            }
            Ok(false) => {}
            Err(err) => {
                self.set_status(format!("Failed to check for duplicates: {err}"));
                return;
            }
        }
        match db::create_palette(&self.current, &self.db) {
            Ok(id) => {
                self.set_status(format!("Saved as palette {id}."));
                self.load_saved();
            }
            Err(err) => self.set_status(format!("Failed to save palette: {err}")),
        }
    }

    /// Load the selected saved palette back into the generator view.
    fn recall_selected(&mut self) {
        let Some(palette) = self.saved.get(self.selected_saved_index) else {
            return;
        };
        self.current = palette.colors.clone();
        self.selected_swatch_index = 0;
        let message = match palette.id {
            Some(id) => format!("Loaded palette {id}."),
            None => "Loaded palette.".to_string(),
        };
        self.navigate_to(AppView::Generator);
        self.set_status(message);
    }

    fn confirm_delete_selected(&mut self) {
        let Some(palette) = self.saved.get(self.selected_saved_index) else {
            return;
        };
        let Some(id) = palette.id else {
            return;
        };
        self.confirm_popup = Some(ConfirmPopup {
            message: format!("Delete palette {id}?"),
            palette_id: id,
        });
    }

    fn load_saved(&mut self) {
        match db::query_palettes(&self.db) {
            Ok(palettes) => {
                self.saved = palettes;
                if self.selected_saved_index >= self.saved.len() {
                    self.selected_saved_index = self.saved.len().saturating_sub(1);
                }
            }
            Err(err) => self.set_status(format!("Failed to load palettes: {err}")),
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
        }
    }

    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.view = view;
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_ticks_left = STATUS_TICKS;
    }

    fn tick_status(&mut self) {
        if self.status.is_none() {
            return;
        }
        if self.status_ticks_left == 0 {
            self.status = None;
        } else {
            self.status_ticks_left -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_SIZE;

    fn test_app() -> App {
        App::new(db::init_in_memory().unwrap())
    }

    fn press(app: &mut App, key: KeyCode) {
        app.update(AppEvent::KeyPress(key));
    }

    #[test]
    fn starts_with_a_full_palette_in_the_generator_view() {
        let app = test_app();
        assert_eq!(app.view, AppView::Generator);
        assert_eq!(app.current.len(), PALETTE_SIZE);
        assert!(app.saved.is_empty());
    }

    #[test]
    fn saving_the_same_palette_twice_is_rejected() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.saved.len(), 1);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.status.as_deref(), Some("Palette already saved."));
    }

    #[test]
    fn recall_restores_a_saved_palette() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        let saved_colors = app.saved[0].colors.clone();

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view, AppView::Saved);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, AppView::Generator);
        assert_eq!(app.current, saved_colors);
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('v'));

        press(&mut app, KeyCode::Char('d'));
        assert!(app.confirm_popup.is_some());

        // Declining keeps the palette.
        press(&mut app, KeyCode::Char('n'));
        assert!(app.confirm_popup.is_none());
        assert_eq!(app.saved.len(), 1);

        // Confirming removes it.
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.saved.is_empty());
    }

    #[test]
    fn picking_a_swatch_surfaces_its_hex_value() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('y'));
        let expected = format!("Picked {}", app.current[1]);
        assert_eq!(app.status.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn status_messages_expire_after_the_flash_window() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('y'));
        assert!(app.status.is_some());

        for _ in 0..=STATUS_TICKS {
            app.update(AppEvent::Tick);
        }
        assert!(app.status.is_none());
    }

    #[test]
    fn swatch_selection_stays_in_bounds() {
        let mut app = test_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_swatch_index, 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_swatch_index, PALETTE_SIZE - 1);
    }
}
