//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.cycle_section().await;
                }
                KeyCode::Down | KeyCode::Enter => {
                    model.set_active_section(ActiveSection::Results).await;
                }
                KeyCode::Esc => {
                    model.clear_search().await;
                    self.spawn_input_cleared();
                }
                KeyCode::Backspace => {
                    let text = model.backspace_search().await;
                    self.on_input(text).await;
                }
                KeyCode::Char(c) => {
                    // Ctrl+Q still quits while typing
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    let text = model.append_to_search(c).await;
                    self.on_input(text).await;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.cycle_section().await;
            }
            KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                if model.move_selection_down(1, self.scroll_threshold).await {
                    self.spawn_scroll_near_bottom();
                }
            }
            KeyCode::PageDown => {
                if model.page_down(self.scroll_threshold).await {
                    self.spawn_scroll_near_bottom();
                }
            }
            KeyCode::Enter => {
                if let Some(item) = model.get_selected_item().await {
                    let controller = self.clone();
                    tokio::spawn(async move {
                        controller.on_item_selected(item.id).await;
                    });
                }
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.open_trailer().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }

    fn spawn_scroll_near_bottom(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.on_scroll_near_bottom().await;
        });
    }

    fn spawn_input_cleared(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.on_input_cleared().await;
        });
    }
}
