//! Modal dialogs (removal confirmation)

use super::App;
use crate::board::{ModalAction, PendingDelete};
use crate::theme;
use crate::ui::components;
use eframe::egui;

impl App {
    /// Confirm/cancel dialog for unregistering a participant.
    ///
    /// egui's built-in modal handles the backdrop and Escape; both close it
    /// without sending anything, same as Cancel.
    pub(crate) fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.board.modal().pending().cloned() else {
            return;
        };
        let focus_confirm = self.board.take_focus_request();
        if let Some(action) = confirm_dialog(ctx, &pending, focus_confirm) {
            self.board.resolve_modal(action);
        }
    }
}

/// Draws the dialog for one frame and reports how the user closed it, if they did
fn confirm_dialog(
    ctx: &egui::Context,
    pending: &PendingDelete,
    focus_confirm: bool,
) -> Option<ModalAction> {
    // Read before the modal runs: `should_close` consumes the Escape key event
    let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    let mut action = None;

    let modal_area = egui::Modal::default_area(egui::Id::new("confirm_modal"))
        .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
    let modal_response = egui::Modal::new(egui::Id::new("confirm_modal"))
        .area(modal_area)
        .backdrop_color(theme::MODAL_BACKDROP)
        .frame(theme::modal_frame())
        .show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(32.0)
                        .color(theme::STATUS_WARNING),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new("Unregister participant?")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
            });
            ui.add_space(theme::SPACING_LG);

            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                components::labeled_line(ui, "Activity", &pending.activity_name, theme::TEXT_PRIMARY);
                components::labeled_line(ui, "Email", &pending.email, theme::TEXT_PRIMARY);
            });

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm = ui.add(theme::button_danger(format!(
                        "{}  Unregister",
                        egui_phosphor::regular::TRASH
                    )));
                    if focus_confirm {
                        confirm.request_focus();
                    }
                    if confirm.clicked() {
                        action = Some(ModalAction::Confirm);
                    }
                    ui.add_space(theme::SPACING_MD);
                    if ui.add(theme::button("Cancel")).clicked() {
                        action = Some(ModalAction::Cancel);
                    }
                });
            });
        });

    if action.is_none() && modal_response.should_close() {
        action = Some(if escape_pressed {
            ModalAction::Escape
        } else {
            ModalAction::Backdrop
        });
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParticipantKey;

    fn pending() -> PendingDelete {
        PendingDelete::new(ParticipantKey::new("Chess Club", "michael@mergington.edu"))
    }

    fn escape_key() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs one frame of the dialog with the given input events
    fn frame(ctx: &egui::Context, events: Vec<egui::Event>) -> Option<ModalAction> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1100.0, 760.0))),
            events,
            ..Default::default()
        };
        let mut action = None;
        let _ = ctx.run(input, |ctx| {
            action = confirm_dialog(ctx, &pending(), false);
        });
        action
    }

    #[test]
    fn test_escape_is_reported_as_escape() {
        let ctx = egui::Context::default();
        assert_eq!(frame(&ctx, vec![]), None);
        assert_eq!(frame(&ctx, vec![escape_key()]), Some(ModalAction::Escape));
    }

    #[test]
    fn test_idle_frames_leave_dialog_open() {
        let ctx = egui::Context::default();
        for _ in 0..3 {
            assert_eq!(frame(&ctx, vec![]), None);
        }
    }
}
