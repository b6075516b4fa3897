//! Reusable UI components
//!
//! Standalone widgets used by the board views. None of them touch board state;
//! they paint what they are given and report clicks back.

use crate::board::{ActivityCard, Notice, NoticeKind};
use crate::theme;
use eframe::egui;

/// Colored banner for the current notification
pub fn notice_banner(ui: &mut egui::Ui, notice: &Notice) {
    let (color, icon) = match notice.kind {
        NoticeKind::Success => (theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE),
        NoticeKind::Error => (theme::STATUS_ERROR, egui_phosphor::regular::WARNING),
    };
    theme::notice_frame(color).show(ui, |ui| {
        ui.set_max_width(theme::NOTICE_MAX_WIDTH);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", icon, notice.text))
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );
    });
}

/// Small uppercase section heading
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.to_uppercase())
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// "Label: value" line used on activity cards
pub fn labeled_line(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        ui.label(
            egui::RichText::new(format!("{label}:"))
                .strong()
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_SECONDARY),
        );
        ui.label(egui::RichText::new(value).size(theme::FONT_LABEL).color(value_color));
    });
}

/// Availability line, colored by how full the activity is
pub fn availability_line(ui: &mut egui::Ui, card: &ActivityCard) {
    labeled_line(
        ui,
        "Availability",
        &card.availability_label(),
        theme::availability_color(card.spots_left),
    );
}

/// Roster row with a removal button. Returns true if the button was clicked.
pub fn participant_row(ui: &mut egui::Ui, email: &str, busy: bool) -> bool {
    let mut clicked = false;
    theme::roster_row_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{}  {}", egui_phosphor::regular::USER, email))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if busy {
                    ui.spinner();
                }
                let remove = ui
                    .add_enabled(
                        !busy,
                        theme::button_danger(format!("{}  Remove", egui_phosphor::regular::TRASH)).small(),
                    )
                    .on_hover_text(format!("Unregister {email}"));
                clicked = remove.clicked();
            });
        });
    });
    clicked
}
