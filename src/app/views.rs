//! View rendering (header, sign-up panel, activity list, notice)

use super::App;
use crate::board::{ActivityCard, ActivityList};
use crate::constants::*;
use crate::theme;
use crate::types::ParticipantKey;
use crate::ui::components;
use eframe::egui;
use std::time::Instant;

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::CALENDAR_CHECK, APP_NAME))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(&self.server_label)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let refresh = ui
                            .add(theme::button(format!(
                                "{}  Refresh",
                                egui_phosphor::regular::ARROWS_CLOCKWISE
                            )))
                            .on_hover_text("Reload activities from the server");
                        if refresh.clicked() {
                            self.board.refresh_activities();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_signup_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("signup_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Sign Up for an Activity")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_LG);

                components::section_heading(ui, "Email");
                let email = ui.add(
                    egui::TextEdit::singleline(&mut self.board.form.email)
                        .hint_text("your-email@mergington.edu")
                        .desired_width(f32::INFINITY),
                );
                let submit_on_enter =
                    email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(theme::SPACING_MD);
                components::section_heading(ui, "Activity");
                let options = self.board.options().to_vec();
                let selected_text = options
                    .iter()
                    .find(|o| o.value == self.board.form.activity)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| SELECT_PLACEHOLDER.to_string());
                egui::ComboBox::from_id_salt("activity_select")
                    .width(ui.available_width())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for option in &options {
                            ui.selectable_value(
                                &mut self.board.form.activity,
                                option.value.clone(),
                                option.label.as_str(),
                            );
                        }
                    });

                ui.add_space(theme::SPACING_LG);
                let submit = ui.add(theme::button_accent(format!(
                    "{}  Sign Up",
                    egui_phosphor::regular::USER_PLUS
                )));
                if submit.clicked() || submit_on_enter {
                    self.board.submit_signup();
                }
            });
    }

    pub(crate) fn render_activity_list(&mut self, ctx: &egui::Context) {
        let mut remove_clicked: Option<ParticipantKey> = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Available Activities")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_MD);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.board.list() {
                        ActivityList::Loading => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(egui::RichText::new("Loading activities...").color(theme::TEXT_MUTED));
                            });
                        }
                        ActivityList::Failed => {
                            ui.label(egui::RichText::new(LOAD_FAILED).color(theme::STATUS_ERROR));
                        }
                        ActivityList::Loaded(cards) if cards.is_empty() => {
                            ui.label(egui::RichText::new("No activities available.").color(theme::TEXT_MUTED));
                        }
                        ActivityList::Loaded(cards) => {
                            for card in cards {
                                if let Some(key) = self.render_card(ui, card) {
                                    remove_clicked = Some(key);
                                }
                                ui.add_space(theme::SPACING_MD);
                            }
                        }
                    });
            });

        if let Some(key) = remove_clicked {
            self.board.request_delete(key);
        }
    }

    /// Returns the participant whose removal control was clicked
    fn render_card(&self, ui: &mut egui::Ui, card: &ActivityCard) -> Option<ParticipantKey> {
        let mut clicked = None;
        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(theme::CARD_MAX_WIDTH);
            ui.set_min_width(ui.available_width().min(theme::CARD_MAX_WIDTH));

            ui.label(egui::RichText::new(&card.name).size(theme::FONT_HEADING).strong());
            ui.add_space(theme::SPACING_SM);
            ui.label(egui::RichText::new(&card.description).size(theme::FONT_BODY).color(theme::TEXT_SECONDARY));
            components::labeled_line(ui, "Schedule", &card.schedule, theme::TEXT_MUTED);
            components::availability_line(ui, card);

            ui.add_space(theme::SPACING_MD);
            ui.separator();
            components::section_heading(ui, "Current Participants");

            if card.participants.is_empty() {
                ui.label(
                    egui::RichText::new(NO_PARTICIPANTS)
                        .italics()
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                );
            }
            for row in &card.participants {
                let busy = self.board.is_control_disabled(&row.key);
                if components::participant_row(ui, &row.email, busy) {
                    clicked = Some(row.key.clone());
                }
            }
        });
        clicked
    }

    /// Notification toast, bottom-right of the window
    pub(crate) fn render_notice(&self, ctx: &egui::Context) {
        let Some(notice) = self.board.notice(Instant::now()) else {
            return;
        };
        egui::Area::new(egui::Id::new("notice_toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-theme::SPACING_XL, -theme::SPACING_XL))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| components::notice_banner(ui, notice));
    }
}
