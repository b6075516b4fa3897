//! Centralized theme constants for Activity Board
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Surfaces (slate)
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_PANEL: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_CARD: Color32 = Color32::from_rgb(0x17, 0x21, 0x33);
pub const BG_ROSTER: Color32 = Color32::from_rgb(0x12, 0x1b, 0x2d);
pub const BG_FIELD: Color32 = Color32::from_rgb(0x0b, 0x12, 0x22);
pub const MODAL_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);

// =============================================================================
// COLORS - Accent (indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x81, 0x8c, 0xf8); // indigo-400
pub const ACCENT_STRONG: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5); // indigo-600

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc); // slate-50
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1); // slate-300
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Lines
// =============================================================================
pub const LINE: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const LINE_STRONG: Color32 = Color32::from_rgb(0x47, 0x55, 0x69); // slate-600

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15); // yellow-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const DANGER_FILL: Color32 = Color32::from_rgb(0xb9, 0x1c, 0x1c); // red-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// SIZES
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const MODAL_WIDTH: f32 = 360.0;
pub const CARD_MAX_WIDTH: f32 = 720.0;
pub const NOTICE_MAX_WIDTH: f32 = 360.0;

// =============================================================================
// RADII
// =============================================================================
pub const RADIUS_SMALL: u8 = 3;
pub const RADIUS_CARD: u8 = 10;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

/// Widget look for one interaction state
fn widget_state(fill: Color32, border: Color32, text: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: egui::Stroke::new(1.0, border),
        fg_stroke: egui::Stroke::new(1.0, text),
        corner_radius: egui::CornerRadius::same(RADIUS_SMALL),
        expansion: 0.0,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_CARD;
    visuals.hyperlink_color = ACCENT;
    visuals.window_stroke = egui::Stroke::new(1.0, LINE);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_CARD);
    visuals.menu_corner_radius = egui::CornerRadius::same(RADIUS_SMALL);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    // Text cursor and selected dropdown entry
    visuals.selection.bg_fill = ACCENT_STRONG;
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.noninteractive = widget_state(BG_CARD, LINE, TEXT_SECONDARY);
    visuals.widgets.inactive = widget_state(BG_PANEL, LINE, TEXT_SECONDARY);
    visuals.widgets.hovered = widget_state(BG_PANEL, ACCENT, TEXT_PRIMARY);
    visuals.widgets.active = widget_state(ACCENT_STRONG, ACCENT, TEXT_PRIMARY);
    visuals.widgets.open = widget_state(BG_PANEL, LINE_STRONG, TEXT_PRIMARY);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.combo_height = 240.0;
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Activity card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, LINE))
        .corner_radius(egui::CornerRadius::same(RADIUS_CARD))
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// One participant line inside a card's roster
pub fn roster_row_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ROSTER)
        .corner_radius(egui::CornerRadius::same(RADIUS_SMALL))
        .inner_margin(egui::Margin::symmetric(8, 4))
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(1.0, LINE_STRONG))
        .corner_radius(egui::CornerRadius::same(RADIUS_CARD))
        .inner_margin(SPACING_XL)
}

/// Notification banner: panel fill with a status-colored edge
pub fn notice_frame(color: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(1.5, color))
        .corner_radius(egui::CornerRadius::same(RADIUS_SMALL))
        .inner_margin(egui::Margin::symmetric(14, 10))
        .shadow(egui::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(120),
        })
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Plain outlined button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(1.0, LINE_STRONG))
}

/// Filled indigo button for the sign-up action
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY).strong())
        .fill(ACCENT_STRONG)
}

/// Red button for removals
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(DANGER_FILL)
}

/// Availability color: red when full, yellow when nearly full
pub fn availability_color(spots_left: i64) -> Color32 {
    match spots_left {
        i64::MIN..=0 => STATUS_ERROR,
        1..=3 => STATUS_WARNING,
        _ => STATUS_SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_color_thresholds() {
        assert_eq!(availability_color(-2), STATUS_ERROR);
        assert_eq!(availability_color(0), STATUS_ERROR);
        assert_eq!(availability_color(3), STATUS_WARNING);
        assert_eq!(availability_color(4), STATUS_SUCCESS);
    }
}
