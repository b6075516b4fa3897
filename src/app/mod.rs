//! App module - contains the main application state and window plumbing

mod modals;
mod views;

use crate::api::HttpApi;
use crate::board::Board;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) board: Board<HttpApi>,
    pub(crate) server_label: String,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Keeps the board's background tasks running
    pub(crate) _runtime: tokio::runtime::Runtime,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: HttpApi,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let server_label = api.base_url().to_string();
        let mut board = Board::new(
            Arc::new(api),
            runtime.handle().clone(),
            cc.egui_ctx.clone(),
            settings.refresh_interval(),
        );
        info!(
            server = %server_label,
            refresh_secs = settings.refresh_interval_secs,
            "Board ready, loading activities"
        );
        board.refresh_activities();

        Self {
            board,
            server_label,
            settings,
            data_dir,
            _runtime: runtime,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
