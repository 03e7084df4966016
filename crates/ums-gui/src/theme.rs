//! Theme and styling constants

use egui::Color32;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Table geometry
pub mod table {
    pub const HEADER_HEIGHT: f32 = 24.0;
    pub const ROW_HEIGHT: f32 = 28.0;
    pub const MIN_COLUMN_WIDTH: f32 = 96.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
}

/// Switch between the light and dark egui visuals.
pub fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

/// Color for an informational status line.
pub fn status_color(ui: &egui::Ui, kind: crate::state::StatusKind) -> Color32 {
    use crate::state::StatusKind;
    match kind {
        StatusKind::Info => colors::SUCCESS,
        StatusKind::Warning => ui.visuals().warn_fg_color,
        StatusKind::Error => ui.visuals().error_fg_color,
    }
}
