//! Main application struct and eframe::App implementation

use crate::state::AppState;
use crate::theme::apply_visuals;
use crate::views::{DashboardView, HeaderView};
use eframe::egui;
use ums_core::Action;

/// Main application struct
pub struct UmsApp {
    state: AppState,
    /// Theme currently installed in the egui context.
    applied_dark: Option<bool>,
}

impl UmsApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        tracing::info!(
            dark_mode = state.dark_mode(),
            policy = %state.selection_policy(),
            "starting dashboard"
        );

        Self {
            state,
            applied_dark: None,
        }
    }
}

impl eframe::App for UmsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark_mode = self.state.dark_mode();
        if self.applied_dark != Some(dark_mode) {
            apply_visuals(ctx, dark_mode);
            self.applied_dark = Some(dark_mode);
        }

        let mut actions = shortcut_actions(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            HeaderView::show(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            DashboardView::show(ui, &self.state, &mut actions);
        });

        if actions.is_empty() {
            return;
        }
        for action in actions {
            self.state.dispatch(action);
        }
        ctx.request_repaint();
    }
}

/// Handle global keyboard shortcuts
fn shortcut_actions(ctx: &egui::Context) -> Vec<Action> {
    let mut actions = Vec::new();
    ctx.input_mut(|i| {
        // Cmd on macOS, Ctrl elsewhere
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
            actions.push(Action::Submit);
        }
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::U) {
            actions.push(Action::CommitUpdate);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
            actions.push(Action::Clear);
        }
    });
    actions
}
