//! Main screen: the form above the table.

use crate::state::AppState;
use crate::theme::spacing;
use crate::views::{FormView, RecordTableView};
use egui::Ui;
use ums_core::Action;

pub struct DashboardView;

impl DashboardView {
    pub fn show(ui: &mut Ui, state: &AppState, actions: &mut Vec<Action>) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MD);
                FormView::show(ui, state, actions);

                ui.add_space(spacing::LG);
                ui.separator();
                ui.add_space(spacing::MD);

                RecordTableView::show(ui, state, actions);
                ui.add_space(spacing::XL);
            });
    }
}
