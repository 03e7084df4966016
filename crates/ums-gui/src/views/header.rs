//! Greeting bar with theme toggle and preferences menu.

use crate::state::AppState;
use crate::theme::spacing;
use egui::{Align, Layout, RichText, Ui};
use ums_model::SelectionPolicy;

pub struct HeaderView;

impl HeaderView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let dark_mode = state.dark_mode();
        let mut policy = state.selection_policy();
        let mut striped = state.settings.display.striped_rows;

        ui.add_space(spacing::SM);
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new(format!(
                    "{} {}",
                    egui_phosphor::regular::USER_CIRCLE,
                    state.dashboard.greeting()
                ))
                .size(24.0),
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (icon, hint) = if dark_mode {
                    (egui_phosphor::regular::SUN, "Switch to light theme")
                } else {
                    (egui_phosphor::regular::MOON, "Switch to dark theme")
                };
                if ui.button(icon).on_hover_text(hint).clicked() {
                    state.set_dark_mode(!dark_mode);
                }

                ui.menu_button(
                    format!("{} Preferences", egui_phosphor::regular::GEAR),
                    |ui| {
                        ui.label(RichText::new("When another row is deleted").strong());
                        for option in SelectionPolicy::all() {
                            ui.radio_value(&mut policy, *option, option.display_name())
                                .on_hover_text(option.description());
                        }
                        ui.separator();
                        ui.checkbox(&mut striped, "Striped table rows");
                    },
                );
            });
        });
        ui.add_space(spacing::SM);

        state.set_selection_policy(policy);
        state.set_striped_rows(striped);
    }
}
