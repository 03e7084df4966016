//! The "User Details" table.
//!
//! Clicking a row loads it into the form; the Delete button removes only its
//! own row and never also selects it.

use crate::state::AppState;
use crate::theme::{colors, spacing, table};
use egui::{Align, Label, Layout, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use ums_core::Action;
use ums_model::FormField;

pub struct RecordTableView;

impl RecordTableView {
    pub fn show(ui: &mut Ui, state: &AppState, actions: &mut Vec<Action>) {
        ui.heading("User Details");
        ui.add_space(spacing::SM);

        let store = state.dashboard.store();
        if store.is_empty() {
            ui.label(
                RichText::new(format!(
                    "{} No users yet. Fill in the form and press Save.",
                    egui_phosphor::regular::USERS
                ))
                .weak(),
            );
            return;
        }

        let selection = state.dashboard.selection();
        let mut clicked_row = None;
        let mut deleted_row = None;

        TableBuilder::new(ui)
            .striped(state.settings.display.striped_rows)
            .resizable(true)
            .sense(Sense::click())
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(
                Column::auto().at_least(table::MIN_COLUMN_WIDTH),
                FormField::all().len(),
            )
            .column(Column::remainder().at_least(table::MIN_COLUMN_WIDTH))
            .header(table::HEADER_HEIGHT, |mut header| {
                for field in FormField::all() {
                    header.col(|ui| {
                        ui.strong(field.label());
                    });
                }
                header.col(|ui| {
                    ui.strong("Action");
                });
            })
            .body(|mut body| {
                for (index, record) in store.iter().enumerate() {
                    body.row(table::ROW_HEIGHT, |mut row| {
                        row.set_selected(selection.is_selected(index));
                        for field in FormField::all() {
                            row.col(|ui| {
                                // Non-selectable so the click reaches the row.
                                ui.add(Label::new(record.display_value(*field)).selectable(false));
                            });
                        }
                        row.col(|ui| {
                            let delete = ui.button(
                                RichText::new(format!(
                                    "{} Delete",
                                    egui_phosphor::regular::TRASH
                                ))
                                .color(colors::DANGER),
                            );
                            if delete.clicked() {
                                deleted_row = Some(index);
                            }
                        });
                        if row.response().clicked() {
                            clicked_row = Some(index);
                        }
                    });
                }
            });

        if let Some(index) = deleted_row {
            actions.push(Action::DeleteRow(index));
        } else if let Some(index) = clicked_row {
            actions.push(Action::SelectRow(index));
        }
    }
}
