//! The user form: five inputs and the Save / Update / Clear buttons.

use crate::state::AppState;
use crate::theme::{spacing, status_color};
use egui::{RichText, TextEdit, Ui};
use ums_core::Action;
use ums_model::{FieldValue, FormField, Gender, Selection};

const INPUT_WIDTH: f32 = 280.0;

pub struct FormView;

impl FormView {
    pub fn show(ui: &mut Ui, state: &AppState, actions: &mut Vec<Action>) {
        let buffer = state.dashboard.buffer();
        let error_color = ui.visuals().error_fg_color;

        ui.heading("User Management System");
        ui.add_space(spacing::SM);

        egui::Grid::new("user_form")
            .num_columns(2)
            .spacing([spacing::MD, spacing::SM])
            .show(ui, |ui| {
                for field in FormField::all() {
                    let label = RichText::new(format!("{}:", field.label()));
                    if state.missing_fields.contains(field) {
                        ui.label(label.color(error_color));
                    } else {
                        ui.label(label);
                    }

                    match field {
                        FormField::Gender => gender_select(ui, buffer.gender, actions),
                        _ => text_input(ui, *field, buffer.get(*field), actions),
                    }
                    ui.end_row();
                }
            });

        ui.add_space(spacing::MD);
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Save", egui_phosphor::regular::FLOPPY_DISK))
                .on_hover_text("Add the form as a new user (Ctrl+S)")
                .clicked()
            {
                actions.push(Action::Submit);
            }
            if ui
                .button(format!("{} Update", egui_phosphor::regular::PENCIL_SIMPLE))
                .on_hover_text("Replace the selected row with the form (Ctrl+U)")
                .clicked()
            {
                actions.push(Action::CommitUpdate);
            }
            if ui
                .button(format!("{} Clear", egui_phosphor::regular::ERASER))
                .on_hover_text("Empty the form and stop editing (Esc)")
                .clicked()
            {
                actions.push(Action::Clear);
            }

            if let Selection::Editing(index) = state.dashboard.selection() {
                ui.add_space(spacing::SM);
                ui.label(
                    RichText::new(format!("Editing row {}", index + 1))
                        .color(ui.visuals().warn_fg_color),
                );
            }
        });

        if let Some(status) = &state.status {
            ui.add_space(spacing::XS);
            ui.label(RichText::new(&status.text).color(status_color(ui, status.kind)));
        }
    }
}

fn text_input(ui: &mut Ui, field: FormField, value: &str, actions: &mut Vec<Action>) {
    let hint = match field {
        FormField::Email => "name@example.com",
        FormField::PhoneNumber => "555-0100",
        _ => "",
    };
    let mut text = value.to_string();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(field.id())
            .hint_text(hint)
            .desired_width(INPUT_WIDTH),
    );
    if response.changed() {
        actions.push(Action::SetField(field, FieldValue::Text(text)));
    }
}

fn gender_select(ui: &mut Ui, current: Option<Gender>, actions: &mut Vec<Action>) {
    let mut choice = current;
    egui::ComboBox::from_id_salt(FormField::Gender.id())
        .width(INPUT_WIDTH)
        .selected_text(choice.map_or("Select", |gender| gender.label()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, None, "Select");
            for gender in Gender::all() {
                ui.selectable_value(&mut choice, Some(*gender), gender.label());
            }
        });
    if choice != current {
        actions.push(Action::SetField(
            FormField::Gender,
            FieldValue::Gender(choice),
        ));
    }
}
