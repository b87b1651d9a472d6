//! Prompt list, answers and bulk entry

use crate::app::Sliverhand;
use crate::app::app::section_heading;
use crate::session::Command;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Sliverhand {
    pub(super) fn display_workspace_prompts(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            section_heading(ui, "Current Prompts");
            if ui
                .small_button(icons::ARROW_CLOCKWISE)
                .on_hover_text("Reload prompts")
                .clicked()
            {
                self.queue(Command::ReloadQuestions);
            }
        });

        let load_failed = self
            .session
            .selected()
            .is_some_and(|p| self.session.questions_failed_for == Some(p.id));
        if load_failed {
            ui.label(
                RichText::new("Stored prompts could not be loaded. Reload them to continue.")
                    .color(theme::ERROR),
            );
        } else if self.session.questions.is_empty() {
            ui.label("No existing prompts found. Please add a prompt.");
        } else {
            if self.session.selected_files.is_empty() {
                ui.label(
                    RichText::new(
                        "No source files selected. Answers will not reference any uploaded files.",
                    )
                    .color(theme::TEXT_MUTED),
                );
            }

            let mut commands = Vec::new();
            for (i, question) in self.session.questions.iter_mut().enumerate() {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(format!("Prompt {}", i + 1)).strong());
                    ui.add(
                        egui::TextEdit::multiline(&mut question.text)
                            .desired_rows(2)
                            .desired_width(f32::INFINITY),
                    );
                    if let Some(answer) = &question.answer {
                        ui.add_space(4.0);
                        ui.label(RichText::new("Answer").small().color(theme::TEXT_MUTED));
                        ui.label(answer.as_str());
                    }
                    ui.horizontal(|ui| {
                        if ui.button(format!("{} Generate answer", icons::LIGHTBULB)).clicked() {
                            commands.push(Command::AnswerQuestion(i));
                        }
                        if ui.button(format!("{} Remove", icons::TRASH)).clicked() {
                            commands.push(Command::RemoveQuestion(i));
                        }
                    });
                });
                ui.add_space(6.0);
            }
            self.pending.extend(commands);
        }

        section_heading(ui, "Add New Prompts");
        ui.add(
            egui::TextEdit::multiline(&mut self.session.prompt_input)
                .hint_text("One prompt per line")
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
        if ui.button("Submit").clicked() {
            self.queue(Command::AddQuestions);
        }

        if !self.session.questions.is_empty() {
            section_heading(ui, "Save to Database");
            if ui.button(format!("{} Save prompts", icons::FLOPPY_DISK)).clicked() {
                self.queue(Command::SaveQuestions);
            }
        }
    }
}
