use chrono::{DateTime, Utc};
use eframe::{App, CreationContext, Frame, egui};
use egui::{Align2, Color32, Key, RichText, ScrollArea, Ui};
use tracing_subscriber::EnvFilter;

mod form;
mod models;
mod render;
mod session;
mod store;
use form::ExerciseForm;
use render::{HistoryEntry, ListView};
use session::{SaveError, WorkoutSession};

const APP_NAME: &str = "Workout Tracker";
const WINDOW_SIZE: [f32; 2] = [900.0, 720.0];
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];
const BODY_TEXT_SIZE: f32 = 18.0;
const HEADING_TEXT_SIZE: f32 = 26.0;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| -> Result<Box<dyn App>, Box<dyn std::error::Error + Send + Sync>> {
            let app = WorkoutApp::new(cc).inspect_err(|err| {
                tracing::error!("failed to load workout history: {err}");
            })?;
            Ok(Box::new(app))
        }),
    )
}

struct WorkoutApp {
    session: WorkoutSession,
    form: ExerciseForm,
    staging_view: ListView<String>,
    history_view: ListView<HistoryEntry>,
    warning: Option<String>,
}

impl WorkoutApp {
    fn new(cc: &CreationContext) -> Result<Self, store::StoreError> {
        let session = WorkoutSession::load(cc.storage)?;

        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(BODY_TEXT_SIZE, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(BODY_TEXT_SIZE, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(HEADING_TEXT_SIZE, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        let mut app = WorkoutApp {
            session,
            form: ExerciseForm::default(),
            staging_view: ListView::Placeholder(render::NO_EXERCISES),
            history_view: ListView::Placeholder(render::NO_WORKOUTS),
            warning: None,
        };
        app.render_staging();
        app.render_history();
        Ok(app)
    }

    fn render_staging(&mut self) {
        self.staging_view = render::staging(self.session.staging());
    }

    fn render_history(&mut self) {
        self.history_view = render::history(self.session.history());
    }

    fn submit_exercise(&mut self) {
        if self.session.submit_exercise(&self.form).is_ok() {
            self.form.reset();
            self.render_staging();
        }
    }

    fn save_workout(&mut self, frame: &mut Frame) {
        self.commit_workout(frame.storage_mut(), Utc::now());
    }

    fn commit_workout<S: eframe::Storage + ?Sized>(
        &mut self,
        storage: Option<&mut S>,
        saved_at: DateTime<Utc>,
    ) {
        match self.session.save_workout(storage, saved_at) {
            Ok(_) => {}
            Err(SaveError::EmptyWorkout) => {
                self.warning = Some(SaveError::EmptyWorkout.to_string());
                return;
            }
            Err(SaveError::Store(err)) => {
                tracing::error!("failed to persist workout history: {err}");
            }
        }
        self.render_staging();
        self.render_history();
    }
}

impl App for WorkoutApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        let blocked = self.warning.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.columns(2, |columns| {
                    if self.show_current_workout(&mut columns[0]) {
                        self.save_workout(frame);
                    }
                    self.show_history(&mut columns[1]);
                });
            });
        });

        self.show_warning(ctx);
    }
}

impl WorkoutApp {
    /// Returns true when "Save workout" was clicked.
    fn show_current_workout(&mut self, ui: &mut Ui) -> bool {
        ui.heading("Current workout");
        ui.add_space(10.0);

        let mut submit = false;
        egui::Grid::new("exercise_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                submit |= form_row(ui, "Exercise", &mut self.form.exercise, "e.g. Squat");
                submit |= form_row(ui, "Sets", &mut self.form.sets, "3");
                submit |= form_row(ui, "Reps", &mut self.form.reps, "8");
                submit |= form_row(ui, "Weight (kg)", &mut self.form.weight, "optional");
                submit |= form_row(ui, "Notes", &mut self.form.notes, "optional");
            });

        ui.add_space(8.0);
        if ui.button("Add exercise").clicked() {
            submit = true;
        }
        if submit {
            self.submit_exercise();
        }

        ui.add_space(16.0);
        ui.separator();
        match &self.staging_view {
            ListView::Placeholder(text) => {
                ui.label(RichText::new(*text).italics().color(Color32::GRAY));
            }
            ListView::Items(lines) => {
                for line in lines {
                    ui.label(format!("• {line}"));
                }
            }
        }

        ui.add_space(16.0);
        ui.button(RichText::new("Save workout").strong()).clicked()
    }

    fn show_history(&self, ui: &mut Ui) {
        ui.heading("History");
        ui.add_space(10.0);

        match &self.history_view {
            ListView::Placeholder(text) => {
                ui.label(RichText::new(*text).italics().color(Color32::GRAY));
            }
            ListView::Items(entries) => {
                ScrollArea::vertical().id_salt("workout_history").show(ui, |ui| {
                    for (index, entry) in entries.iter().enumerate() {
                        egui::CollapsingHeader::new(&entry.header)
                            .id_salt((index, &entry.id))
                            .default_open(false)
                            .show(ui, |ui| {
                                for line in &entry.lines {
                                    ui.label(format!("• {line}"));
                                }
                            });
                    }
                });
            }
        }
    }

    fn show_warning(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.warning else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Warning")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(Key::Enter)) {
                    dismissed = true;
                }
            });

        if dismissed {
            self.warning = None;
        }
    }
}

/// One labelled text field; true when Enter was pressed in it.
fn form_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(value).hint_text(hint));
    ui.end_row();
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
