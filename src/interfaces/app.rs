use crate::application::prediction_service::PredictionService;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::FormViewModel;
use crate::interfaces::{form_view, result_view};
use crossbeam_channel::Receiver;
use eframe::egui;
use std::collections::VecDeque;

const MAX_LOG_LINES: usize = 200;

pub enum AppState {
    Ready {
        service: PredictionService,
        view: FormViewModel,
    },
    /// Startup failed; only the diagnostic is shown.
    Fatal { message: String },
}

pub struct PredictorApp {
    state: AppState,
    log_rx: Receiver<String>,
    logs: VecDeque<String>,
}

impl PredictorApp {
    pub fn ready(service: PredictionService, view: FormViewModel, log_rx: Receiver<String>) -> Self {
        Self {
            state: AppState::Ready { service, view },
            log_rx,
            logs: VecDeque::new(),
        }
    }

    pub fn fatal(message: String, log_rx: Receiver<String>) -> Self {
        Self {
            state: AppState::Fatal { message },
            log_rx,
            logs: VecDeque::new(),
        }
    }

    fn drain_logs(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            if self.logs.len() >= MAX_LOG_LINES {
                self.logs.pop_front();
            }
            self.logs.push_back(line);
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        self.drain_logs();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Store Sales Prediction App");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = match &self.state {
                        AppState::Ready { service, .. } => {
                            (format!("● {}", service.predictor_name()), DesignSystem::SUCCESS)
                        }
                        AppState::Fatal { .. } => ("● NO MODEL".to_string(), DesignSystem::DANGER),
                    };
                    ui.label(egui::RichText::new(text).color(color).small());
                });
            });
        });

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_MUTED
                            };
                            ui.label(egui::RichText::new(line.trim_end()).monospace().small().color(color));
                        }
                    });
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match &mut self.state {
                    AppState::Fatal { message } => {
                        DesignSystem::banner_frame(DesignSystem::DANGER).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(format!("Error loading model files: {}", message))
                                    .color(DesignSystem::DANGER),
                            );
                        });
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        ui.label(
                            egui::RichText::new(
                                "Please ensure all required model files are in the correct location.",
                            )
                            .color(DesignSystem::ACCENT_SECONDARY),
                        );
                    }
                    AppState::Ready { service, view } => {
                        if form_view::render_form(ui, view) {
                            view.submit(service);
                        }
                        if let Some(outcome) = &view.outcome {
                            result_view::render_outcome(ui, outcome);
                        }
                    }
                });
            });
    }
}
