use crate::application::report::{FailureReport, PredictionReport, SubmissionOutcome};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_outcome(ui: &mut egui::Ui, outcome: &SubmissionOutcome) {
    ui.add_space(DesignSystem::SPACING_LARGE);
    match outcome {
        SubmissionOutcome::Success(report) => render_success(ui, report),
        SubmissionOutcome::Failure(report) => render_failure(ui, report),
    }
}

fn render_success(ui: &mut egui::Ui, report: &PredictionReport) {
    DesignSystem::banner_frame(DesignSystem::SUCCESS).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(report.headline())
                .size(20.0)
                .strong()
                .color(DesignSystem::SUCCESS),
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.heading("Input Summary");

    for (title, entries) in report.sections() {
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(egui::RichText::new(format!("{}:", title)).strong());
        egui::Grid::new(title)
            .num_columns(2)
            .spacing([40.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in entries {
                    ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
                    ui.label(value);
                    ui.end_row();
                }
            });
    }

    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(egui::RichText::new("Debug Information:").strong());
    ui.label(
        egui::RichText::new(format!("Features used: {}", report.features.join(", ")))
            .small()
            .color(DesignSystem::TEXT_MUTED),
    );
}

fn render_failure(ui: &mut egui::Ui, report: &FailureReport) {
    DesignSystem::banner_frame(DesignSystem::DANGER).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&report.message).color(DesignSystem::DANGER));
    });

    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(egui::RichText::new("Debug information:").strong());
    ui.label(
        egui::RichText::new(format!("Input data columns: [{}]", report.columns.join(", ")))
            .small()
            .color(DesignSystem::TEXT_MUTED),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(egui::RichText::new(&report.hint).color(DesignSystem::ACCENT_SECONDARY));
}
