use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Titled container used for each form section
pub struct Card {
    title: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self { title: None }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(16.0)
                        .color(DesignSystem::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
