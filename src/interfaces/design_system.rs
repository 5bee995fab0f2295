use eframe::egui;
use egui::style::WidgetVisuals;
use egui::{Color32, Stroke};

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Slate-and-teal palette of the predictor window.
pub struct DesignSystem;

impl DesignSystem {
    // Surfaces, darkest first
    const SURFACE_BASE: Color32 = hex(0x12171C);
    const SURFACE_FIELD: Color32 = hex(0x1A2129);
    const SURFACE_CARD: Color32 = hex(0x202932);
    const SURFACE_RAISED: Color32 = hex(0x2A3540);
    const OUTLINE: Color32 = hex(0x3A4754);

    pub const ACCENT_PRIMARY: Color32 = hex(0x26A69A);
    pub const ACCENT_SECONDARY: Color32 = hex(0x80CBC4);

    /// Prediction banner
    pub const SUCCESS: Color32 = hex(0x9CCC65);
    /// Failure banner and fatal diagnostic
    pub const DANGER: Color32 = hex(0xEF5350);
    /// Negative days to ship, log warnings
    pub const WARNING: Color32 = hex(0xFFB74D);

    pub const TEXT_PRIMARY: Color32 = hex(0xE6EDF3);
    pub const TEXT_SECONDARY: Color32 = hex(0xA7B4C0);
    pub const TEXT_MUTED: Color32 = hex(0x6C7A88);

    const CORNER: u8 = 6;

    pub const SPACING_SMALL: f32 = 6.0;
    pub const SPACING_MEDIUM: f32 = 14.0;
    pub const SPACING_LARGE: f32 = 20.0;

    fn paint(widget: &mut WidgetVisuals, fill: Color32, text: Color32) {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.fg_stroke = Stroke::new(1.0, text);
        widget.corner_radius = Self::CORNER.into();
    }

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Self::SURFACE_BASE;
        visuals.panel_fill = Self::SURFACE_BASE;
        // Text edits and combo boxes
        visuals.extreme_bg_color = Self::SURFACE_FIELD;

        let widgets = &mut visuals.widgets;
        Self::paint(&mut widgets.noninteractive, Self::SURFACE_CARD, Self::TEXT_PRIMARY);
        widgets.noninteractive.bg_stroke = Stroke::new(1.0, Self::OUTLINE);
        Self::paint(&mut widgets.inactive, Self::SURFACE_CARD, Self::TEXT_SECONDARY);
        Self::paint(&mut widgets.hovered, Self::SURFACE_RAISED, Self::TEXT_PRIMARY);
        Self::paint(&mut widgets.active, Self::ACCENT_PRIMARY, Self::SURFACE_BASE);
        Self::paint(&mut widgets.open, Self::SURFACE_RAISED, Self::TEXT_PRIMARY);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, Self::ACCENT_SECONDARY);
        visuals
    }

    /// Form section (Basic Information, Order Timing, Historical Metrics)
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::SURFACE_CARD)
            .corner_radius(Self::CORNER)
            .stroke(Stroke::new(1.0, Self::OUTLINE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Tinted box behind the prediction or error message
    pub fn banner_frame(color: Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.gamma_multiply(0.15))
            .corner_radius(Self::CORNER)
            .stroke(Stroke::new(1.5, color))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::SURFACE_BASE)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
