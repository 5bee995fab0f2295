//! The three form sections and the submit button.

use crate::domain::sales::CategoricalField;
use crate::domain::sales::catalog::{DISCOUNT_RANGE, DISCOUNT_STEP, PROFIT_RANGE, QUANTITY_RANGE};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::FormViewModel;
use eframe::egui;

/// Renders the form; returns true when "Predict Sales" was clicked.
pub fn render_form(ui: &mut egui::Ui, vm: &mut FormViewModel) -> bool {
    render_basic_information(ui, vm);
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    render_order_timing(ui, vm);
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    render_historical_metrics(ui, vm);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let button = egui::Button::new(
        egui::RichText::new("Predict Sales")
            .size(16.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    )
    .fill(DesignSystem::ACCENT_PRIMARY)
    .min_size(egui::vec2(160.0, 36.0));

    ui.add(button).clicked()
}

fn choice_combo(ui: &mut egui::Ui, field: CategoricalField, value: &mut String) {
    ui.label(field.column_name());
    egui::ComboBox::from_id_salt(field.column_name())
        .selected_text(value.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for choice in field.choices() {
                ui.selectable_value(value, choice.to_string(), *choice);
            }
        });
    ui.add_space(4.0);
}

fn metric_field(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(10.0).max_decimals(2));
    ui.add_space(4.0);
}

fn render_basic_information(ui: &mut egui::Ui, vm: &mut FormViewModel) {
    Card::new().title("Basic Information").show(ui, |ui| {
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            for field in [
                CategoricalField::ShipMode,
                CategoricalField::Segment,
                CategoricalField::City,
                CategoricalField::State,
                CategoricalField::Region,
            ] {
                choice_combo(left, field, vm.form.categorical_mut(field));
            }

            let right = &mut columns[1];
            for field in [CategoricalField::Category, CategoricalField::SubCategory] {
                choice_combo(right, field, vm.form.categorical_mut(field));
            }

            right.label("Quantity");
            right.add(egui::DragValue::new(&mut vm.form.quantity).range(QUANTITY_RANGE));
            right.add_space(4.0);

            right.label("Discount");
            right.add(egui::Slider::new(&mut vm.form.discount, DISCOUNT_RANGE).step_by(DISCOUNT_STEP));
            right.add_space(4.0);

            right.label("Profit");
            right.add(
                egui::DragValue::new(&mut vm.form.profit)
                    .range(PROFIT_RANGE)
                    .speed(1.0)
                    .max_decimals(2),
            );
        });
    });
}

fn render_order_timing(ui: &mut egui::Ui, vm: &mut FormViewModel) {
    Card::new().title("Order Timing").show(ui, |ui| {
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            left.label("Order Date");
            left.text_edit_singleline(&mut vm.order_date_text);
            left.add_space(4.0);
            left.label("Ship Date");
            left.text_edit_singleline(&mut vm.ship_date_text);
            left.label(
                egui::RichText::new("YYYY-MM-DD")
                    .small()
                    .color(DesignSystem::TEXT_MUTED),
            );

            let right = &mut columns[1];
            right.label(egui::RichText::new("Calculated Order Information:").strong());
            match vm.preview() {
                Some(cal) => {
                    right.label(format!("Day of Week: {}", cal.weekday_name()));
                    right.label(format!("Month: {}", cal.month));
                    right.label(format!("Year: {}", cal.year));
                    right.label(format!("Quarter: {}", cal.quarter));
                    right.label(format!("Is Weekend: {}", cal.weekend_label()));
                    right.label(format!("Days to Ship: {}", cal.days_to_ship));
                }
                None => {
                    right.label(
                        egui::RichText::new("Enter both dates as YYYY-MM-DD")
                            .color(DesignSystem::WARNING),
                    );
                }
            }
        });
    });
}

fn render_historical_metrics(ui: &mut egui::Ui, vm: &mut FormViewModel) {
    let h = &mut vm.form.history;
    Card::new().title("Historical Metrics").show(ui, |ui| {
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            metric_field(left, "Total Quantity Ordered", &mut h.total_quantity_ordered);
            metric_field(left, "Total Sales by Product", &mut h.total_sales_by_product);
            metric_field(left, "Average Profit by Product", &mut h.avg_profit_by_product);
            left.label("Total Orders by Customer");
            left.add(egui::DragValue::new(&mut h.total_orders_by_customer));

            let right = &mut columns[1];
            metric_field(right, "Avg Order Value (Customer)", &mut h.avg_order_value_customer);
            metric_field(right, "Total Sales by Customer", &mut h.total_sales_by_customer);
            metric_field(right, "Region Total Sales", &mut h.region_total_sales);
            metric_field(right, "Region Average Sales", &mut h.region_avg_sales);
        });
    });
}
