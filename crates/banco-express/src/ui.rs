//! UI helper components

use eframe::egui;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 150, 190);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Create a styled text edit for account number input
pub fn account_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(220.0)
            .font(egui::TextStyle::Monospace),
    )
}

/// Create a styled text edit for the amount field
pub fn amount_input(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("$0.00")
            .desired_width(150.0)
            .font(egui::TextStyle::Monospace),
    )
}

/// Create a styled text edit for free-form text
pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(320.0),
    )
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 80, 80)));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

/// Primary action button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(ACCENT);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn =
        egui::Button::new(egui::RichText::new(text).size(14.0)).min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}
