use eframe::egui::{RichText, Ui};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the figure title above the plot.
pub fn title_bar(ui: &mut Ui, figure: &Figure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&figure.title).heading().strong());
    });
}
