use eframe::egui;

use crate::figure::Figure;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Shows one prebuilt [`Figure`] until the window is closed.
pub struct NetPlotApp {
    pub figure: Figure,
}

impl NetPlotApp {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for NetPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui, &self.figure);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.figure);
        });
    }
}
