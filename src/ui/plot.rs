use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Comparison plot (central panel)
// ---------------------------------------------------------------------------

/// Render every series of `figure` on one set of axes.
pub fn figure_plot(ui: &mut Ui, figure: &Figure) {
    let mut plot = Plot::new("comparison_plot")
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .show_grid(figure.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if figure.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &figure.series {
            // Points are connected in row order, never sorted by x.
            let points: PlotPoints = series.points.iter().copied().collect();

            let line = Line::new(points)
                .name(&series.name)
                .color(series.color)
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
