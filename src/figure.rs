use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::model::ComparisonDataset;

pub const TITLE: &str = "Compare neural net to target";
pub const NET_LABEL: &str = "neural network";
pub const TARGET_LABEL: &str = "target";

// ---------------------------------------------------------------------------
// Series – one named line
// ---------------------------------------------------------------------------

/// An ordered sequence of `[x, y]` points drawn as one connected line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

// ---------------------------------------------------------------------------
// Figure – everything the plot panel draws
// ---------------------------------------------------------------------------

/// A self-contained figure. The app owns one and the plot panel renders it;
/// nothing is kept in global plotting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Figure {
    /// Build the network-vs-target comparison figure for `dataset`.
    pub fn comparison(dataset: &ComparisonDataset) -> Self {
        let colors = generate_palette(2);
        let series = vec![
            Series {
                name: NET_LABEL.to_string(),
                points: dataset.net_points(),
                color: colors[0],
            },
            Series {
                name: TARGET_LABEL.to_string(),
                points: dataset.target_points(),
                color: colors[1],
            },
        ];

        let figure = Figure {
            title: TITLE.to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            series,
            show_legend: true,
            show_grid: true,
        };
        log::debug!(
            "Built figure '{}' with {} series of {} points",
            figure.title,
            figure.series.len(),
            dataset.len()
        );
        figure
    }

    /// Names listed in the legend, in drawing order.
    pub fn legend_entries(&self) -> Vec<&str> {
        if !self.show_legend {
            return Vec::new();
        }
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn sample_dataset() -> ComparisonDataset {
        ComparisonDataset::from_samples(vec![
            Sample {
                x: 0.0,
                net: 0.1,
                target: 0.0,
            },
            Sample {
                x: 1.0,
                net: 0.9,
                target: 1.0,
            },
            Sample {
                x: 2.0,
                net: 2.1,
                target: 2.0,
            },
        ])
    }

    #[test]
    fn two_series_pass_through_the_data() {
        let fig = Figure::comparison(&sample_dataset());

        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].name, "neural network");
        assert_eq!(fig.series[0].points, vec![[0.0, 0.1], [1.0, 0.9], [2.0, 2.1]]);
        assert_eq!(fig.series[1].name, "target");
        assert_eq!(fig.series[1].points, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn annotations_are_fixed() {
        let fig = Figure::comparison(&sample_dataset());

        assert_eq!(fig.title, "Compare neural net to target");
        assert_eq!(fig.x_label, "x");
        assert_eq!(fig.y_label, "y");
        assert!(fig.show_grid);
        assert_eq!(fig.legend_entries(), vec!["neural network", "target"]);
    }

    #[test]
    fn series_colours_differ() {
        let fig = Figure::comparison(&sample_dataset());
        assert_ne!(fig.series[0].color, fig.series[1].color);
    }

    #[test]
    fn building_twice_gives_the_same_figure() {
        let ds = sample_dataset();
        assert_eq!(Figure::comparison(&ds), Figure::comparison(&ds));
    }

    #[test]
    fn empty_dataset_gives_empty_series() {
        let fig = Figure::comparison(&ComparisonDataset::default());

        assert_eq!(fig.series.len(), 2);
        assert!(fig.series.iter().all(|s| s.points.is_empty()));
        assert_eq!(fig.legend_entries().len(), 2);
    }

    #[test]
    fn hidden_legend_has_no_entries() {
        let mut fig = Figure::comparison(&sample_dataset());
        fig.show_legend = false;
        assert!(fig.legend_entries().is_empty());
    }
}
