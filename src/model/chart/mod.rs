pub mod bar_panel;
pub mod chart_color;
pub mod chart_spec;
pub mod legend_entry;
pub mod line_panel;
pub mod scaling_curve;
pub mod series;
