use crate::common::*;

use crate::model::chart::{legend_entry::*, series::*};

use crate::enums::{baseline::*, color_rule::*, orientation::*, value_format::*};

#[doc = r#"
    One annotated categorical bar chart: a series, how it is laid out and
    colored, and how its values are labelled.

    `label_offset` shifts value labels along the value axis (in axis units);
    `comparison` enables the relative-ratio badges against a baseline element.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct BarPanel {
    pub title: String,
    pub series: Series,
    pub orientation: Orientation,
    pub color_rule: ColorRule,
    pub value_format: ValueFormat,
    pub value_axis_desc: String,
    #[new(default)]
    pub label_offset: f64,
    #[new(default)]
    pub legend: Vec<LegendEntry>,
    #[new(default)]
    pub comparison: Option<Baseline>,
}

impl BarPanel {
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn with_legend(mut self, legend: Vec<LegendEntry>) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_comparison(mut self, baseline: Baseline) -> Self {
        self.comparison = Some(baseline);
        self
    }

    #[doc = "Bar lengths in axis units"]
    pub fn plotted_values(&self) -> Vec<f64> {
        self.series
            .values()
            .iter()
            .map(|raw| self.value_format.plotted(*raw))
            .collect()
    }
}
