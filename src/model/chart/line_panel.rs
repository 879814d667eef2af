use crate::common::*;

use crate::model::chart::{chart_color::*, scaling_curve::*};

use crate::enums::value_format::*;

#[doc = "Log-log line chart of a scaling curve, with area fill and per-point callouts"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LinePanel {
    pub title: String,
    pub curve: ScalingCurve,
    pub color: ChartColor,
    pub value_format: ValueFormat,
    pub x_axis_desc: String,
    pub y_axis_desc: String,
    pub legend_label: String,
}
