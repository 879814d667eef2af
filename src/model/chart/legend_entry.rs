use crate::common::*;

use crate::model::chart::chart_color::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct LegendEntry {
    pub label: String,
    pub color: ChartColor,
}
