pub mod baseline;
pub mod chart_kind;
pub mod color_rule;
pub mod orientation;
pub mod value_format;
