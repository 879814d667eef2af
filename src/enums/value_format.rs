use crate::utils_modules::format_utils::*;

#[doc = r#"
    Unit and precision rule of a value axis.

    `plotted` maps a raw benchmark value onto the axis unit and `label`
    produces the annotation text drawn next to the element.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /* raw nanoseconds, integer label: 850 -> "850ns" */
    Nanoseconds,
    /* raw ops/sec plotted in millions: 8.3e6 -> "8.3M" */
    MillionsPerSecond,
    /* already in millions of ops/sec: 22.5 -> "22.5M ops/s" */
    MillionOpsPerSecond,
    /* megabytes with two decimals: 0.00049 -> "0.00 MB" */
    Megabytes,
}

impl ValueFormat {
    pub fn plotted(&self, raw: f64) -> f64 {
        match self {
            ValueFormat::MillionsPerSecond => raw / 1e6,
            ValueFormat::Nanoseconds
            | ValueFormat::MillionOpsPerSecond
            | ValueFormat::Megabytes => raw,
        }
    }

    pub fn label(&self, raw: f64) -> String {
        match self {
            ValueFormat::Nanoseconds => format_nanos(raw),
            ValueFormat::MillionsPerSecond => format_millions(raw),
            ValueFormat::MillionOpsPerSecond => format_million_ops_per_sec(raw),
            ValueFormat::Megabytes => format_megabytes(raw),
        }
    }

    #[doc = "Formatter for value axis ticks; `None` keeps the plotters default"]
    pub fn tick_formatter(&self) -> Option<fn(f64) -> String> {
        match self {
            ValueFormat::Nanoseconds => Some(format_integer_tick),
            ValueFormat::MillionsPerSecond
            | ValueFormat::MillionOpsPerSecond
            | ValueFormat::Megabytes => None,
        }
    }
}
