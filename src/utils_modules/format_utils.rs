use crate::common::*;

/* kilobytes -> megabytes, bytes -> kilobytes */
pub const BINARY_UNIT_RATIO: f64 = 1024.0;

#[doc = "Nanosecond latency label without fractional digits. e.g. 850 -> `850ns`"]
pub fn format_nanos(nanos: f64) -> String {
    format!("{:.0}ns", nanos)
}

#[doc = "Value axis tick without fractional digits. e.g. 850.0 -> `850`"]
pub fn format_integer_tick(value: f64) -> String {
    format!("{:.0}", value)
}

#[doc = "Raw ops/sec shortened to millions with one decimal. e.g. 8.3e6 -> `8.3M`"]
pub fn format_millions(ops_per_sec: f64) -> String {
    format!("{:.1}M", ops_per_sec / 1e6)
}

#[doc = "Throughput already expressed in millions of ops/sec. e.g. 22.5 -> `22.5M ops/s`"]
pub fn format_million_ops_per_sec(million_ops: f64) -> String {
    format!("{:.1}M ops/s", million_ops)
}

#[doc = "Memory size in megabytes with two decimals. e.g. 0.00049 -> `0.00 MB`"]
pub fn format_megabytes(megabytes: f64) -> String {
    format!("{:.2} MB", megabytes)
}

#[doc = r#"
    Relative slowdown of `value` against `baseline`, rendered as `{baseline / value:.1}x slower`.

    # Errors
    `value` is zero or either operand is not finite, since the ratio would be meaningless.
"#]
pub fn format_slowdown(baseline: f64, value: f64) -> anyhow::Result<String> {
    if !baseline.is_finite() || !value.is_finite() || value == 0.0 {
        return Err(anyhow!(
            "[format_utils->format_slowdown] cannot compare {} against baseline {}",
            value,
            baseline
        ));
    }

    Ok(format!("{:.1}x slower", baseline / value))
}

#[doc = "Divides every raw value by `ratio` to move it into the display unit"]
pub fn convert_units(raw: &[f64], ratio: f64) -> Vec<f64> {
    raw.iter().map(|value| value / ratio).collect()
}

#[doc = "Tick label for log axes: only exact powers of ten are labelled, as `10^k`"]
pub fn format_power_of_ten(value: f64) -> String {
    if value <= 0.0 || !value.is_finite() {
        return String::new();
    }

    let log10: f64 = value.log10();
    let nearest: f64 = log10.round();

    if (log10 - nearest).abs() < 1e-6 {
        format!("10^{}", nearest as i32)
    } else {
        String::new()
    }
}
