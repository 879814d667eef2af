use crate::common::*;

/* share of a category slot covered by its bar */
pub const BAR_WIDTH: f64 = 0.8;

/* blank margin before the first and after the last slot */
const CATEGORY_MARGIN: f64 = 0.1;

#[doc = "Center coordinate of the slot assigned to category `index`"]
pub fn slot_center(index: usize) -> f64 {
    index as f64
}

#[doc = "Index of the category whose slot is centred on `coord`"]
pub fn slot_index(coord: f64) -> usize {
    coord.round().max(0.0) as usize
}

#[doc = "Extent `(start, end)` of the bar drawn in slot `index`"]
pub fn bar_extent(index: usize) -> (f64, f64) {
    let center: f64 = slot_center(index);
    (center - BAR_WIDTH / 2.0, center + BAR_WIDTH / 2.0)
}

#[doc = "Category axis range holding `count` slots"]
pub fn category_axis_range(count: usize) -> Range<f64> {
    let half_slot: f64 = 0.5 + CATEGORY_MARGIN;
    -half_slot..(count.max(1) as f64 - 1.0 + half_slot)
}

#[doc = r#"
    Value axis range for bars starting at zero.

    `headroom` is the share of the largest value added on top so that the
    value annotations do not collide with the plot border.
"#]
pub fn value_axis_range(values: &[f64], headroom: f64) -> anyhow::Result<Range<f64>> {
    let max_val: f64 = values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if !max_val.is_finite() {
        return Err(anyhow!(
            "[layout_utils->value_axis_range] values must be non-empty and finite"
        ));
    }

    let top: f64 = if max_val > 0.0 {
        max_val * (1.0 + headroom)
    } else {
        1.0
    };

    Ok(0.0..top)
}

#[doc = r#"
    Pixel distance from the bar base to the center of a ratio badge, along the value axis.

    `half` is half the badge length along that axis. A badge that fits inside
    its bar with `gap` to spare on both ends sits in the middle of the bar;
    otherwise it is pushed past `label_end`, the far edge of the bar's value label.
"#]
pub fn badge_offset(bar_len: i32, half: i32, label_end: i32, gap: i32) -> i32 {
    if bar_len >= 2 * (half + gap) {
        bar_len / 2
    } else {
        label_end + gap + half
    }
}

#[doc = r#"
    Range of a logarithmic axis covering `values`, widened by `pad_factor` on both sides.

    # Errors
    Empty input, or any value that is not strictly positive and finite.
"#]
pub fn log_axis_range(values: &[f64], pad_factor: f64) -> anyhow::Result<Range<f64>> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(anyhow!(
            "[layout_utils->log_axis_range] log axis needs strictly positive finite values"
        ));
    }

    let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok((min_val / pad_factor)..(max_val * pad_factor))
}
