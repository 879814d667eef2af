use crate::common::*;

use crate::dto::chart::annotation::*;

use crate::enums::orientation::*;

use crate::model::chart::{bar_panel::*, line_panel::*};

use crate::utils_modules::{format_utils::*, layout_utils::*};

#[doc = r#"
    One value label per bar, placed at the bar end (plus the panel's label offset).

    Vertical bars anchor at `(slot, value)`, horizontal bars at `(value, slot)`.
"#]
pub fn bar_value_annotations(panel: &BarPanel) -> Vec<Annotation> {
    panel
        .series()
        .values()
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let end: f64 = panel.value_format().plotted(*raw) + panel.label_offset();
            let slot: f64 = slot_center(idx);

            let position: (f64, f64) = match panel.orientation() {
                Orientation::Vertical => (slot, end),
                Orientation::Horizontal => (end, slot),
            };

            Annotation::new(
                AnnotationKind::ValueLabel,
                position,
                panel.value_format().label(*raw),
            )
        })
        .collect()
}

#[doc = r#"
    Ratio badges `baseline / value` for every element except the baseline itself,
    centred at half the bar length. Empty when the panel has no comparison.
"#]
pub fn ratio_annotations(panel: &BarPanel) -> anyhow::Result<Vec<Annotation>> {
    let Some(baseline) = panel.comparison() else {
        return Ok(Vec::new());
    };

    let base_idx: usize = baseline.resolve(panel.series())?;
    let values: &Vec<f64> = panel.series().values();
    let base_value: f64 = values[base_idx];

    let mut annotations: Vec<Annotation> = Vec::with_capacity(values.len().saturating_sub(1));

    for (idx, raw) in values.iter().enumerate() {
        if idx == base_idx {
            continue;
        }

        let text: String = format_slowdown(base_value, *raw)
            .with_context(|| format!("[annotation_utils->ratio_annotations] element {}", idx))?;

        let middle: f64 = panel.value_format().plotted(*raw) / 2.0;
        let slot: f64 = slot_center(idx);

        let position: (f64, f64) = match panel.orientation() {
            Orientation::Vertical => (slot, middle),
            Orientation::Horizontal => (middle, slot),
        };

        annotations.push(Annotation::new(AnnotationKind::RatioBadge, position, text));
    }

    Ok(annotations)
}

#[doc = "One callout per data point of a line panel, anchored on the point"]
pub fn point_callouts(panel: &LinePanel) -> Vec<Annotation> {
    panel
        .curve()
        .points()
        .into_iter()
        .map(|(x, y)| {
            Annotation::new(
                AnnotationKind::PointCallout,
                (x, y),
                panel.value_format().label(y),
            )
        })
        .collect()
}
