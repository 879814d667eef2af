use crate::common::*;

use crate::model::chart::{bar_panel::*, line_panel::*};

use crate::enums::{chart_kind::*, orientation::*};

#[derive(Debug, Clone)]
pub enum Panel {
    Bars(BarPanel),
    Line(LinePanel),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Bars(bars) => bars.title().as_str(),
            Panel::Line(line) => line.title().as_str(),
        }
    }
}

#[doc = r#"
    Everything needed to render one chart image.

    Built once per chart job through `ChartSpec::new`, which checks that the
    panels agree with the chart kind, and never mutated afterwards.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ChartSpec {
    kind: ChartKind,
    panels: Vec<Panel>,
    /* figure size in inches (width, height) */
    figure_size: (f64, f64),
    file_name: String,
}

impl ChartSpec {
    pub fn new(
        kind: ChartKind,
        panels: Vec<Panel>,
        figure_size: (f64, f64),
        file_name: &str,
    ) -> anyhow::Result<Self> {
        Self::check_panels(kind, &panels)?;

        if !(figure_size.0 > 0.0 && figure_size.1 > 0.0) {
            return Err(anyhow!(
                "[ChartSpec->new] figure size must be positive: {:?}",
                figure_size
            ));
        }

        if file_name.is_empty() {
            return Err(anyhow!("[ChartSpec->new] file name must not be empty"));
        }

        Ok(ChartSpec {
            kind,
            panels,
            figure_size,
            file_name: file_name.to_string(),
        })
    }

    fn check_panels(kind: ChartKind, panels: &[Panel]) -> anyhow::Result<()> {
        let mismatch = || {
            anyhow!(
                "[ChartSpec->check_panels] panels do not form a {} chart",
                kind.tag()
            )
        };

        match (kind, panels) {
            (ChartKind::BarVertical, [Panel::Bars(bars)])
                if *bars.orientation() == Orientation::Vertical =>
            {
                Ok(())
            }
            (ChartKind::BarHorizontal, [Panel::Bars(bars)])
                if *bars.orientation() == Orientation::Horizontal =>
            {
                Ok(())
            }
            (ChartKind::DualPanel, [Panel::Bars(left), Panel::Bars(right)]) => {
                if left.series().labels() != right.series().labels() {
                    return Err(anyhow!(
                        "[ChartSpec->check_panels] dual panels must share the category order"
                    ));
                }

                if left.color_rule() != right.color_rule() {
                    return Err(anyhow!(
                        "[ChartSpec->check_panels] dual panels must share the color rule"
                    ));
                }

                Ok(())
            }
            (ChartKind::LogLogLine, [Panel::Line(_)]) => Ok(()),
            _ => Err(mismatch()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{color_rule::*, value_format::*};
    use crate::model::chart::{chart_color::*, scaling_curve::*, series::*};

    fn bars(labels: &[&str], orientation: Orientation, color_rule: ColorRule) -> Panel {
        let values: Vec<f64> = (1..=labels.len()).map(|v| v as f64).collect();
        Panel::Bars(BarPanel::new(
            "bars".to_string(),
            Series::from_table(labels, &values).unwrap(),
            orientation,
            color_rule,
            ValueFormat::Nanoseconds,
            "Latency".to_string(),
        ))
    }

    fn viridis() -> ColorRule {
        ColorRule::Viridis {
            start: 0.2,
            end: 0.8,
        }
    }

    #[test]
    fn orientation_must_match_kind() {
        let vertical: Panel = bars(&["a", "b"], Orientation::Vertical, viridis());

        assert!(ChartSpec::new(ChartKind::BarVertical, vec![vertical.clone()], (12.0, 6.0), "a.png").is_ok());
        assert!(ChartSpec::new(ChartKind::BarHorizontal, vec![vertical], (12.0, 6.0), "a.png").is_err());
    }

    #[test]
    fn dual_panel_requires_shared_order_and_colors() {
        let left: Panel = bars(&["SMA", "EMA"], Orientation::Vertical, viridis());

        let same: Panel = bars(&["SMA", "EMA"], Orientation::Vertical, viridis());
        assert!(ChartSpec::new(ChartKind::DualPanel, vec![left.clone(), same], (14.0, 5.0), "d.png").is_ok());

        let reordered: Panel = bars(&["EMA", "SMA"], Orientation::Vertical, viridis());
        assert!(ChartSpec::new(ChartKind::DualPanel, vec![left.clone(), reordered], (14.0, 5.0), "d.png").is_err());

        let recolored: Panel = bars(
            &["SMA", "EMA"],
            Orientation::Vertical,
            ColorRule::Palette(vec![ChartColor::BLACK]),
        );
        assert!(ChartSpec::new(ChartKind::DualPanel, vec![left.clone(), recolored], (14.0, 5.0), "d.png").is_err());

        assert!(ChartSpec::new(ChartKind::DualPanel, vec![left], (14.0, 5.0), "d.png").is_err());
    }

    #[test]
    fn line_kind_takes_a_single_line_panel() {
        let line: Panel = Panel::Line(LinePanel::new(
            "memory".to_string(),
            ScalingCurve::from_raw(&[1000.0, 10000.0], &[0.5, 2.1], 1024.0).unwrap(),
            ChartColor(231, 76, 60),
            ValueFormat::Megabytes,
            "levels".to_string(),
            "MB".to_string(),
            "Memory Usage".to_string(),
        ));

        let spec: ChartSpec = ChartSpec::new(ChartKind::LogLogLine, vec![line], (10.0, 6.0), "m.png").unwrap();
        assert_eq!(spec.panels()[0].title(), "memory");
        assert!(ChartSpec::new(ChartKind::LogLogLine, vec![], (10.0, 6.0), "m.png").is_err());
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let vertical: Panel = bars(&["a"], Orientation::Vertical, viridis());
        assert!(ChartSpec::new(ChartKind::BarVertical, vec![vertical.clone()], (0.0, 6.0), "a.png").is_err());
        assert!(ChartSpec::new(ChartKind::BarVertical, vec![vertical], (12.0, 6.0), "").is_err());
    }
}
