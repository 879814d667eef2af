use crate::common::*;

use crate::utils_modules::format_utils::*;

#[doc = "Numeric `(x, y)` points of a scaling measurement, already in display units"]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ScalingCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl ScalingCurve {
    #[doc = r#"
        Builds a curve from x positions and raw y values expressed in a smaller unit.

        Every raw value is divided by `unit_ratio` (e.g. 1024 for KB -> MB).

        # Errors
        Mismatched lengths, empty input, or values that cannot sit on a log axis
        (zero, negative, non-finite).
    "#]
    pub fn from_raw(xs: &[f64], raw_ys: &[f64], unit_ratio: f64) -> anyhow::Result<Self> {
        if xs.len() != raw_ys.len() {
            return Err(anyhow!(
                "[ScalingCurve->from_raw] X and Y data must have the same length: {} vs {}",
                xs.len(),
                raw_ys.len()
            ));
        }

        if xs.is_empty() {
            return Err(anyhow!("[ScalingCurve->from_raw] Cannot build a curve without data"));
        }

        if !unit_ratio.is_finite() || unit_ratio <= 0.0 {
            return Err(anyhow!(
                "[ScalingCurve->from_raw] invalid unit ratio {}",
                unit_ratio
            ));
        }

        let ys: Vec<f64> = convert_units(raw_ys, unit_ratio);

        if let Some(bad) = xs
            .iter()
            .chain(ys.iter())
            .find(|value| !value.is_finite() || **value <= 0.0)
        {
            return Err(anyhow!(
                "[ScalingCurve->from_raw] log-scaled data must be positive and finite, got {}",
                bad
            ));
        }

        Ok(ScalingCurve {
            xs: xs.to_vec(),
            ys,
        })
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}
