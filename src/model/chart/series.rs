use crate::common::*;

#[doc = r#"
    Ordered `(label, value)` pairs rendered as one visual set.

    Order is significant: it defines the slot order on the category axis.
    Construction goes through `from_parts`, which rejects inconsistent input.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    #[doc = r#"
        Builds a series from parallel label/value vectors.

        # Errors
        - label and value counts differ
        - the series is empty
        - any value is NaN or infinite
    "#]
    pub fn from_parts(labels: Vec<String>, values: Vec<f64>) -> anyhow::Result<Self> {
        if labels.len() != values.len() {
            return Err(anyhow!(
                "[Series->from_parts] labels and values must have the same length: {} vs {}",
                labels.len(),
                values.len()
            ));
        }

        if labels.is_empty() {
            return Err(anyhow!("[Series->from_parts] Cannot build a series without data"));
        }

        if let Some(idx) = values.iter().position(|value| !value.is_finite()) {
            return Err(anyhow!(
                "[Series->from_parts] value of {:?} is not finite: {}",
                labels[idx],
                values[idx]
            ));
        }

        Ok(Series { labels, values })
    }

    #[doc = "Convenience constructor for compiled-in tables"]
    pub fn from_table(labels: &[&str], values: &[f64]) -> anyhow::Result<Self> {
        Self::from_parts(
            labels.iter().map(|label| label.to_string()).collect(),
            values.to_vec(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declared_order() {
        let series: Series = Series::from_table(&["SMA", "EMA", "RSI"], &[120.0, 145.0, 180.0]).unwrap();

        assert_eq!(series.labels(), &vec!["SMA", "EMA", "RSI"]);
        assert_eq!(series.values(), &vec![120.0, 145.0, 180.0]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Series::from_table(&["SMA", "EMA"], &[120.0]).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn empty_and_non_finite_are_rejected() {
        assert!(Series::from_table(&[], &[]).is_err());
        assert!(Series::from_table(&["SMA"], &[f64::NAN]).is_err());
        assert!(Series::from_table(&["SMA"], &[f64::NEG_INFINITY]).is_err());
    }
}
