use crate::common::*;

use crate::model::chart::series::*;

#[doc = "Which series element the comparative ratios are measured against"]
#[derive(Debug, Clone, PartialEq)]
pub enum Baseline {
    First,
    Label(String),
}

impl Baseline {
    #[doc = "Resolves the baseline to a position inside `series`"]
    pub fn resolve(&self, series: &Series) -> anyhow::Result<usize> {
        match self {
            Baseline::First => Ok(0),
            Baseline::Label(label) => series
                .labels()
                .iter()
                .position(|candidate| candidate == label)
                .ok_or_else(|| {
                    anyhow!(
                        "[Baseline->resolve] baseline label {:?} is not part of the series",
                        label
                    )
                }),
        }
    }
}
