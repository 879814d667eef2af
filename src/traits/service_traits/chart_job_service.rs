use crate::model::chart::chart_spec::*;

pub trait ChartJobService {
    #[doc = "Chart specs to render, in execution order. One spec produces one image."]
    fn chart_jobs(&self) -> anyhow::Result<Vec<ChartSpec>>;
}
