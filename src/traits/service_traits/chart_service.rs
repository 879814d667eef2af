use crate::common::*;

use crate::dto::chart::rendered_artifact::*;

use crate::model::chart::chart_spec::*;

pub trait ChartService {
    #[doc = "
        Render a chart spec to a PNG image and save it under `output_dir`
        # Arguments
        * `spec` - Chart kind, panels, figure size and file name
        * `output_dir` - Existing directory the image is written to (file is overwritten)
        # Returns
        * The written artifact: path, cropped pixel size and every annotation drawn
    "]
    fn render_chart(&self, spec: &ChartSpec, output_dir: &Path)
        -> anyhow::Result<RenderedArtifact>;
}
