use crate::common::*;

use crate::dto::chart::annotation::*;

#[doc = "Image written by one chart job"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub annotations: Vec<Annotation>,
}
