pub mod annotation;
pub mod rendered_artifact;
