use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /* formatted value next to a bar */
    ValueLabel,
    /* relative ratio against the baseline, centred on a bar */
    RatioBadge,
    /* boxed value next to a data point */
    PointCallout,
}

#[doc = "Text label attached to a rendered element, anchored in data coordinates"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub position: (f64, f64),
    pub text: String,
}
