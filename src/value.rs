use indexmap::IndexMap;
use serde::Serialize;

/// One extracted attribute value.
///
/// `Number` carries NaN only inside `points` coordinates; a scalar attribute
/// that fails numeric coercion stays `Text`, and an absent one is `Null`, so
/// the two failure modes remain distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Number(f64),
    Text(String),
    Points(Vec<Vec<f64>>),
}

/// Attributes extracted from one shape element.
///
/// `<path>` collapses to the raw `d` string (or `None` when absent) instead of
/// an attribute record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeAttributes {
    Path(Option<String>),
    Record(IndexMap<String, AttrValue>),
}

/// A merged style property value: verbatim text, or a resolved gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Gradient(Gradient),
}

/// A gradient definition in plain form.
///
/// Serializes as `{"type": ..., <geometry attrs>, "stops": [...]}`. Geometry
/// attributes are captured verbatim and appear only when present on the
/// element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub attrs: IndexMap<String, String>,
    pub stops: Vec<GradientStop>,
}

/// One `<stop>` entry, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: String,
    pub color: String,
}

/// One leaf shape pulled out of a document by [`crate::extract_document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedShape {
    pub tag: String,
    pub attributes: ShapeAttributes,
    pub style: IndexMap<String, StyleValue>,
}

/// Every shape extracted from one document, in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ExtractedDocument {
    pub shapes: Vec<ExtractedShape>,
}
