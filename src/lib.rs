mod document;
mod shape;
mod style;
mod value;

pub use document::extract_document;
pub use shape::{flatten_shapes, parse_points, shape_attributes};
pub use style::{parse_gradient, style_attributes};
pub use value::{
    AttrValue, ExtractedDocument, ExtractedShape, Gradient, GradientStop, ShapeAttributes,
    StyleValue,
};
