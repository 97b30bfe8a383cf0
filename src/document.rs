use crate::shape::{flatten_shapes, is_shape_tag, shape_attributes};
use crate::style::style_attributes;
use crate::value::{ExtractedDocument, ExtractedShape};

/// Parses an SVG string and extracts every leaf shape under the root.
///
/// Groups are flattened away; non-shape elements (defs, gradients, metadata)
/// are skipped. Returns `None` when the XML does not parse or contains no
/// `<svg>` element.
pub fn extract_document(svg_xml: &str) -> Option<ExtractedDocument> {
    let doc = roxmltree::Document::parse(svg_xml).ok()?;
    let root = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case("svg"))?;

    let shapes = flatten_shapes(root.children())
        .into_iter()
        .filter(|node| is_shape_tag(&node.tag_name().name().to_ascii_lowercase()))
        .map(|node| ExtractedShape {
            tag: node.tag_name().name().to_string(),
            attributes: shape_attributes(node),
            style: style_attributes(node),
        })
        .collect();

    Some(ExtractedDocument { shapes })
}
