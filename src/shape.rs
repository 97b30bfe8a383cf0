use crate::value::{AttrValue, ShapeAttributes};
use indexmap::IndexMap;

// Relevant attributes per shape tag (lower-cased lookup). List order is the
// output record's key order.
fn shape_attr_names(tag: &str) -> &'static [&'static str] {
    match tag {
        "circle" => &["cx", "cy", "r"],
        "ellipse" => &["cx", "cy", "rx", "ry"],
        "rect" => &["x", "y", "width", "height", "rx", "ry"],
        "line" => &["x1", "y1", "x2", "y2"],
        "polyline" | "polygon" => &["points"],
        _ => &[],
    }
}

pub(crate) fn is_shape_tag(tag: &str) -> bool {
    tag == "path" || !shape_attr_names(tag).is_empty()
}

/// Expands `<g>` containers into a flat list of leaf elements.
///
/// Depth-first, preserving encounter order across nesting levels; the output
/// never contains a group node. Non-element nodes (text, comments) are
/// dropped.
pub fn flatten_shapes<'a, 'input>(
    nodes: impl IntoIterator<Item = roxmltree::Node<'a, 'input>>,
) -> Vec<roxmltree::Node<'a, 'input>> {
    let mut out = Vec::new();
    flatten_into(nodes, &mut out);
    out
}

fn flatten_into<'a, 'input>(
    nodes: impl IntoIterator<Item = roxmltree::Node<'a, 'input>>,
    out: &mut Vec<roxmltree::Node<'a, 'input>>,
) {
    for node in nodes {
        if !node.is_element() {
            continue;
        }
        if node.tag_name().name().eq_ignore_ascii_case("g") {
            flatten_into(node.children(), out);
        } else {
            out.push(node);
        }
    }
}

/// Reads the shape-specific geometric attributes off one element.
///
/// The record's key set exactly matches the fixed attribute list for the tag;
/// absent attributes map to [`AttrValue::Null`]. `<path>` short-circuits to
/// its raw `d` value. Unknown tags produce an empty record.
pub fn shape_attributes(node: roxmltree::Node<'_, '_>) -> ShapeAttributes {
    let tag = node.tag_name().name().to_ascii_lowercase();
    if tag == "path" {
        return ShapeAttributes::Path(node.attribute("d").map(str::to_string));
    }

    let mut record = IndexMap::new();
    for &name in shape_attr_names(&tag) {
        let value = match node.attribute(name) {
            None => AttrValue::Null,
            Some(raw) if name == "points" => AttrValue::Points(parse_points(raw)),
            Some(raw) => coerce_number(raw),
        };
        record.insert(name.to_string(), value);
    }
    ShapeAttributes::Record(record)
}

// Numeric strings (whitespace-padded included) become numbers; anything else
// stays verbatim.
fn coerce_number(raw: &str) -> AttrValue {
    match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => AttrValue::Number(v),
        _ => AttrValue::Text(raw.to_string()),
    }
}

/// Parses a point list like `"0,0 10,10 20,0"` into coordinate rows.
///
/// Tokens are split on whitespace runs, coordinates on `,`. An unparseable
/// coordinate yields NaN in place rather than failing the call; a token with
/// an unexpected comma count yields a row of that length.
pub fn parse_points(input: &str) -> Vec<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .split(',')
                .map(|piece| piece.parse::<f64>().unwrap_or(f64::NAN))
                .collect()
        })
        .collect()
}
