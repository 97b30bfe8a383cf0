use crate::value::{Gradient, GradientStop, StyleValue};
use indexmap::IndexMap;

// Presentation attributes that participate in style merging, besides inline
// style="". Everything else is ignored (no CSS cascade here).
const PRESENTATION_ATTRS: [&str; 6] = [
    "fill",
    "stroke",
    "stroke-width",
    "opacity",
    "transform",
    "clip-path",
];

// Geometry attributes per gradient tag (exact-case lookup, per the SVG
// element names).
fn gradient_attr_names(tag: &str) -> &'static [&'static str] {
    match tag {
        "linearGradient" => &["x1", "y1", "x2", "y2"],
        "radialGradient" => &["cx", "cy", "r", "fx", "fy"],
        _ => &[],
    }
}

/// Merges inline `style` declarations with allow-listed presentation
/// attributes into one record.
///
/// Inline declarations win over plain attribute values. The exception is a
/// `url(#id)` attribute value that resolves to an element in the owning
/// document: the resolved gradient record is stored even over an inline
/// value. An unresolvable reference is a silent no-op.
pub fn style_attributes(node: roxmltree::Node<'_, '_>) -> IndexMap<String, StyleValue> {
    let mut style = IndexMap::new();

    // Pass 1: inline style. Later duplicates overwrite earlier ones.
    if let Some(inline) = node.attribute("style") {
        for segment in inline.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((property, value)) = segment.split_once(':') else {
                continue;
            };
            style.insert(
                property.trim().to_string(),
                StyleValue::Text(value.trim().to_string()),
            );
        }
    }

    // Pass 2: presentation attributes fill the gaps, skipping empty and
    // literal "none" values.
    for name in PRESENTATION_ATTRS {
        let Some(value) = node.attribute(name) else {
            continue;
        };
        if value.is_empty() || value == "none" {
            continue;
        }
        if let Some(id) = gradient_reference(value) {
            if let Some(target) = lookup_by_id(node, id) {
                if let Some(gradient) = parse_gradient(Some(target)) {
                    style.insert(name.to_string(), StyleValue::Gradient(gradient));
                }
            }
            continue;
        }
        if !style.contains_key(name) {
            style.insert(name.to_string(), StyleValue::Text(value.to_string()));
        }
    }

    style
}

// Matches url(#id) references, tolerating quotes around the fragment.
fn gradient_reference(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix("url(")?.strip_suffix(')')?;
    let id = inner
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

// roxmltree keeps no id index; scan the whole document for the element.
fn lookup_by_id<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    id: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.document()
        .descendants()
        .find(|n| n.is_element() && n.attribute("id") == Some(id))
}

/// Converts a gradient element into a plain `{type, <geometry>, stops}`
/// record. Absent input yields `None` rather than an error.
///
/// Geometry attributes are chosen by exact tag name and captured verbatim;
/// an unrecognized tag contributes no geometry. Stops are collected from
/// `<stop>` descendants at any depth, in document order.
pub fn parse_gradient(node: Option<roxmltree::Node<'_, '_>>) -> Option<Gradient> {
    let node = node?;
    let tag = node.tag_name().name();

    let mut attrs = IndexMap::new();
    for &name in gradient_attr_names(tag) {
        if let Some(value) = node.attribute(name) {
            attrs.insert(name.to_string(), value.to_string());
        }
    }

    let stops = node
        .descendants()
        .filter(|n| *n != node && n.is_element() && n.tag_name().name() == "stop")
        .map(|stop| GradientStop {
            offset: stop.attribute("offset").unwrap_or("0").to_string(),
            color: stop.attribute("stop-color").unwrap_or("#000000").to_string(),
        })
        .collect();

    let kind = tag
        .strip_suffix("Gradient")
        .unwrap_or(tag)
        .to_ascii_lowercase();

    Some(Gradient { kind, attrs, stops })
}
