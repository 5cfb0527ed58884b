//! Code to convert a [`LoweredImage`] to SVG markup

use itertools::Itertools;
use rgb::RGB8;
use simple_xml_builder::XMLElement;

use super::{
    ConcreteFillStyle, ConcreteStrokeStyle, Hatch, LoweredElem, LoweredImage, Paint, TextAnchor,
};

/// The XML namespace of SVG elements
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Whether or not the root `<svg>` element declares its namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Markup embedded in an HTML page, where the namespace is implied by the `<svg>` tag
    Inline,
    /// A stand-alone `.svg` document, which must declare its namespace
    Standalone,
}

/// Generate an SVG root element for a lowered [`Image`](super::Image) on a `width` by `height`
/// canvas.
pub fn gen_svg(image: &LoweredImage, width: u32, height: u32, namespace: Namespace) -> XMLElement {
    let mut root = XMLElement::new("svg");
    if namespace == Namespace::Standalone {
        root.add_attribute("xmlns", SVG_NAMESPACE);
    }
    root.add_attribute("width", &width.to_string());
    root.add_attribute("height", &height.to_string());

    // Markers and patterns are registered as the elements refer to them, but have to be declared
    // before any of those elements
    let mut defs = Defs::default();
    let elems = image
        .elements()
        .iter()
        .map(|e| gen_svg_elem(e, &mut defs))
        .collect_vec();
    if let Some(defs_elem) = defs.to_xml() {
        root.add_child(defs_elem);
    }
    for elem in elems {
        root.add_child(elem);
    }
    root
}

/// Creates an [`XMLElement`] for a given [`LoweredElem`]
fn gen_svg_elem(elem: &LoweredElem, defs: &mut Defs) -> XMLElement {
    // Create an unstyled XML element
    let mut xml_elem = match elem {
        LoweredElem::Rect(rect, _) => {
            let mut elem = XMLElement::new("rect");
            elem.add_attribute("x", &rect.x.to_string());
            elem.add_attribute("y", &rect.y.to_string());
            elem.add_attribute("width", &rect.width.to_string());
            elem.add_attribute("height", &rect.height.to_string());
            elem
        }
        LoweredElem::LineSegment(p1, p2, _) => {
            let mut elem = XMLElement::new("line");
            elem.add_attribute("x1", &p1.x.to_string());
            elem.add_attribute("y1", &p1.y.to_string());
            elem.add_attribute("x2", &p2.x.to_string());
            elem.add_attribute("y2", &p2.y.to_string());
            elem
        }
        LoweredElem::Text {
            position,
            text,
            style,
        } => {
            let anchor_str = match style.anchor {
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let mut elem = XMLElement::new("text");
            elem.add_attribute("x", &position.x.to_string());
            elem.add_attribute("y", &position.y.to_string());
            elem.add_attribute("font-size", &style.font_size.to_string());
            elem.add_attribute("font-family", &style.font_family);
            elem.add_attribute("font-weight", &style.font_weight.to_string());
            elem.add_attribute("text-anchor", anchor_str);
            elem.add_text(text);
            elem
        }
    };
    // Add styles.  Text is never stroked, so doesn't get `stroke="none"`
    add_fill_style_attrs(elem.fill_style(), defs, &mut xml_elem);
    if !matches!(elem, LoweredElem::Text { .. }) {
        add_stroke_style_attrs(elem.stroke_style(), defs, &mut xml_elem);
    }
    xml_elem
}

/// Add SVG attributes to give an [`XMLElement`] a given `FillStyle`
fn add_fill_style_attrs(
    style: Option<&ConcreteFillStyle>,
    defs: &mut Defs,
    xml_elem: &mut XMLElement,
) {
    match style {
        Some(s) => xml_elem.add_attribute("fill", &defs.paint_str(&s.paint)),
        None => xml_elem.add_attribute("fill", "none"), // We need `fill="none"` to disable the fill
    }
}

/// Add SVG attributes to give an [`XMLElement`] a given `StrokeStyle`
fn add_stroke_style_attrs(
    style: Option<&ConcreteStrokeStyle>,
    defs: &mut Defs,
    xml_elem: &mut XMLElement,
) {
    match style {
        Some(s) => {
            xml_elem.add_attribute("stroke", &s.stroke_color.to_string());
            xml_elem.add_attribute("stroke-width", &s.line_width.to_string());
            if s.arrowheads {
                let marker_url = format!("url(#{})", defs.arrow_id(s.stroke_color));
                xml_elem.add_attribute("marker-start", &marker_url);
                xml_elem.add_attribute("marker-end", &marker_url);
            }
        }
        None => xml_elem.add_attribute("stroke", "none"), // Put `stroke="none"` if no stroke
    }
}

/// The reusable definitions (arrowhead markers and hatch patterns) needed by an image.  Each
/// distinct arrowhead colour and hatch gets one definition, numbered in order of first use.
#[derive(Debug, Clone, Default)]
struct Defs {
    arrow_colors: Vec<RGB8>,
    hatches: Vec<Hatch>,
}

impl Defs {
    /// The id of the arrowhead marker drawn in `color`, defining it if this is its first use
    fn arrow_id(&mut self, color: RGB8) -> String {
        format!("arrow-{}", index_of_or_push(&mut self.arrow_colors, color))
    }

    /// The id of the pattern which paints `hatch`, defining it if this is its first use
    fn hatch_id(&mut self, hatch: &Hatch) -> String {
        format!("hatch-{}", index_of_or_push(&mut self.hatches, hatch.clone()))
    }

    /// The value of a `fill` attribute which paints with `paint`
    fn paint_str(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Color(color) => color.to_string(),
            Paint::Hatch(hatch) => format!("url(#{})", self.hatch_id(hatch)),
        }
    }

    /// Creates the `<defs>` element, or `None` if nothing needs defining
    fn to_xml(&self) -> Option<XMLElement> {
        if self.arrow_colors.is_empty() && self.hatches.is_empty() {
            return None;
        }
        let mut defs_elem = XMLElement::new("defs");
        for (idx, color) in self.arrow_colors.iter().enumerate() {
            defs_elem.add_child(arrow_marker(&format!("arrow-{}", idx), *color));
        }
        for (idx, hatch) in self.hatches.iter().enumerate() {
            defs_elem.add_child(hatch_pattern(&format!("hatch-{}", idx), hatch));
        }
        Some(defs_elem)
    }
}

fn index_of_or_push<T: PartialEq>(items: &mut Vec<T>, item: T) -> usize {
    match items.iter().position(|i| *i == item) {
        Some(idx) => idx,
        None => {
            items.push(item);
            items.len() - 1
        }
    }
}

/// A triangular arrowhead which points along the line at both ends
fn arrow_marker(id: &str, color: RGB8) -> XMLElement {
    let mut marker = XMLElement::new("marker");
    marker.add_attribute("id", id);
    marker.add_attribute("viewBox", "0 0 10 10");
    marker.add_attribute("refX", "5");
    marker.add_attribute("refY", "5");
    marker.add_attribute("markerWidth", "6");
    marker.add_attribute("markerHeight", "6");
    marker.add_attribute("orient", "auto-start-reverse");

    let mut path = XMLElement::new("path");
    path.add_attribute("d", "M 0 0 L 10 5 L 0 10 z");
    path.add_attribute("fill", &color.to_string());
    marker.add_child(path);
    marker
}

/// A tile containing one vertical line, rotated to give diagonal hatching
fn hatch_pattern(id: &str, hatch: &Hatch) -> XMLElement {
    let spacing = hatch.spacing.to_string();
    let mut pattern = XMLElement::new("pattern");
    pattern.add_attribute("id", id);
    pattern.add_attribute("width", &spacing);
    pattern.add_attribute("height", &spacing);
    pattern.add_attribute("patternUnits", "userSpaceOnUse");
    pattern.add_attribute("patternTransform", &format!("rotate({})", hatch.angle));

    let mut line = XMLElement::new("line");
    line.add_attribute("x1", "0");
    line.add_attribute("y1", "0");
    line.add_attribute("x2", "0");
    line.add_attribute("y2", &spacing);
    line.add_attribute("stroke", &hatch.color.to_string());
    line.add_attribute("stroke-width", &hatch.line_width.to_string());
    pattern.add_child(line);
    pattern
}

/// Lists the tag names of `root`'s children, for quick structural checks
#[cfg(test)]
pub(crate) fn child_tags(markup: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(markup).expect("Generated SVG should be valid XML");
    doc.root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name().to_owned())
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Elem, FillStyle, Image, RenderingOpts, Style, StrokeStyle, TextStyle};
    use crate::{layout::Rect, V2};

    fn sample_image() -> LoweredImage {
        let mut image = Image::empty();
        image.add(Elem::Rect(
            Rect::new(10, 20, 30, 40),
            Style::FillAndStroke(FillStyle::StairHatch, StrokeStyle::Stair),
        ));
        image.add(Elem::LineSegment(
            V2::new(0.0, 5.0),
            V2::new(50.0, 5.0),
            StrokeStyle::Dimension,
        ));
        image.add(Elem::Text {
            position: V2::new(25.0, 2.5),
            text: "Hall 24' × 12'".to_owned(),
            style: TextStyle::RegionLabel,
        });
        image.lower(&RenderingOpts::default())
    }

    #[test]
    fn namespace_only_when_standalone() {
        let image = sample_image();
        let inline = gen_svg(&image, 100, 80, Namespace::Inline).to_string();
        let standalone = gen_svg(&image, 100, 80, Namespace::Standalone).to_string();
        assert!(!inline.contains(SVG_NAMESPACE));
        assert!(standalone.contains(&format!("xmlns=\"{}\"", SVG_NAMESPACE)));
    }

    #[test]
    fn defs_come_first() {
        let markup = gen_svg(&sample_image(), 100, 80, Namespace::Standalone).to_string();
        assert_eq!(child_tags(&markup), vec!["defs", "rect", "line", "text"]);
    }

    #[test]
    fn elements_reference_defs() {
        let markup = gen_svg(&sample_image(), 100, 80, Namespace::Standalone).to_string();
        let doc = roxmltree::Document::parse(&markup).unwrap();
        let find = |tag: &str| {
            doc.descendants()
                .find(|n| n.has_tag_name((SVG_NAMESPACE, tag)))
                .unwrap()
        };

        assert_eq!(find("marker").attribute("id"), Some("arrow-0"));
        assert_eq!(find("pattern").attribute("id"), Some("hatch-0"));
        assert_eq!(find("pattern").attribute("patternTransform"), Some("rotate(45)"));

        let rect = find("rect");
        assert_eq!(rect.attribute("x"), Some("10"));
        assert_eq!(rect.attribute("height"), Some("40"));
        assert_eq!(rect.attribute("fill"), Some("url(#hatch-0)"));
        assert_eq!(rect.attribute("stroke-width"), Some("1.2"));

        let line = doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name((SVG_NAMESPACE, "line")))
            .unwrap();
        assert_eq!(line.attribute("marker-end"), Some("url(#arrow-0)"));
        assert_eq!(line.attribute("fill"), Some("none"));

        let text = find("text");
        assert_eq!(text.text().map(str::trim), Some("Hall 24' × 12'"));
        assert_eq!(text.attribute("text-anchor"), Some("middle"));
        assert_eq!(text.attribute("stroke"), None);
    }

    #[test]
    fn no_defs_for_plain_images() {
        let mut image = Image::empty();
        image.add(Elem::Rect(
            Rect::new(0, 0, 1, 1),
            Style::JustFill(FillStyle::Interior),
        ));
        let markup = gen_svg(&image.lower(&RenderingOpts::default()), 1, 1, Namespace::Inline)
            .to_string();
        assert_eq!(child_tags(&markup), vec!["rect"]);
    }

    #[test]
    fn defs_numbered_by_first_use() {
        let (red, blue) = (RGB8::new(255, 0, 0), RGB8::new(0, 0, 255));
        let mut defs = Defs::default();
        assert_eq!(defs.arrow_id(red), "arrow-0");
        assert_eq!(defs.arrow_id(blue), "arrow-1");
        assert_eq!(defs.arrow_id(red), "arrow-0");

        let hatch = |angle| Hatch {
            spacing: 8.0,
            line_width: 2.0,
            color: blue,
            angle,
        };
        assert_eq!(defs.paint_str(&Paint::Hatch(hatch(45.0))), "url(#hatch-0)");
        assert_eq!(defs.paint_str(&Paint::Hatch(hatch(-45.0))), "url(#hatch-1)");
        assert_eq!(defs.paint_str(&Paint::Color(red)), "rgb(255,0,0)");

        // Every id handed out is declared, in the order it was first used
        let markup = defs.to_xml().unwrap().to_string();
        let doc = roxmltree::Document::parse(&markup).unwrap();
        let declared = doc
            .root_element()
            .children()
            .filter_map(|n| n.attribute("id"))
            .collect::<Vec<_>>();
        assert_eq!(declared, vec!["arrow-0", "arrow-1", "hatch-0", "hatch-1"]);
    }
}
