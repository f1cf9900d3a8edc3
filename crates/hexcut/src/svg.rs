//! SVG serialisation of shape lists.
//!
//! Uses quick-xml's writer so text and attribute values are escaped for us.
//! Coordinates stay in device units; the physical size only shows up in the
//! `width`/`height` attributes of the root element.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::RenderError;
use crate::geometry::Vector2;
use crate::shape::{Fill, LineCap, LineJoin, RadialGradient, Shape, Style};

/// Root element parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub origin: Vector2,
    pub render_size_cm: (f64, f64),
}

/// Serialise `shapes` in order, gradients hoisted into one `<defs>`.
pub fn shapes_to_svg(frame: &Frame, shapes: &[Shape]) -> Result<String, RenderError> {
    let mut out = SvgWriter::new();

    out.decl()?;
    out.start(
        "svg",
        &[
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
            ("width", format!("{}cm", physical(frame.render_size_cm.0))),
            ("height", format!("{}cm", physical(frame.render_size_cm.1))),
            (
                "viewBox",
                format!(
                    "{} {} {} {}",
                    num(frame.origin.x),
                    num(frame.origin.y),
                    num(frame.width),
                    num(frame.height)
                ),
            ),
        ],
    )?;

    let gradients: Vec<(usize, &RadialGradient)> = shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| match shape {
            Shape::GradientPolygon { gradient, .. } => Some((i, gradient)),
            _ => None,
        })
        .collect();

    if !gradients.is_empty() {
        out.start("defs", &[])?;
        for (index, gradient) in gradients {
            out.start(
                "radialGradient",
                &[
                    ("id", gradient_id(index)),
                    ("gradientUnits", "userSpaceOnUse".to_string()),
                    ("cx", num(gradient.center.x)),
                    ("cy", num(gradient.center.y)),
                    ("r", num(gradient.radius)),
                ],
            )?;
            for stop in &gradient.stops {
                out.empty(
                    "stop",
                    &[
                        ("offset", ratio(stop.offset)),
                        ("stop-color", stop.color.to_string()),
                        ("stop-opacity", ratio(stop.opacity)),
                    ],
                )?;
            }
            out.end("radialGradient")?;
        }
        out.end("defs")?;
    }

    for (index, shape) in shapes.iter().enumerate() {
        write_shape(&mut out, index, shape)?;
    }

    out.end("svg")?;
    out.finish()
}

fn write_shape(out: &mut SvgWriter, index: usize, shape: &Shape) -> Result<(), RenderError> {
    match shape {
        Shape::Rectangle { corner, width, height, style } => {
            let mut attrs = vec![
                ("x", num(corner.x)),
                ("y", num(corner.y)),
                ("width", num(*width)),
                ("height", num(*height)),
            ];
            style_attrs(style, &mut attrs);
            out.empty("rect", &attrs)
        }
        Shape::Polyline { points, closed, style } => {
            let mut attrs = vec![("points", points_attr(points))];
            style_attrs(style, &mut attrs);
            out.empty(if *closed { "polygon" } else { "polyline" }, &attrs)
        }
        Shape::Line { from, to, style } => {
            let mut attrs = vec![
                ("x1", num(from.x)),
                ("y1", num(from.y)),
                ("x2", num(to.x)),
                ("y2", num(to.y)),
            ];
            style_attrs(style, &mut attrs);
            out.empty("line", &attrs)
        }
        Shape::Circle { center, radius, style } => {
            let mut attrs = vec![
                ("cx", num(center.x)),
                ("cy", num(center.y)),
                ("r", num(*radius)),
            ];
            style_attrs(style, &mut attrs);
            out.empty("circle", &attrs)
        }
        Shape::Text { text, position, font_size, font_family, fill } => {
            let attrs = [
                ("x", num(position.x)),
                ("y", num(position.y)),
                ("font-size", num(*font_size)),
                ("font-family", font_family.clone()),
                ("fill", fill.to_string()),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "central".to_string()),
            ];
            out.start("text", &attrs)?;
            out.text(text)?;
            out.end("text")
        }
        Shape::GradientPolygon { points, style, .. } => {
            let mut attrs = vec![("points", points_attr(points))];
            style_attrs(style, &mut attrs);
            // the gradient replaces whatever solid fill the style carries
            attrs.retain(|(key, _)| *key != "fill" && *key != "fill-opacity");
            attrs.push(("fill", format!("url(#{})", gradient_id(index))));
            out.empty("polygon", &attrs)
        }
    }
}

fn style_attrs(style: &Style, attrs: &mut Vec<(&'static str, String)>) {
    match style.fill {
        Fill::None => attrs.push(("fill", "none".to_string())),
        Fill::Solid(color) => {
            attrs.push(("fill", color.to_string()));
            if style.fill_opacity < 1.0 {
                attrs.push(("fill-opacity", ratio(style.fill_opacity)));
            }
        }
    }
    if let Some(stroke) = style.stroke {
        attrs.push(("stroke", stroke.color.to_string()));
        attrs.push(("stroke-width", num(stroke.width)));
        if let Some(cap) = stroke.cap {
            let cap = match cap {
                LineCap::Butt => "butt",
                LineCap::Round => "round",
                LineCap::Square => "square",
            };
            attrs.push(("stroke-linecap", cap.to_string()));
        }
        if let Some(join) = stroke.join {
            let join = match join {
                LineJoin::Miter => "miter",
                LineJoin::Round => "round",
                LineJoin::Bevel => "bevel",
            };
            attrs.push(("stroke-linejoin", join.to_string()));
        }
    }
}

fn gradient_id(index: usize) -> String {
    format!("gradient-{index}")
}

fn points_attr(points: &[Vector2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Device coordinates: two decimals is far below a pixel.
fn num(value: f64) -> String {
    format!("{value:.2}")
}

/// Centimeters, without trailing zeros.
fn physical(value: f64) -> String {
    let s = format!("{value:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Opacities and offsets need more precision than coordinates.
fn ratio(value: f64) -> String {
    format!("{value:.4}")
}

/// Thin wrapper so every call site maps writer errors the same way.
struct SvgWriter {
    inner: Writer<Vec<u8>>,
}

impl SvgWriter {
    fn new() -> Self {
        Self { inner: Writer::new_with_indent(Vec::new(), b' ', 2) }
    }

    fn decl(&mut self) -> Result<(), RenderError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<(), RenderError> {
        self.write(Event::Start(element(name, attrs)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<(), RenderError> {
        self.write(Event::Empty(element(name, attrs)))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(Event::Text(BytesText::new(text)))
    }

    fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.inner
            .write_event(event)
            .map_err(|e| RenderError::Markup(e.to_string()))
    }

    fn finish(self) -> Result<String, RenderError> {
        String::from_utf8(self.inner.into_inner()).map_err(|e| RenderError::Markup(e.to_string()))
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, String)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attrs {
        elem.push_attribute((*key, value.as_str()));
    }
    elem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Color, GradientStop};

    fn frame() -> Frame {
        Frame {
            width: 100.0,
            height: 50.0,
            origin: Vector2::new(-50.0, -25.0),
            render_size_cm: (10.0, 5.0),
        }
    }

    #[test]
    fn root_carries_physical_size() {
        let svg = shapes_to_svg(&frame(), &[]).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="10cm""#));
        assert!(svg.contains(r#"height="5cm""#));
        assert!(svg.contains(r#"viewBox="-50.00 -25.00 100.00 50.00""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn fabrication_colors_survive() {
        let shapes = [Shape::Rectangle {
            corner: Vector2::ZERO,
            width: 10.0,
            height: 10.0,
            style: Style::filled(Color::WHITE).with_stroke(Color::CUT_2, 2.0),
        }];
        let svg = shapes_to_svg(&frame(), &shapes).unwrap();
        assert!(svg.contains(r#"stroke="rgb(51,102,153)""#));
        assert!(svg.contains(r#"fill="rgb(255,255,255)""#));
    }

    #[test]
    fn open_and_closed_polylines() {
        let pts = vec![Vector2::ZERO, Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)];
        let style = Style::stroked(Color::BLACK, 1.0);
        let shapes = [
            Shape::Polyline { points: pts.clone(), closed: true, style },
            Shape::Polyline { points: pts, closed: false, style },
        ];
        let svg = shapes_to_svg(&frame(), &shapes).unwrap();
        assert!(svg.contains("<polygon points=\"0.00,0.00 1.00,0.00 1.00,1.00\""));
        assert!(svg.contains("<polyline points="));
    }

    #[test]
    fn gradients_are_hoisted_and_referenced() {
        let gradient = RadialGradient {
            center: Vector2::ZERO,
            radius: 5.0,
            stops: vec![
                GradientStop { offset: 0.0, color: Color::ENGRAVE, opacity: 0.0 },
                GradientStop { offset: 1.0, color: Color::ENGRAVE, opacity: 0.45 },
            ],
        };
        let shapes = [
            Shape::Circle { center: Vector2::ZERO, radius: 1.0, style: Style::stroked(Color::BLACK, 1.0) },
            Shape::GradientPolygon {
                points: vec![Vector2::ZERO, Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)],
                gradient,
                style: Style::stroked(Color::ENGRAVE, 1.0),
            },
        ];
        let svg = shapes_to_svg(&frame(), &shapes).unwrap();
        let defs = svg.find("<defs>").unwrap();
        let polygon = svg.find("<polygon").unwrap();
        assert!(defs < polygon);
        assert!(svg.contains(r#"id="gradient-1""#));
        assert!(svg.contains(r#"fill="url(#gradient-1)""#));
        assert!(svg.contains(r#"stop-opacity="0.4500""#));
    }

    #[test]
    fn text_is_escaped_and_centered() {
        let shapes = [Shape::Text {
            text: "a<1>".to_string(),
            position: Vector2::new(3.0, 4.0),
            font_size: 12.0,
            font_family: "Helvetica".to_string(),
            fill: Color::ENGRAVE,
        }];
        let svg = shapes_to_svg(&frame(), &shapes).unwrap();
        assert!(svg.contains("a&lt;1&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }
}
