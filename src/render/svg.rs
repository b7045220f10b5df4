use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Text};
use svg::{Document, Node};

use crate::estimator::ResultRecord;
use crate::render::RenderSVG;

const WIDTH: f32 = 800.;
const HEIGHT: f32 = 600.;
const MARGIN: f32 = 60.;

/// Maps log-log data coordinates onto the canvas, y pointing up.
struct Frame {
    x: (f64, f64),
    y: (f64, f64),
}

impl Frame {
    fn new(coords: &[(f64, f64)]) -> Self {
        let span = |values: Vec<f64>| {
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if hi > lo {
                (lo, hi)
            } else {
                (lo - 0.5, lo + 0.5)
            }
        };
        Self {
            x: span(coords.iter().map(|c| c.0).collect()),
            y: span(coords.iter().map(|c| c.1).collect()),
        }
    }

    fn map(&self, (x, y): (f64, f64)) -> (f32, f32) {
        let w = (WIDTH - 2. * MARGIN) as f64;
        let h = (HEIGHT - 2. * MARGIN) as f64;
        (
            MARGIN + ((x - self.x.0) / (self.x.1 - self.x.0) * w) as f32,
            HEIGHT - MARGIN - ((y - self.y.0) / (self.y.1 - self.y.0) * h) as f32,
        )
    }
}

fn label(text: &str, (x, y): (f32, f32), anchor: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-size", 14)
        .add(svg::node::Text::new(text))
}

fn axis(from: (f32, f32), to: (f32, f32)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", "black")
        .set("stroke-width", 1)
}

/// Log-log plot of `ln(count)` over `ln(1 / boxlen)`. Records without occupied boxes are skipped.
impl RenderSVG for &[ResultRecord] {
    type Canvas = Document;

    fn render(self, mut document: Document) -> Result<Self::Canvas, String> {
        let coords: Vec<(f64, f64)> = self
            .iter()
            .filter(|r| r.count > 0)
            .map(|r| (r.inverse_boxlen.ln(), (r.count as f64).ln()))
            .collect();

        if coords.is_empty() {
            return Err("Need at least one record with occupied boxes".to_string());
        }

        let frame = Frame::new(&coords);
        document = document
            .set("viewBox", (0, 0, WIDTH, HEIGHT))
            .set("width", format!("{}px", WIDTH))
            .set("height", format!("{}px", HEIGHT));

        let origin = (MARGIN, HEIGHT - MARGIN);
        document.append(axis(origin, (WIDTH - MARGIN, HEIGHT - MARGIN)));
        document.append(axis(origin, (MARGIN, MARGIN)));
        document.append(label("ln(1/boxlen)", (WIDTH / 2., HEIGHT - MARGIN / 3.), "middle"));
        document.append(
            label("ln(count)", (MARGIN / 3., HEIGHT / 2.), "middle")
                .set("transform", format!("rotate(-90, {}, {})", MARGIN / 3., HEIGHT / 2.)),
        );

        let mut data = Data::new().move_to(frame.map(coords[0]));
        for c in &coords[1..] {
            data = data.line_to(frame.map(*c));
        }
        document.append(
            Path::new()
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 1)
                .set("d", data),
        );

        let mut markers = Group::new();
        for c in &coords {
            let (x, y) = frame.map(*c);
            markers.append(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", 4)
                    .set("stroke", "black")
                    .set("stroke-width", 1)
                    .set("fill", "white"),
            );
        }
        document.append(markers);

        Ok(document)
    }
}
