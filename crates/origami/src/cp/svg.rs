//! SVG projection: one `<g>` per orientation, one `<line>` per crease.

use ::svg::node::element::{Group, Line as SvgLine};
use ::svg::Document;

use super::pattern::CreasePattern;
use super::types::Orientation;

const LAYERS: [(Orientation, &str); 4] = [
    (Orientation::Border, "#000000"),
    (Orientation::Mark, "#aaaaaa"),
    (Orientation::Valley, "#2255ff"),
    (Orientation::Mountain, "#ee3322"),
];

impl CreasePattern {
    /// Render into a `size × size` viewport (y axis pointing up in pattern
    /// space, down in SVG).
    pub fn to_svg(&self, size: f64) -> Document {
        let r = self.boundary.bounds();
        let extent = r.width.max(r.height);
        let scale = if extent > 0.0 { size / extent } else { 1.0 };
        let stroke = (size / 300.0).max(0.5);
        let map = |x: f64, y: f64| {
            (
                (x - r.origin.x) * scale,
                size - (y - r.origin.y) * scale,
            )
        };

        let mut doc = Document::new()
            .set("viewBox", (0.0, 0.0, size, size))
            .set("width", size)
            .set("height", size);
        for (orientation, color) in LAYERS {
            let mut group = Group::new()
                .set("id", orientation.as_str())
                .set("stroke", color)
                .set("stroke-width", stroke)
                .set("fill", "none");
            if orientation == Orientation::Mountain {
                group = group.set("stroke-dasharray", format!("{} {}", stroke * 6.0, stroke * 3.0));
            }
            for e in self.graph.edges() {
                if e.data.orientation != orientation {
                    continue;
                }
                let Some(seg) = self.graph.edge_segment(e.index) else {
                    continue;
                };
                let (x1, y1) = map(seg.a.x, seg.a.y);
                let (x2, y2) = map(seg.b.x, seg.b.y);
                group = group.add(
                    SvgLine::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2),
                );
            }
            doc = doc.add(group);
        }
        doc
    }

    pub fn to_svg_string(&self, size: f64) -> String {
        self.to_svg(size).to_string()
    }
}
