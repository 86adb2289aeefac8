use serde::{Deserialize, Serialize};

/// Kind-specific dimensions, relative to the element position.
///
/// The position is the top-left corner of the bounding box for every kind,
/// so a circle of radius `r` occupies `[x, x + 2r]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Geometry {
    /// Flat `[x0, y0, x1, y1, ...]` point list
    Line { points: Vec<f64> },
    Rect {
        width: f64,
        height: f64,
        #[serde(default)]
        corner_radius: f64,
    },
    Circle { radius: f64 },
    /// Regular polygon (triangle, pentagon)
    Polygon { sides: u32, radius: f64 },
    Star {
        num_points: u32,
        inner_radius: f64,
        outer_radius: f64,
    },
    /// Text extent comes from the element's text properties
    Text,
}

/// Axis-aligned box in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.min_x + dx, self.min_y + dy, self.max_x + dx, self.max_y + dy)
    }
}

impl Geometry {
    /// Offset from the top-left corner to the visual centre, used to center a
    /// freshly dropped element on the pointer.
    pub fn center_offset(&self) -> (f64, f64) {
        match self {
            Geometry::Rect { width, height, .. } => (width / 2.0, height / 2.0),
            Geometry::Circle { radius } | Geometry::Polygon { radius, .. } => (*radius, *radius),
            Geometry::Star { outer_radius, .. } => (*outer_radius, *outer_radius),
            Geometry::Line { .. } | Geometry::Text => (0.0, 0.0),
        }
    }

    /// Local bounding box; `None` for text, whose extent depends on its content.
    pub fn local_bounds(&self) -> Option<Bounds> {
        match self {
            Geometry::Line { points } => {
                let (x0, y0) = (*points.first()?, *points.get(1)?);
                let mut bounds = Bounds::new(x0, y0, x0, y0);
                for pair in points.chunks_exact(2) {
                    bounds.min_x = bounds.min_x.min(pair[0]);
                    bounds.max_x = bounds.max_x.max(pair[0]);
                    bounds.min_y = bounds.min_y.min(pair[1]);
                    bounds.max_y = bounds.max_y.max(pair[1]);
                }
                Some(bounds)
            }
            Geometry::Rect { width, height, .. } => Some(Bounds::new(0.0, 0.0, *width, *height)),
            Geometry::Circle { radius } | Geometry::Polygon { radius, .. } => {
                Some(Bounds::new(0.0, 0.0, radius * 2.0, radius * 2.0))
            }
            Geometry::Star { outer_radius, .. } => {
                Some(Bounds::new(0.0, 0.0, outer_radius * 2.0, outer_radius * 2.0))
            }
            Geometry::Text => None,
        }
    }

    /// Vertices of a regular polygon or star, relative to the top-left corner.
    ///
    /// The first vertex points straight up.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        match self {
            Geometry::Polygon { sides, radius } => {
                let n = (*sides).max(3);
                (0..n)
                    .map(|i| polar(*radius, *radius, *radius, i as f64 / n as f64))
                    .collect()
            }
            Geometry::Star {
                num_points,
                inner_radius,
                outer_radius,
            } => {
                let n = (*num_points).max(2) * 2;
                (0..n)
                    .map(|i| {
                        let r = if i % 2 == 0 { *outer_radius } else { *inner_radius };
                        polar(*outer_radius, *outer_radius, r, i as f64 / n as f64)
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

fn polar(cx: f64, cy: f64, r: f64, turn: f64) -> (f64, f64) {
    let angle = turn * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}
