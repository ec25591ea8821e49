use super::lines::LinearLocus;
use super::types::XY;

#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: XY,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: impl Into<XY>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }

    /// Points where `locus` meets the circle (0, 1 or 2), honouring the
    /// locus' parameter range. A tangent yields a single point.
    pub fn intersection<L: LinearLocus + ?Sized>(&self, locus: &L, eps: f64) -> Vec<XY> {
        let o = locus.origin() - self.center;
        let v = locus.vector();
        let a = v.dot(&v);
        if a < eps * eps {
            return Vec::new();
        }
        let b = 2.0 * o.dot(&v);
        let c = o.dot(&o) - self.radius * self.radius;
        let disc = b * b - 4.0 * a * c;
        let ts: Vec<f64> = if disc.abs() < eps {
            vec![-b / (2.0 * a)]
        } else if disc < 0.0 {
            Vec::new()
        } else {
            let s = disc.sqrt();
            vec![(-b - s) / (2.0 * a), (-b + s) / (2.0 * a)]
        };
        ts.into_iter()
            .filter(|&t| locus.compare_parameter(t, eps))
            .map(|t| locus.point_on_line(t))
            .collect()
    }

    pub fn intersection_circle(&self, other: &Circle, eps: f64) -> Vec<XY> {
        let d = other.center - self.center;
        let dist = d.magnitude();
        if dist < eps || dist > self.radius + other.radius + eps {
            return Vec::new();
        }
        if dist < (self.radius - other.radius).abs() - eps {
            return Vec::new();
        }
        let a = (self.radius * self.radius - other.radius * other.radius + dist * dist)
            / (2.0 * dist);
        let h2 = self.radius * self.radius - a * a;
        let u = d * (1.0 / dist);
        let base = self.center + u * a;
        if h2 <= eps {
            return vec![base];
        }
        let h = h2.sqrt();
        vec![base + u.rotate90() * h, base - u.rotate90() * h]
    }

    pub fn contains(&self, p: XY, eps: f64) -> bool {
        p.distance_to(&self.center) <= self.radius + eps
    }
}
