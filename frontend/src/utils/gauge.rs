use std::f64::consts::PI;

/// Share of the gauge to fill, always within [0, 1]. A non-positive or
/// non-finite `max` renders as empty.
pub fn fill_fraction(value: f64, max: f64) -> f64 {
  if !value.is_finite() || !max.is_finite() || max <= 0.0 {
    return 0.0;
  }
  (value / max).clamp(0.0, 1.0)
}

pub fn fill_percent(value: f64, max: f64) -> f64 {
  fill_fraction(value, max) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
  pub size: f64,
  pub stroke_width: f64,
  pub radius: f64,
  pub circumference: f64,
}

impl RingGeometry {
  pub fn new(size: f64, stroke_width: f64) -> Self {
    let radius = ((size - stroke_width) / 2.0).max(0.0);
    RingGeometry { size, stroke_width, radius, circumference: radius * 2.0 * PI }
  }

  pub fn center(&self) -> f64 {
    self.size / 2.0
  }

  /// stroke-dashoffset: the full circumference hides the arc, zero draws all of it
  pub fn dash_offset(&self, value: f64, max: f64) -> f64 {
    self.circumference - fill_fraction(value, max) * self.circumference
  }
}

/// number printed inside the ring
pub fn ring_label(value: f64, max: f64) -> String {
  format!("{}", (fill_fraction(value, max) * max.max(0.0)).round())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn linear_fill_bounds() {
    assert_eq!(fill_percent(0.0, 100.0), 0.0);
    assert_eq!(fill_percent(100.0, 100.0), 100.0);
    assert_eq!(fill_percent(5.0, 10.0), 50.0);
    assert_eq!(fill_percent(250.0, 100.0), 100.0);
    assert_eq!(fill_percent(-3.0, 100.0), 0.0);
  }

  #[test]
  fn degenerate_inputs_render_empty() {
    assert_eq!(fill_percent(50.0, 0.0), 0.0);
    assert_eq!(fill_percent(50.0, -1.0), 0.0);
    assert_eq!(fill_percent(f64::NAN, 100.0), 0.0);
    assert_eq!(fill_percent(f64::INFINITY, 100.0), 0.0);
  }

  #[test]
  fn ring_offsets() {
    let ring = RingGeometry::new(120.0, 8.0);
    assert_eq!(ring.radius, 56.0);
    assert_eq!(ring.center(), 60.0);
    assert_eq!(ring.dash_offset(0.0, 100.0), ring.circumference);
    assert_eq!(ring.dash_offset(100.0, 100.0), 0.0);
    assert_eq!(ring.dash_offset(140.0, 100.0), 0.0);
    assert!((ring.dash_offset(50.0, 100.0) - ring.circumference / 2.0).abs() < 1e-9);
  }

  #[test]
  fn ring_label_is_rounded_and_bounded() {
    assert_eq!(ring_label(78.0, 100.0), "78");
    assert_eq!(ring_label(84.6, 100.0), "85");
    assert_eq!(ring_label(130.0, 100.0), "100");
    assert_eq!(ring_label(-4.0, 100.0), "0");
  }

  #[test]
  fn stroke_wider_than_ring_does_not_go_negative() {
    let ring = RingGeometry::new(4.0, 10.0);
    assert_eq!(ring.radius, 0.0);
    assert_eq!(ring.dash_offset(50.0, 100.0), 0.0);
  }
}
