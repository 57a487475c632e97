//! In-memory surface that records every draw call

use serde::Serialize;

use super::Surface;

/// One primitive issued to a surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCall {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetFillColor(String),
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
    },
}

/// Headless surface, used by tests and the native host
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls issued since the most recent clear (the current frame)
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear { .. }))
            .unwrap_or(0);
        &self.calls[start..]
    }

    /// `(x, y, radius)` of every circle drawn, in order
    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::FillCircle { x, y, radius } => Some((x, y, radius)),
            _ => None,
        })
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::SetFillColor(color.to_string()));
    }

    fn fill_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.calls.push(DrawCall::FillCircle {
            x: center_x,
            y: center_y,
            radius,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.clear(0.0, 0.0, 10.0, 10.0);
        surface.fill_circle(1.0, 1.0, 5.0);
        surface.clear(0.0, 0.0, 10.0, 10.0);
        surface.fill_circle(2.0, 2.0, 5.0);

        assert_eq!(surface.calls().len(), 4);
        assert_eq!(surface.clear_count(), 2);
        assert_eq!(
            surface.last_frame()[1],
            DrawCall::FillCircle {
                x: 2.0,
                y: 2.0,
                radius: 5.0
            }
        );
        assert_eq!(surface.last_frame().len(), 2);

        surface.reset();
        assert!(surface.calls().is_empty());
        assert!(surface.last_frame().is_empty());
    }
}
