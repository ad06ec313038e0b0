//! Decorative 3D viewport.
//!
//! Consumed as an opaque capability: a static wireframe mesh, a stroke
//! color, and a per-frame yaw increment, projected onto a braille canvas.
//! Nothing outside this module depends on how the projection works.

use ratatui::{
    layout::Rect,
    style::Color,
    widgets::canvas::{Canvas, Line as CanvasLine},
    widgets::{Block, BorderType, Borders},
};

const CAMERA_DISTANCE: f64 = 1.8;

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: [f64; 3],
    b: [f64; 3],
}

/// A rotating wireframe scene.
pub struct SceneView {
    mesh: Vec<Segment>,
    yaw: f64,
    yaw_step: f64,
}

impl SceneView {
    /// The eyeglasses mesh: two lens rings, a bridge, and two temples.
    pub fn eyeglasses() -> Self {
        let mut mesh = Vec::new();

        for center_x in [-0.45, 0.45] {
            ring(&mut mesh, center_x, 0.28, 20);
        }
        // Bridge between the lenses.
        mesh.push(Segment { a: [-0.17, 0.0, 0.0], b: [0.17, 0.0, 0.0] });
        // Temples sweep back from the outer rims.
        mesh.push(Segment { a: [-0.73, 0.0, 0.0], b: [-0.85, -0.08, 0.75] });
        mesh.push(Segment { a: [0.73, 0.0, 0.0], b: [0.85, -0.08, 0.75] });

        Self { mesh, yaw: 0.0, yaw_step: 0.01 }
    }

    /// Set the per-frame yaw increment.
    pub fn set_speed(&mut self, yaw_step: f64) {
        self.yaw_step = yaw_step;
    }

    /// Advance the rotation by one frame.
    pub fn step(&mut self) {
        self.yaw = (self.yaw + self.yaw_step) % std::f64::consts::TAU;
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Draw the scene into `area`. `scale` shrinks the projection and
    /// `opacity` dims the stroke; both come from the scroll-driven visual
    /// state of the hosting section.
    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, scale: f64, opacity: f32) {
        let stroke = stroke_color(opacity);
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title(" Experience in 3D ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                let Some(color) = stroke else { return };
                for seg in &self.mesh {
                    let (x1, y1) = project(seg.a, sin_yaw, cos_yaw, scale);
                    let (x2, y2) = project(seg.b, sin_yaw, cos_yaw, scale);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Rotate around the y axis, then apply a simple perspective divide.
fn project(p: [f64; 3], sin_yaw: f64, cos_yaw: f64, scale: f64) -> (f64, f64) {
    let x = p[0] * cos_yaw + p[2] * sin_yaw;
    let z = -p[0] * sin_yaw + p[2] * cos_yaw;
    let k = CAMERA_DISTANCE / (CAMERA_DISTANCE + z);
    (x * k * scale, p[1] * k * scale)
}

fn ring(mesh: &mut Vec<Segment>, center_x: f64, radius: f64, steps: u32) {
    let tau = std::f64::consts::TAU;
    for i in 0..steps {
        let a0 = tau * f64::from(i) / f64::from(steps);
        let a1 = tau * f64::from(i + 1) / f64::from(steps);
        mesh.push(Segment {
            a: [center_x + radius * a0.cos(), radius * a0.sin(), 0.0],
            b: [center_x + radius * a1.cos(), radius * a1.sin(), 0.0],
        });
    }
}

/// Quantize a continuous opacity onto terminal stroke colors. Below the
/// floor the scene is simply not drawn.
fn stroke_color(opacity: f32) -> Option<Color> {
    if opacity < 0.15 {
        None
    } else if opacity < 0.45 {
        Some(Color::DarkGray)
    } else if opacity < 0.8 {
        Some(Color::Gray)
    } else {
        Some(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_advances_and_wraps_the_yaw() {
        let mut scene = SceneView::eyeglasses();
        scene.set_speed(std::f64::consts::TAU / 4.0);
        for _ in 0..5 {
            scene.step();
        }
        assert!(scene.yaw() < std::f64::consts::TAU);
        assert!(scene.yaw() > 0.0);
    }

    #[test]
    fn projection_stays_inside_canvas_bounds_at_full_scale() {
        let scene = SceneView::eyeglasses();
        for seg in &scene.mesh {
            for p in [seg.a, seg.b] {
                let (x, y) = project(p, 0.3, 0.95, 1.0);
                assert!(x.abs() <= 1.0 && y.abs() <= 1.0, "({x}, {y}) out of bounds");
            }
        }
    }

    #[test]
    fn faded_out_scene_draws_nothing() {
        assert!(stroke_color(0.0).is_none());
        assert_eq!(stroke_color(1.0), Some(Color::White));
    }
}
