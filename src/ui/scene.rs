/// Decorative hero scene
///
/// A wireframe dumbbell that sways and bobs, plus a pulsing hotspot dot.
/// Everything here is cosmetic: the drawing is a pure function of elapsed
/// seconds, with no entity of its own and no interaction logic.
use cgmath::{Matrix3, Rad, Vector3};
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::ui::theme;
use crate::Message;

/// Dumbbell proportions (model units).
const HANDLE_RADIUS: f32 = 0.05;
const HANDLE_HALF_LENGTH: f32 = 0.45;
const PLATE_RADIUS: f32 = 0.25;
/// Inner and outer face of each plate along the handle axis.
const PLATE_FACES: [f32; 2] = [0.45, 0.75];
/// Points per wireframe ring.
const RING_SEGMENTS: usize = 16;

/// Wireframe stroke colors: red handle, steel plates.
const HANDLE_COLOR: Color = theme::ACCENT_BRIGHT;
const PLATE_COLOR: Color = Color { r: 0.55, g: 0.58, b: 0.64, a: 1.0 };

/// Muted environment tints, one per tour location, cycled by the current
/// carousel index.
const LOCATION_TINTS: [[f32; 3]; 7] = [
    [0.20, 0.10, 0.10], // entrance
    [0.15, 0.10, 0.15], // cardio
    [0.20, 0.05, 0.05], // weights
    [0.15, 0.05, 0.10], // classes
    [0.10, 0.10, 0.15], // functional
    [0.15, 0.10, 0.05], // recovery
    [0.10, 0.10, 0.10], // locker
];

/// Sway of the dumbbell around the vertical axis, in radians.
pub fn yaw_angle(elapsed: f32) -> f32 {
    (elapsed * 0.5).sin() * 0.3
}

/// Vertical bob of the whole dumbbell, in model units.
pub fn bob_offset(elapsed: f32) -> f32 {
    (elapsed * 0.8).sin() * 0.1
}

/// Breathing scale of the hotspot dot.
pub fn pulse_scale(elapsed: f32) -> f32 {
    1.0 + (elapsed * 3.0).sin() * 0.1
}

/// Backdrop tint for a tour gallery slot.
pub fn location_tint(index: usize) -> Color {
    let [r, g, b] = LOCATION_TINTS[index % LOCATION_TINTS.len()];
    Color { r, g, b, a: 0.8 }
}

/// Orthographic projection with a mild depth factor so the wireframe
/// reads as 3D. Model +y is up; screen y grows downward.
fn project(v: Vector3<f32>, center: Point, scale: f32) -> Point {
    let depth = 1.0 / (1.0 + v.z * 0.18);
    Point::new(center.x + v.x * scale * depth, center.y - v.y * scale * depth)
}

/// A circle of points around the handle axis at position `x`.
fn ring(x: f32, radius: f32) -> Vec<Vector3<f32>> {
    (0..RING_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
            Vector3::new(x, radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// The hero canvas program. Holds nothing but the animation clock.
#[derive(Debug, Clone, Copy)]
pub struct HeroScene {
    /// Seconds since the kiosk launched.
    pub elapsed: f32,
}

impl HeroScene {
    /// Apply this frame's sway and bob to a model-space point.
    fn transform(&self, v: Vector3<f32>) -> Vector3<f32> {
        let rotation = Matrix3::from_angle_y(Rad(yaw_angle(self.elapsed)));
        rotation * v + Vector3::new(0.0, bob_offset(self.elapsed), 0.0)
    }

    /// Stroke a ring of model-space points as a closed path.
    fn stroke_ring(
        &self,
        frame: &mut canvas::Frame,
        points: &[Vector3<f32>],
        center: Point,
        scale: f32,
        color: Color,
    ) {
        let mut builder = canvas::path::Builder::new();

        for (i, &v) in points.iter().enumerate() {
            let p = project(self.transform(v), center, scale);
            if i == 0 {
                builder.move_to(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();

        frame.stroke(
            &builder.build(),
            canvas::Stroke::default().with_color(color).with_width(1.5),
        );
    }

    /// Stroke a straight segment between two model-space points.
    fn stroke_segment(
        &self,
        frame: &mut canvas::Frame,
        a: Vector3<f32>,
        b: Vector3<f32>,
        center: Point,
        scale: f32,
        color: Color,
    ) {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(project(self.transform(a), center, scale));
        builder.line_to(project(self.transform(b), center, scale));

        frame.stroke(
            &builder.build(),
            canvas::Stroke::default().with_color(color).with_width(1.5),
        );
    }
}

impl canvas::Program<Message> for HeroScene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let scale = bounds.height * 0.55;

        // Plates: inner and outer face rings, joined by four rim lines.
        for side in [-1.0_f32, 1.0] {
            for face in PLATE_FACES {
                let points = ring(side * face, PLATE_RADIUS);
                self.stroke_ring(&mut frame, &points, center, scale, PLATE_COLOR);
            }

            let inner = ring(side * PLATE_FACES[0], PLATE_RADIUS);
            let outer = ring(side * PLATE_FACES[1], PLATE_RADIUS);
            for i in (0..RING_SEGMENTS).step_by(RING_SEGMENTS / 4) {
                self.stroke_segment(&mut frame, inner[i], outer[i], center, scale, PLATE_COLOR);
            }
        }

        // Handle: four longitudinal edges between the plates.
        let edges = [
            (0.0, HANDLE_RADIUS),
            (0.0, -HANDLE_RADIUS),
            (HANDLE_RADIUS, 0.0),
            (-HANDLE_RADIUS, 0.0),
        ];
        for (z, y) in edges {
            self.stroke_segment(
                &mut frame,
                Vector3::new(-HANDLE_HALF_LENGTH, y, z),
                Vector3::new(HANDLE_HALF_LENGTH, y, z),
                center,
                scale,
                HANDLE_COLOR,
            );
        }

        // Pulsing hotspot dot with a halo, top-right of the scene.
        let pulse = pulse_scale(self.elapsed);
        let hotspot = Point::new(bounds.width * 0.82, bounds.height * 0.18);

        frame.stroke(
            &canvas::Path::circle(hotspot, 10.0 * pulse),
            canvas::Stroke::default()
                .with_color(Color { a: 0.4, ..theme::ACCENT_BRIGHT })
                .with_width(1.5),
        );
        frame.fill(
            &canvas::Path::circle(hotspot, 5.0 * pulse),
            theme::ACCENT_BRIGHT,
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_stays_within_sway_range() {
        for t in 0..100 {
            let yaw = yaw_angle(t as f32 * 0.37);
            assert!(yaw.abs() <= 0.3 + f32::EPSILON);
        }
    }

    #[test]
    fn test_bob_stays_within_range() {
        for t in 0..100 {
            assert!(bob_offset(t as f32 * 0.41).abs() <= 0.1 + f32::EPSILON);
        }
    }

    #[test]
    fn test_pulse_breathes_around_unity() {
        for t in 0..100 {
            let pulse = pulse_scale(t as f32 * 0.23);
            assert!((0.9..=1.1).contains(&pulse));
        }
    }

    #[test]
    fn test_motion_starts_at_rest() {
        assert_eq!(yaw_angle(0.0), 0.0);
        assert_eq!(bob_offset(0.0), 0.0);
        assert_eq!(pulse_scale(0.0), 1.0);
    }

    #[test]
    fn test_tints_cycle_with_wraparound() {
        assert_eq!(location_tint(0), location_tint(7));
        assert_eq!(location_tint(3), location_tint(10));
        assert_ne!(location_tint(0), location_tint(2));
    }

    #[test]
    fn test_tints_are_translucent() {
        for index in 0..8 {
            assert_eq!(location_tint(index).a, 0.8);
        }
    }

    #[test]
    fn test_projection_keeps_origin_centered() {
        let center = Point::new(320.0, 240.0);
        let projected = project(Vector3::new(0.0, 0.0, 0.0), center, 100.0);
        assert_eq!(projected, center);
    }

    #[test]
    fn test_projection_is_finite_over_the_wireframe() {
        let center = Point::new(320.0, 240.0);
        let scene = HeroScene { elapsed: 12.5 };

        for face in PLATE_FACES {
            for &v in &ring(face, PLATE_RADIUS) {
                let p = project(scene.transform(v), center, 200.0);
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn test_ring_has_expected_point_count() {
        assert_eq!(ring(0.45, PLATE_RADIUS).len(), RING_SEGMENTS);
    }
}
