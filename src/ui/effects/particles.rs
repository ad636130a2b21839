//! Drifting particle background
//!
//! A purely decorative canvas layer: a fixed population of slow particles
//! wanders the window, bouncing off the edges, each drawn as a soft glow halo
//! around a solid core under a faint veil tint. The field advances one step
//! per animation frame and knows nothing about the rest of the app.

use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Size, Theme};
use rand::Rng;

use crate::ui::theme;

/// Population size of the field.
pub const PARTICLE_COUNT: usize = 50;

/// Per-frame speed range on each axis.
const MAX_SPEED: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    y: f32,
    radius: f32,
    speed_x: f32,
    speed_y: f32,
    color: Color,
}

/// The animated particle field. Owns particle positions and the bounds they
/// bounce inside; rendering happens through its [`canvas::Program`] impl.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                radius: rng.random_range(1.0..4.0),
                speed_x: rng.random_range(-MAX_SPEED..MAX_SPEED),
                speed_y: rng.random_range(-MAX_SPEED..MAX_SPEED),
                color: hsla_to_color(
                    rng.random_range(0.0..360.0),
                    0.7,
                    0.6,
                    rng.random_range(0.1..0.3),
                ),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Track the window size; particles outside the new bounds are pulled in.
    pub fn resize(&mut self, size: Size) {
        self.width = size.width.max(1.0);
        self.height = size.height.max(1.0);
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Advance every particle one frame, reflecting velocity at the bounds.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.speed_x;
            p.y += p.speed_y;

            if p.x <= 0.0 || p.x >= self.width {
                p.speed_x = -p.speed_x;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y <= 0.0 || p.y >= self.height {
                p.speed_y = -p.speed_y;
                p.y = p.y.clamp(0.0, self.height);
            }
        }
    }

    #[cfg(test)]
    fn positions(&self) -> Vec<(f32, f32)> {
        self.particles.iter().map(|p| (p.x, p.y)).collect()
    }
}

impl<Message> canvas::Program<Message> for ParticleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Faint veil over the page background for the fading-trail look
        let veil = if theme::is_dark_theme(theme) {
            Color::from_rgba8(15, 23, 42, 0.05)
        } else {
            Color::from_rgba8(241, 245, 249, 0.05)
        };
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), veil);

        for p in &self.particles {
            let center = Point::new(p.x, p.y);

            // Soft glow halo, then the solid core
            let glow = Color {
                a: p.color.a * 0.4,
                ..p.color
            };
            frame.fill(&Path::circle(center, p.radius * 2.0), glow);
            frame.fill(&Path::circle(center, p.radius), p.color);
        }

        vec![frame.into_geometry()]
    }
}

/// Convert an HSLA color (hue in degrees) to an iced Color.
fn hsla_to_color(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::from_rgba(r + m, g + m, b + m, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_spawns_the_full_population_in_bounds() {
        let field = ParticleField::new(800.0, 600.0);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for (x, y) in field.positions() {
            assert!((0.0..=800.0).contains(&x));
            assert!((0.0..=600.0).contains(&y));
        }
    }

    #[test]
    fn advance_keeps_particles_in_bounds() {
        let mut field = ParticleField::new(200.0, 100.0);
        for _ in 0..10_000 {
            field.advance();
        }
        for (x, y) in field.positions() {
            assert!((0.0..=200.0).contains(&x), "x escaped: {}", x);
            assert!((0.0..=100.0).contains(&y), "y escaped: {}", y);
        }
    }

    #[test]
    fn hitting_an_edge_reflects_velocity() {
        let mut field = ParticleField::new(100.0, 100.0);
        field.particles.truncate(1);
        let p = &mut field.particles[0];
        p.x = 99.9;
        p.y = 50.0;
        p.speed_x = 0.25;
        p.speed_y = 0.0;

        field.advance();
        assert!(field.particles[0].speed_x < 0.0);
    }

    #[test]
    fn resize_pulls_strays_back_inside() {
        let mut field = ParticleField::new(800.0, 600.0);
        field.resize(Size::new(100.0, 50.0));
        for (x, y) in field.positions() {
            assert!(x <= 100.0 && y <= 50.0);
        }
    }

    #[test]
    fn hsla_conversion_hits_the_primaries() {
        let red = hsla_to_color(0.0, 1.0, 0.5, 1.0);
        assert!((red.r - 1.0).abs() < 1e-5 && red.g.abs() < 1e-5);
        let green = hsla_to_color(120.0, 1.0, 0.5, 1.0);
        assert!((green.g - 1.0).abs() < 1e-5 && green.r.abs() < 1e-5);
        let blue = hsla_to_color(240.0, 1.0, 0.5, 1.0);
        assert!((blue.b - 1.0).abs() < 1e-5 && blue.g.abs() < 1e-5);
    }
}
