//! Decorative visual effects
//!
//! Canvas-driven animation layers with no ties to application data.

pub mod particles;

pub use particles::ParticleField;
