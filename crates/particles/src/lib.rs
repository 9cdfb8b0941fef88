//! Confetti particle field.
//!
//! A [`ParticleField`] is advanced one tick at a time by [`ParticleField::advance`],
//! which consumes the current field and returns the next one. [`Simulation`]
//! threads the field through successive ticks and yields one field per frame.

mod config;
mod field;
mod particle;

pub use self::config::FieldConfig;
pub use self::field::{ParticleField, Simulation};
pub use self::particle::{DrawRect, Particle};
