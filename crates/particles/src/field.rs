use crate::{FieldConfig, Particle};
use rand::Rng;

/// The live confetti population. Paint order is collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// The starting population, spread over one canvas height above the top edge.
    pub fn scatter<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Self {
        let band = -(config.height as i32)..=0;
        let particles = (0..config.initial_count)
            .map(|_| Particle::random(config, band.clone(), rng))
            .collect();
        Self { particles }
    }

    /// One simulation tick.
    ///
    /// Survivors keep their relative order and any new arrivals are appended
    /// after them. At most `batch_size` particles are injected per tick, so a
    /// large loss is made up over several ticks.
    pub fn advance<R: Rng + ?Sized>(self, config: &FieldConfig, rng: &mut R) -> Self {
        let mut particles: Vec<Particle> = self
            .particles
            .into_iter()
            .map(|p| p.step(config))
            .filter(|p| p.is_visible(config))
            .collect();

        if particles.len() < config.floor {
            particles.extend(
                (0..config.batch_size).map(|_| Particle::random(config, config.spawn_band.clone(), rng)),
            );
        }

        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Drives a field through successive ticks, yielding the field after each one.
pub struct Simulation<'a, R: Rng> {
    config: &'a FieldConfig,
    field: ParticleField,
    rng: R,
}

impl<'a, R: Rng> Simulation<'a, R> {
    /// Starts from a freshly scattered field.
    pub fn new(config: &'a FieldConfig, mut rng: R) -> Self {
        let field = ParticleField::scatter(config, &mut rng);
        log::debug!("Scattered {} initial particles", field.len());
        Self::from_field(config, field, rng)
    }

    pub fn from_field(config: &'a FieldConfig, field: ParticleField, rng: R) -> Self {
        Self { config, field, rng }
    }
}

impl<R: Rng> Iterator for Simulation<'_, R> {
    type Item = ParticleField;

    fn next(&mut self) -> Option<Self::Item> {
        let current = std::mem::take(&mut self.field);
        self.field = current.advance(self.config, &mut self.rng);
        Some(self.field.clone())
    }
}
