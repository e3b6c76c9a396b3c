//! Win celebration particles and bell cues.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

use crate::controller::{Cue, EffectStatus, Effects};
use crate::games::tictactoe::{Mark, WinLine};

/// Particles spawned per win.
pub const BURST_SIZE: usize = 20;

const MAX_SPEED: f32 = 0.02;
const SHRINK_PER_TICK: f32 = 0.1;

/// One spark, in board-relative coordinates where the board spans 0.0..1.0
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    vx: f32,
    vy: f32,
    /// Size; the particle dies at zero.
    pub radius: f32,
}

impl Particle {
    /// Glyph for the current size.
    pub fn glyph(&self) -> &'static str {
        match self.radius {
            r if r > 3.5 => "●",
            r if r > 2.0 => "•",
            _ => "·",
        }
    }
}

/// Particle system plus bell queue. Implements [`Effects`] so the session
/// controller can drive it directly.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
    bell: bool,
    pending_bells: usize,
    last_winner: Option<Mark>,
}

impl ParticleField {
    /// Creates an empty field. `bell` enables the terminal bell for cues.
    pub fn new(bell: bool, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            bell,
            pending_bells: 0,
            last_winner: None,
        }
    }

    /// Creates an empty field with a fixed seed.
    pub fn seeded(bell: bool, seed: u64) -> Self {
        Self::new(bell, StdRng::seed_from_u64(seed))
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mark whose win spawned the current burst.
    pub fn last_winner(&self) -> Option<Mark> {
        self.last_winner
    }

    /// True while any particle is alive.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Spawns a burst centred on (`x`, `y`).
    #[instrument(skip(self))]
    pub fn spawn(&mut self, x: f32, y: f32) {
        for _ in 0..BURST_SIZE {
            let particle = Particle {
                x,
                y,
                vx: self.rng.random_range(-MAX_SPEED..=MAX_SPEED),
                vy: self.rng.random_range(-MAX_SPEED..=MAX_SPEED),
                radius: self.rng.random_range(2..=5) as f32,
            };
            self.particles.push(particle);
        }
        debug!(count = self.particles.len(), "Particles spawned");
    }

    /// Advances every particle one frame and drops the dead ones.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.radius = (p.radius - SHRINK_PER_TICK).max(0.0);
        }
        self.particles.retain(|p| p.radius > 0.0);
        if self.particles.is_empty() {
            self.last_winner = None;
        }
    }

    /// Removes all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.last_winner = None;
    }

    /// Returns and clears the number of bells owed to the terminal.
    pub fn take_bells(&mut self) -> usize {
        std::mem::take(&mut self.pending_bells)
    }
}

impl Effects for ParticleField {
    fn play(&mut self, cue: Cue) -> EffectStatus {
        if !self.bell {
            return EffectStatus::Unavailable;
        }
        // A click is too frequent for the bell; only wins ring.
        match cue {
            Cue::Win => {
                self.pending_bells += 1;
                EffectStatus::Played
            }
            Cue::Click => EffectStatus::Unavailable,
        }
    }

    fn celebrate(&mut self, mark: Mark, line: WinLine) -> EffectStatus {
        let [a, _, c] = line.positions();
        // Middle of the line, with each cell's centre at (col + 0.5) / 3.
        let x = (a.col() + c.col()) as f32 / 6.0 + 1.0 / 6.0;
        let y = (a.row() + c.row()) as f32 / 6.0 + 1.0 / 6.0;
        self.last_winner = Some(mark);
        self.spawn(x, y);
        EffectStatus::Played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WIN_LINES;

    #[test]
    fn test_celebrate_spawns_burst_at_line_centre() {
        let mut field = ParticleField::seeded(false, 1);
        // Middle row.
        field.celebrate(Mark::X, WIN_LINES[1]);
        assert_eq!(field.particles().len(), BURST_SIZE);
        for p in field.particles() {
            assert!((p.x - 0.5).abs() < 1e-6);
            assert!((p.y - 0.5).abs() < 1e-6);
            assert!((2.0..=5.0).contains(&p.radius));
        }
        assert_eq!(field.last_winner(), Some(Mark::X));
    }

    #[test]
    fn test_particles_die_out() {
        let mut field = ParticleField::seeded(false, 2);
        field.spawn(0.5, 0.5);
        for _ in 0..60 {
            field.tick();
        }
        assert!(!field.is_active());
    }

    #[test]
    fn test_bell_only_for_win_when_enabled() {
        let mut quiet = ParticleField::seeded(false, 3);
        assert_eq!(quiet.play(Cue::Win), EffectStatus::Unavailable);
        assert_eq!(quiet.take_bells(), 0);

        let mut loud = ParticleField::seeded(true, 3);
        assert_eq!(loud.play(Cue::Click), EffectStatus::Unavailable);
        assert_eq!(loud.play(Cue::Win), EffectStatus::Played);
        assert_eq!(loud.take_bells(), 1);
        assert_eq!(loud.take_bells(), 0);
    }
}
