//! # Gate Ring
//!
//! Scoring checkpoints. Each gate pays out once, then disappears from the
//! active ring until the ring is regenerated from the canonical set, either
//! because every gate has been taken or because the vehicle died.

use glam::DVec2;
use tracing::debug;

use crate::error::TrackError;
use crate::geometry::Rect;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gate {
    pub region: Rect,
    pub value: i32,
}

impl Gate {
    #[must_use]
    pub const fn new(region: Rect, value: i32) -> Self {
        Self { region, value }
    }
}

/// Ordered set of active gates. Insertion order is the intended driving order
/// and also the tie-break when gate regions overlap.
#[derive(Clone, Debug)]
pub struct GateRing {
    canonical: Vec<Gate>,
    active: Vec<Gate>,
    generation: u64,
}

impl GateRing {
    /// Creates a ring whose canonical set is `gates`. The ring starts full.
    ///
    /// # Errors
    ///
    /// Fails with [`TrackError::NoGates`] when `gates` is empty,
    /// [`TrackError::DegenerateGate`] when a region cannot contain any point,
    /// and [`TrackError::DuplicateGate`] when two gates share a region.
    pub fn new(gates: Vec<Gate>) -> Result<Self, TrackError> {
        if gates.is_empty() {
            return Err(TrackError::NoGates);
        }
        for (index, gate) in gates.iter().enumerate() {
            if gate.region.is_degenerate() {
                return Err(TrackError::DegenerateGate { index, rect: gate.region });
            }
            if let Some(first) = gates[..index].iter().position(|g| g.region == gate.region) {
                return Err(TrackError::DuplicateGate { first, second: index });
            }
        }
        Ok(Self {
            active: gates.clone(),
            canonical: gates,
            generation: 0,
        })
    }

    /// Scores the first active gate containing `position`, if any.
    ///
    /// An exhausted ring is regenerated before the scan, so the ring is never
    /// observed empty by a caller that keeps driving. At most one gate is
    /// consumed per call.
    pub fn check_and_score(&mut self, position: DVec2) -> Option<i32> {
        if self.active.is_empty() {
            self.regenerate();
        }
        let index = self
            .active
            .iter()
            .position(|g| g.region.contains_point(position))?;
        let gate = self.active.remove(index);
        debug!(
            value = gate.value,
            remaining = self.active.len(),
            "gate crossed at ({:.1}, {:.1})",
            position.x,
            position.y
        );
        Some(gate.value)
    }

    /// Refills the ring with the canonical gate set.
    pub fn regenerate(&mut self) {
        self.active.clone_from(&self.canonical);
        self.generation += 1;
        debug!(generation = self.generation, gates = self.active.len(), "gate ring regenerated");
    }

    /// Gates still waiting to be crossed, in driving order.
    #[must_use]
    pub fn active(&self) -> &[Gate] {
        &self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn canonical_len(&self) -> usize {
        self.canonical.len()
    }

    /// Number of times the ring has been refilled.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
