//! Lock-aware randomization and curated-set application.
//!
//! All randomness goes through [`RandomSource`]. Unlocked fields are drawn in
//! [`LockField::ALL`] order, one draw per unlocked field, so a deterministic
//! source fully determines the result.

use crate::catalog::{Catalog, CuratedSet};
use crate::models::{
    ButtonStyle, CardStyle, Density, ExportSession, ExportState, InputStyle, LockField,
    ModalStyle, Mood, NavStyle,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seeds from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeds deterministically.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from `seed` when given, otherwise from entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// [`RandomSource`] replaying a fixed, cycling sequence of indices.
///
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    /// Creates a source from the given values. An empty list always yields 0.
    #[must_use]
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.position % self.values.len()]
        };
        self.position += 1;
        value % len
    }
}

fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, domain: &'a [T]) -> &'a T {
    let index = rng.next_index(domain.len());
    &domain[index % domain.len()]
}

/// Returns a new state where every unlocked field is redrawn from its
/// domain and every locked field is copied unchanged.
///
/// The curated-set marker is always cleared.
#[must_use]
pub fn randomize<R: RandomSource + ?Sized>(
    state: &ExportState,
    catalog: &Catalog,
    rng: &mut R,
) -> ExportState {
    let mut next = state.clone();

    for field in LockField::ALL {
        if state.locks.is_locked(field) {
            continue;
        }

        match field {
            LockField::Color => next.colors = pick(rng, catalog.palette()).clone(),
            LockField::Font => next.font = pick(rng, catalog.fonts()).clone(),
            LockField::Density => next.density = *pick(rng, Density::ALL),
            LockField::Mood => next.mood = *pick(rng, Mood::ALL),
            LockField::Buttons => next.button_style = *pick(rng, ButtonStyle::ALL),
            LockField::Cards => next.card_style = *pick(rng, CardStyle::ALL),
            LockField::Inputs => next.input_style = *pick(rng, InputStyle::ALL),
            LockField::Navigation => next.nav_style = *pick(rng, NavStyle::ALL),
            LockField::Modals => next.modal_style = *pick(rng, ModalStyle::ALL),
        }
    }

    next.curated_set = None;
    next
}

/// Applies a curated set as one bulk assignment.
///
/// Locks are not consulted: every bundle field and all three colors are
/// overwritten. The lock flags themselves are kept and the set's id is
/// recorded as the curated-set marker.
#[must_use]
pub fn apply_curated_set(state: &ExportState, set: &CuratedSet) -> ExportState {
    ExportState {
        colors: set.colors.clone(),
        font: set.font.clone(),
        density: set.density,
        mood: set.mood,
        button_style: set.button_style,
        card_style: set.card_style,
        input_style: set.input_style,
        nav_style: set.nav_style,
        modal_style: set.modal_style,
        curated_set: Some(set.id.clone()),
        ..state.clone()
    }
}

/// Generates an `adjective-noun` project name.
pub fn generate_project_name<R: RandomSource + ?Sized>(catalog: &Catalog, rng: &mut R) -> String {
    let adjective = pick(rng, catalog.project_adjectives());
    let noun = pick(rng, catalog.project_nouns());
    format!("{adjective}-{noun}")
}

/// Starts an export session with catalog defaults and a fresh project name.
pub fn new_session<R: RandomSource + ?Sized>(catalog: &Catalog, rng: &mut R) -> ExportSession {
    let mut state = ExportState::with_name(generate_project_name(catalog, rng));
    state.template_id.clone_from(&catalog.default_template().id);
    state.style_id.clone_from(&catalog.default_style().id);
    state.colors = catalog.default_colors().clone();

    ExportSession {
        state,
        view: Default::default(),
    }
}
