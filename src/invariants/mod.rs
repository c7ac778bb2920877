//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout a
//! session. They are checked after every applied move in debug builds
//! and are testable independently.

mod alternating_turn;
mod history_consistent;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;

use crate::engine::GameEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants every engine state must satisfy.
pub type EngineInvariants = (AlternatingTurn, HistoryConsistent);

/// Panics on invariant violation. Debug builds only.
pub(crate) fn assert_all(engine: &GameEngine) {
    #[cfg(debug_assertions)]
    if let Err(violations) = EngineInvariants::check_all(engine) {
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        panic!("engine invariants violated: {}", descriptions.join("; "));
    }
    #[cfg(not(debug_assertions))]
    let _ = engine;
}
