//! Step state machine for the intake flow.
//!
//! ```text
//!   CompanyInfo ──advance(valid)──▶ RepresentativeInfo ──advance(valid)──▶ Documents
//!        ▲                               │      ▲                             │
//!        └──────────retreat()────────────┘      └─────────retreat()───────────┘
//! ```
//!
//! Forward moves are gated on a valid verdict for the current step; backward
//! moves never are. The controller keeps no verdicts: each step is
//! re-validated from scratch when it is re-entered.

use serde::Serialize;

use crate::domain::{entities::ValidationVerdict, value_objects::WizardStep};

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "step", rename_all = "snake_case")]
pub enum Transition {
    /// Moved forward to the given step.
    Advanced(WizardStep),
    /// Moved back to the given step.
    Retreated(WizardStep),
    /// Forward move refused; the current step's verdict had errors.
    Blocked(WizardStep),
    /// Nothing to do (back from the first step, forward from the hand-off).
    Stayed(WizardStep),
}

impl Transition {
    /// The step the controller is on after this transition.
    pub fn step(&self) -> WizardStep {
        match *self {
            Self::Advanced(step) | Self::Retreated(step) | Self::Blocked(step) | Self::Stayed(step) => {
                step
            }
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self, Self::Advanced(_) | Self::Retreated(_))
    }
}

/// Owns the current step of one intake flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardController {
    step: WizardStep,
}

impl WizardController {
    /// A controller positioned on the first step.
    pub fn new() -> Self {
        Self {
            step: WizardStep::CompanyInfo,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Move one step forward iff `verdict` is valid.
    ///
    /// The verdict must be the current step's; refusing is silent, the
    /// caller surfaces the verdict's errors itself.
    #[must_use]
    pub fn advance(&mut self, verdict: &ValidationVerdict) -> Transition {
        if !verdict.is_valid() {
            return Transition::Blocked(self.step);
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Transition::Advanced(next)
            }
            None => Transition::Stayed(self.step),
        }
    }

    /// Move one step back. No validation gate.
    #[must_use]
    pub fn retreat(&mut self) -> Transition {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Transition::Retreated(previous)
            }
            None => Transition::Stayed(self.step),
        }
    }

    /// True once both engine steps have passed and the flow belongs to the
    /// document-upload stage.
    pub fn is_ready_for_handoff(&self) -> bool {
        self.step.is_external()
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
