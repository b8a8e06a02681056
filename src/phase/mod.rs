//! Phase tables: which marker selects which operand and transform.
//!
//! A [`Vocabulary`] is an ordered list of [`Phase`]s. Classification walks the
//! list in declared order and the first marker contained in the message wins,
//! so a marker that is a substring of another must be declared after it.

mod builtin;

use std::borrow::Cow;

use crate::error::ConfigError;
use crate::transform::Transform;

pub use builtin::{MATRIX_SHIFT, STAGES};

/// Where a phase takes its operand from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// The single-quoted literal embedded in the prompt.
    Quoted,
    /// A literal known in advance; the prompt carries none.
    Fixed(Cow<'static, str>),
}

/// What the dispatcher does once a phase has matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseAction {
    /// Transform the operand and reply with the result.
    Respond { operand: Operand, transform: Transform },
    /// Reply with the quoted unlock keyword; the next message carries the flag.
    Claim,
    /// This message carries the flag itself.
    Capture,
}

/// One round of the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    marker: Cow<'static, str>,
    action: PhaseAction,
}

impl Phase {
    /// A phase that transforms the quoted payload of its prompt.
    pub fn quoted(marker: impl Into<Cow<'static, str>>, transform: Transform) -> Self {
        Self {
            marker: marker.into(),
            action: PhaseAction::Respond {
                operand: Operand::Quoted,
                transform,
            },
        }
    }

    /// A phase that transforms a fixed operand.
    pub fn fixed(
        marker: impl Into<Cow<'static, str>>,
        operand: impl Into<Cow<'static, str>>,
        transform: Transform,
    ) -> Self {
        Self {
            marker: marker.into(),
            action: PhaseAction::Respond {
                operand: Operand::Fixed(operand.into()),
                transform,
            },
        }
    }

    /// The terminal acknowledgment that asks for the unlock keyword.
    pub fn claim(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            marker: marker.into(),
            action: PhaseAction::Claim,
        }
    }

    /// A terminal phase whose own message holds the flag.
    pub fn capture(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            marker: marker.into(),
            action: PhaseAction::Capture,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn action(&self) -> &PhaseAction {
        &self.action
    }

    pub fn matches(&self, msg: &str) -> bool {
        msg.contains(self.marker.as_ref())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.action, PhaseAction::Claim | PhaseAction::Capture)
    }
}

/// Closed, ordered set of phases for one protocol variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    name: Cow<'static, str>,
    phases: Vec<Phase>,
}

impl Vocabulary {
    /// Build a custom vocabulary. Phases are matched in the order given.
    pub fn new(name: impl Into<Cow<'static, str>>, phases: Vec<Phase>) -> Result<Self, ConfigError> {
        let name = name.into();
        if phases.is_empty() {
            return Err(ConfigError::EmptyVocabulary(name.into_owned()));
        }
        if phases.iter().any(|p| p.marker.is_empty()) {
            return Err(ConfigError::EmptyMarker {
                vocabulary: name.into_owned(),
            });
        }
        Ok(Self { name, phases })
    }

    /// The first protocol variant: numbered stages with fixed operands.
    pub fn stages() -> Self {
        builtin::stages()
    }

    /// The second protocol variant: named phases with quoted operands.
    pub fn matrix_shift() -> Self {
        builtin::matrix_shift()
    }

    /// Look up a built-in vocabulary by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            STAGES => Some(Self::stages()),
            MATRIX_SHIFT => Some(Self::matrix_shift()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// First phase whose marker occurs in `msg`.
    pub fn classify(&self, msg: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.matches(msg))
    }
}
