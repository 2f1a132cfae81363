//! MovementKind - direction of a stock movement

use serde::{Deserialize, Serialize};

/// Direction of a stock movement: goods entering or leaving the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Entry,
    Exit,
}

impl MovementKind {
    /// Apply this movement to a current quantity.
    ///
    /// Returns `None` when an exit would drive the quantity below zero -
    /// the caller decides how to surface that.
    pub fn apply(&self, current: u32, amount: u32) -> Option<u32> {
        match self {
            MovementKind::Entry => current.checked_add(amount),
            MovementKind::Exit => current.checked_sub(amount),
        }
    }

    /// Label used in reports, matching the store's language
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Entry => "Entrada",
            MovementKind::Exit => "Saída",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
