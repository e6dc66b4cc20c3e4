//! Scenario test wiring for the game session.


/// Shared imports for game scenario tests.
mod support {
    pub(super) use super::super::test_support::*;
    pub(super) use super::super::*;
}
