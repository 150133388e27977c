//! Access decisions for guarded routes.
//!
//! The decision is a pure function of the session state so it can be
//! checked without a renderer; the layout components in `routes` apply it.

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Only signed-in users may enter.
    Authenticated,
    /// Only signed-out users may enter.
    GuestOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

pub fn evaluate(kind: GuardKind, is_authenticated: bool) -> GuardDecision {
    match (kind, is_authenticated) {
        (GuardKind::Authenticated, true) | (GuardKind::GuestOnly, false) => GuardDecision::Allow,
        (GuardKind::Authenticated, false) => GuardDecision::Redirect(Route::Login {}),
        (GuardKind::GuestOnly, true) => GuardDecision::Redirect(Route::Dashboard {}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn authenticated_guard() {
        assert_eq!(evaluate(GuardKind::Authenticated, true), GuardDecision::Allow);
        assert_eq!(
            evaluate(GuardKind::Authenticated, false),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    #[test]
    fn guest_only_guard() {
        assert_eq!(evaluate(GuardKind::GuestOnly, false), GuardDecision::Allow);
        assert_eq!(
            evaluate(GuardKind::GuestOnly, true),
            GuardDecision::Redirect(Route::Dashboard {})
        );
    }
}
