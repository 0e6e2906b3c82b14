//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: anonymous visitors go
//! to `/login`, and signed-in users on a page meant for another role go to
//! their own landing route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where an auth state should be sent from a page, if anywhere.
///
/// `guardian_only` pages send non-guardians to their own home route.
#[must_use]
pub fn redirect_target(state: &AuthState, guardian_only: bool) -> Option<&'static str> {
    if state.should_redirect_unauth() {
        return Some("/login");
    }
    match &state.user {
        Some(user) if guardian_only && !user.is_guardian() => Some(user.home_route()),
        _ => None,
    }
}

/// Redirect whenever auth has loaded and the visitor does not belong here.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, guardian_only: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get(), guardian_only) {
            navigate(target, NavigateOptions::default());
        }
    });
}
