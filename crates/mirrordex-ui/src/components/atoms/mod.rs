//! Shared UI atoms used across the views.

pub(crate) mod empty_state;
pub(crate) mod icons;

pub(crate) use empty_state::EmptyState;
