//! Navigation logic for treenav.
//!
//! This module contains the [`state::NavigationState`] cursor, its
//! back/forward [`history::History`], and listing [`filter`]ing/sorting
//! (including fuzzy quick-filter).

pub mod filter;
pub mod history;
pub mod state;
