//! Task state and derivation engine for a personal task tracker.
//!
//! Two cooperating pieces: the [`model::TaskStore`] owns the canonical
//! ordered task collection and the current view parameters (status filter,
//! search query), and the pure functions in [`ops`] derive the visible list
//! and productivity stats (counts, streak, achievements) from that
//! collection. Derived values are recomputed on every read; nothing is
//! cached or persisted.
//!
//! [`session`] gates the store behind a logged-in session: authentication
//! happens in an external collaborator, which hands the engine a
//! [`session::UserProfile`]. Rendering is likewise external — collaborators
//! query the engine after each mutation; nothing is pushed.

pub mod model;
pub mod ops;
pub mod quotes;
pub mod session;
