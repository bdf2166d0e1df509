//! Game engine - owns the session state and provides a clean API to the
//! application shell.
//!
//! The engine handles:
//! - Session state (room directory, player, clock, fuse scheduler)
//! - Input processing and movement resolution
//! - Enemy updates and bomb detonations
//!
//! The application shell only handles:
//! - Mapping raw input to logical actions
//! - Driving `tick` once per frame
//! - Rendering the snapshots the engine exposes

mod session;
mod tick;

pub use session::GameSession;
