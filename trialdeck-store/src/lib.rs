//! TrialDeck session store.
//!
//! Owns the in-memory collections for one dashboard session: seeded from
//! fixtures at startup, mutated by the create/update/toggle/sync operations,
//! and discarded when the session ends. Nothing here touches disk.

pub mod ids;
pub mod requests;
pub mod store;

pub use requests::{
    NewAgent, NewPatient, NewSite, NewTrial, UpdateAgent, UpdatePatient, UpdateSite, UpdateTrial,
};
pub use store::SessionStore;
