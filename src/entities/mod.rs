// Entity Models
// "Identity persists, values change"
//
// Owners are the only entity with identity across seasons: a member id
// outlives every team name that owner ever used.

pub mod owner;

pub use owner::{Owner, OwnerRegistry, UNKNOWN_OWNER};
