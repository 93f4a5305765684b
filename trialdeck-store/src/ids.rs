//! Display id synthesis.
//!
//! New records get `{prefix}-{three random digits}` ids, matching the seeded
//! fixture shape. There is no uniqueness check; with 900 possible suffixes
//! per entity type collisions are possible and accepted for session-local
//! mock data.

use rand::Rng;
use trialdeck_core::EntityType;

/// Generate a display id for the given entity type, e.g. `TRIAL-417`.
pub fn generate_id<R: Rng>(rng: &mut R, entity_type: EntityType) -> String {
    let suffix: u32 = rng.gen_range(100..=999);
    format!("{}-{:03}", entity_type.id_prefix(), suffix)
}
