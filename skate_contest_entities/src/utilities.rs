use rand::Rng;
use uuid::Uuid;

/// Draws a v4 uuid from `rng` instead of the global generator, so that
/// seeded generators reproduce identifiers too.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
