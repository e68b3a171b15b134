use laresa_core::repository::IdGenerator;
use uuid::Uuid;

/// Time-ordered ids (UUID version 7).
///
/// Ids created later in the same process compare greater, both as UUIDs
/// and as their hyphenated string form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
