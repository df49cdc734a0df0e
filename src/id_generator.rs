use uuid::Uuid;

use crate::item::TodoId;

// Random 128-bit ids stay unique across every collection in the process.
pub fn generate_id() -> TodoId {
    TodoId::from_uuid(Uuid::new_v4())
}
