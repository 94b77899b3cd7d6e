/// Document identifiers are UUID v7, so generation order is insertion order.
pub type DocumentId = uuid::Uuid;

/// Generate a fresh document identifier.
pub fn new_document_id() -> DocumentId {
    uuid::Uuid::now_v7()
}
