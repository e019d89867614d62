/// Mapping of `SQLx` errors onto the catalog error taxonomy
use sqlx::error::ErrorKind;
use vidshelf_core::ShelfError;

/// Classify a failed statement against `entity`/`key`
///
/// Primary-key and unique violations become `DuplicateKey`, foreign-key
/// violations become `NotFound` (the referenced row does not exist), anything
/// else is a `StorageFailure`.
pub fn classify(err: sqlx::Error, entity: &str, key: &str) -> ShelfError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return ShelfError::duplicate_key(entity, key),
            ErrorKind::ForeignKeyViolation => return ShelfError::not_found(entity, key),
            _ => {}
        }
    }
    ShelfError::from(err)
}
