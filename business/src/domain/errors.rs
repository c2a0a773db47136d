/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A foreign key constraint rejected the write (row still referenced,
    /// or referencing a row that does not exist).
    #[error("repository.integrity_violation")]
    IntegrityViolation,
    #[error("repository.database_error")]
    DatabaseError,
}
