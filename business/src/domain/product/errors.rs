#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.unknown_category")]
    UnknownCategory,
    #[error("product.not_found")]
    NotFound,
    /// The product is still referenced by other records and cannot be removed.
    #[error("product.dependent")]
    Dependent,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
