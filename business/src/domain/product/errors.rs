use crate::domain::errors::RpcError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// The primary backend accepted the save but returned no product.
    #[error("is not possible to save product because it's null")]
    SaveReturnedEmpty,
    /// The primary backend accepted the update but returned no product.
    #[error("is not possible to update product because it's null")]
    UpdateReturnedEmpty,
    #[error("invalid deactivation date '{0}', expected DD-MM-YYYY HH:MM:SS")]
    InvalidDeactivationDate(String),
    #[error("price must be a finite, non-negative number within f32 range")]
    InvalidPrice,
    #[error(transparent)]
    Rpc(#[from] RpcError),
}
