//! Repository error taxonomy.
//!
//! Store failures are translated in one place: constraint violations become
//! typed kinds (matched on the violated constraint's name where one table
//! has several), "no rows" becomes [`ErrorKind::NotFound`], and everything
//! else is kept as [`ErrorKind::Unknown`] with the original `sqlx` error
//! attached. Each public repository method tags the kind with its own
//! operation name.

use sqlx::error::{DatabaseError, ErrorKind as ViolationKind};
use thiserror::Error;

/// Constraint names the classifier keys on. They must match the migrations.
pub mod constraint {
    /// `products.category_id` references `product_categories.id`.
    pub const PRODUCT_CATEGORY_FK: &str = "products_category_id_fkey";
    /// `orders.status` is one of the `OrderStatus` literals.
    pub const ORDER_STATUS_CHECK: &str = "orders_status_check";
    /// `orders.pickup_method` is one of the `PickupMethod` literals.
    pub const ORDER_PICKUP_METHOD_CHECK: &str = "orders_pickup_method_check";
}

/// What went wrong, independent of which operation failed.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A uniqueness constraint was violated.
    #[error("already exists")]
    AlreadyExists,

    /// No row matched, on a read or on a write that affected zero rows.
    #[error("not found")]
    NotFound,

    /// The order status is not one the store accepts.
    #[error("invalid order status")]
    InvalidStatus,

    /// The pickup method is not one the store accepts.
    #[error("invalid pickup method")]
    InvalidPickupMethod,

    /// The referenced product category does not exist.
    #[error("no such product category")]
    NoCategory,

    /// Any other store failure, including lost connectivity.
    #[error("database error: {0}")]
    Unknown(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ErrorKind {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }
        if let sqlx::Error::Database(db_err) = &err
            && let Some(kind) = classify_violation(db_err.as_ref())
        {
            return kind;
        }
        Self::Unknown(err)
    }
}

fn classify_violation(db_err: &dyn DatabaseError) -> Option<ErrorKind> {
    match (db_err.kind(), db_err.constraint()) {
        (ViolationKind::UniqueViolation, _) => Some(ErrorKind::AlreadyExists),
        (ViolationKind::ForeignKeyViolation, Some(constraint::PRODUCT_CATEGORY_FK)) => {
            Some(ErrorKind::NoCategory)
        }
        (ViolationKind::CheckViolation, Some(constraint::ORDER_STATUS_CHECK)) => {
            Some(ErrorKind::InvalidStatus)
        }
        (ViolationKind::CheckViolation, Some(constraint::ORDER_PICKUP_METHOD_CHECK)) => {
            Some(ErrorKind::InvalidPickupMethod)
        }
        _ => None,
    }
}

/// A failed repository operation.
///
/// Displays as `"<operation>: <kind>"`, e.g. `products.update_category: no
/// such product category`.
#[derive(Debug, Error)]
#[error("{operation}: {kind}")]
pub struct RepositoryError {
    operation: &'static str,
    #[source]
    kind: ErrorKind,
}

impl RepositoryError {
    /// Attach an operation name to an error kind.
    #[must_use]
    pub const fn new(operation: &'static str, kind: ErrorKind) -> Self {
        Self { operation, kind }
    }

    /// Shorthand for a [`ErrorKind::NotFound`] failure.
    #[must_use]
    pub const fn not_found(operation: &'static str) -> Self {
        Self::new(operation, ErrorKind::NotFound)
    }

    /// Name of the failing operation, e.g. `orders.update_status`.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The classified cause.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume the error, keeping only the classified cause.
    #[must_use]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Whether no matching row existed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }
}

/// Tag a fallible store call with the operation it belongs to.
pub(crate) trait ResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T, RepositoryError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ErrorKind>,
{
    fn during(self, operation: &'static str) -> Result<T, RepositoryError> {
        self.map_err(|err| RepositoryError::new(operation, err.into()))
    }
}
