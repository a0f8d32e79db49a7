//! User repository.

use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::UserId;

use super::error::{ErrorKind, RepositoryError, ResultExt};
use crate::models::{NewUser, User};

/// A writable user column paired with its new value.
#[derive(Clone, PartialEq, Eq)]
enum UserField {
    FirstName(String),
    LastName(String),
    Password(String),
}

impl UserField {
    const fn column(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "first_name",
            Self::LastName(_) => "last_name",
            Self::Password(_) => "password",
        }
    }

    fn into_value(self) -> String {
        match self {
            Self::FirstName(value) | Self::LastName(value) | Self::Password(value) => value,
        }
    }
}

/// Repository for `users`.
///
/// Passwords are stored as given and never logged.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the email is already registered.
    /// Returns `Unknown` for other database errors.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let created = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (first_name, last_name, email, password, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, password, phone
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.phone)
        .fetch_one(self.pool)
        .await
        .during("users.create")?;

        debug!(id = %created.id, "Created user");
        Ok(created)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    pub async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        const OP: &str = "users.get_by_id";

        sqlx::query_as::<_, User>(
            r"
            SELECT id, first_name, last_name, email, password, phone
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .during(OP)?
        .ok_or_else(|| RepositoryError::not_found(OP))
    }

    /// Get a user by email address (exact match).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this email.
    pub async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        const OP: &str = "users.get_by_email";

        sqlx::query_as::<_, User>(
            r"
            SELECT id, first_name, last_name, email, password, phone
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .during(OP)?
        .ok_or_else(|| RepositoryError::not_found(OP))
    }

    async fn update_field(&self, id: UserId, field: UserField) -> Result<(), ErrorKind> {
        let sql = format!("UPDATE users SET {} = $1 WHERE id = $2", field.column());

        let result = sqlx::query(&sql)
            .bind(field.into_value())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ErrorKind::NotFound);
        }

        Ok(())
    }

    /// Change a user's first name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    #[instrument(skip(self, first_name))]
    pub async fn update_first_name(
        &self,
        id: UserId,
        first_name: &str,
    ) -> Result<(), RepositoryError> {
        self.update_field(id, UserField::FirstName(first_name.to_owned()))
            .await
            .during("users.update_first_name")
    }

    /// Change a user's last name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    #[instrument(skip(self, last_name))]
    pub async fn update_last_name(&self, id: UserId, last_name: &str) -> Result<(), RepositoryError> {
        self.update_field(id, UserField::LastName(last_name.to_owned()))
            .await
            .during("users.update_last_name")
    }

    /// Replace the stored password.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    #[instrument(skip(self, password))]
    pub async fn update_password(&self, id: UserId, password: &str) -> Result<(), RepositoryError> {
        self.update_field(id, UserField::Password(password.to_owned()))
            .await
            .during("users.update_password")
    }

    /// Delete a user along with their orders and cart.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: UserId) -> Result<bool, RepositoryError> {
        const OP: &str = "users.delete_by_id";

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        Ok(true)
    }
}
