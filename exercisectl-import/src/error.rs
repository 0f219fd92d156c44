use exercisectl_core::CatalogError;
use thiserror::Error;

/// Errors surfaced by an import run
#[derive(Debug, Error)]
pub enum ImportError {
    /// Source document problems and unknown equipment
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Database unreachable or credentials rejected
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// Insert hit a unique/foreign-key/check constraint
    #[error("constraint violation ({constraint}): {source}")]
    ConstraintViolation {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl ImportError {
    /// Classify an error returned while connecting.
    pub fn connection(err: sqlx::Error) -> Self {
        Self::Connection(err)
    }
}

impl From<sqlx::Error> for ImportError {
    fn from(err: sqlx::Error) -> Self {
        let constraint = match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                Some(db.constraint().unwrap_or("unnamed").to_owned())
            }
            _ => None,
        };

        match constraint {
            Some(constraint) => Self::ConstraintViolation {
                constraint,
                source: err,
            },
            None => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_pass_through() {
        let err: ImportError = CatalogError::unknown_equipment("trampoline", 7).into();
        assert!(matches!(
            err,
            ImportError::Catalog(CatalogError::UnknownEquipment { index: 7, .. })
        ));
        assert_eq!(
            err.to_string(),
            "Unknown equipment 'trampoline' for exercise at index 7"
        );
    }

    #[test]
    fn non_database_sqlx_errors_are_generic() {
        let err: ImportError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ImportError::Database(_)));
    }

    #[test]
    fn connection_errors_keep_their_kind() {
        let err = ImportError::connection(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("database connection failed"));
    }
}
