use crate::domain::errors::DomainError;

/// Every storage failure on the read path means the content store could not
/// answer; absent rows are reported as `None` by the repositories instead.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_a_persistence_failure() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(msg) if msg.contains("timed out")
        ));
    }

    #[test]
    fn every_read_failure_is_a_persistence_failure() {
        for err in [
            sqlx::Error::RowNotFound,
            sqlx::Error::PoolClosed,
            sqlx::Error::ColumnNotFound("langcode".into()),
        ] {
            assert!(matches!(map_sqlx(err), DomainError::Persistence(_)));
        }
    }
}
