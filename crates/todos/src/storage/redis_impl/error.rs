//! Redis error mapping to StoreError.

use todos_core::storage::StoreError;

/// Maps Redis errors to StoreError.
pub fn map_redis_error(err: redis::RedisError) -> StoreError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        StoreError::ConnectionFailed(err.to_string())
    } else {
        StoreError::OperationFailed(err.to_string())
    }
}

/// Map a client setup error to StoreError.
pub fn map_connection_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::ConnectionFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_connection_maps_to_connection_failed() {
        let err = redis::RedisError::from(std::io::Error::from(
            std::io::ErrorKind::ConnectionRefused,
        ));
        assert!(matches!(
            map_redis_error(err),
            StoreError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_type_error_maps_to_operation_failed() {
        let err = redis::RedisError::from((redis::ErrorKind::TypeError, "WRONGTYPE"));
        assert!(matches!(map_redis_error(err), StoreError::OperationFailed(_)));
    }

    #[test]
    fn test_connection_error_keeps_message() {
        assert_eq!(
            map_connection_error("invalid URL"),
            StoreError::ConnectionFailed("invalid URL".to_string())
        );
    }
}
