use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

/// Ошибки конструирования таблицы. Все остальные операции тотальны:
/// отсутствие ключа выражается через `Option`, а не через ошибку.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("hash table capacity must be greater than zero (got {capacity})")]
    InvalidCapacity { capacity: usize },

    #[error("hash table load factor must be in range (0.0, 1.0] (got {load_factor})")]
    InvalidLoadFactor { load_factor: f64 },
}
