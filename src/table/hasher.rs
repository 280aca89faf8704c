//! Внешняя хеш-функция таблицы.
//!
//! Таблица не вычисляет хеш сама: индекс бакета поставляет
//! отдельная стратегия `BucketHasher`. Это позволяет подменять
//! функцию в тестах (например, константной, чтобы загнать все
//! ключи в одну цепочку) без изменения самой таблицы.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Стратегия отображения ключа в индекс бакета.
///
/// **КОНТРАКТ:** результат детерминирован для пары `(key, capacity)`
/// и всегда лежит в диапазоне `[0, capacity)`. Корректность таблицы
/// зависит только от этих двух свойств; от качества распределения
/// зависит лишь длина цепочек.
pub trait BucketHasher {
    fn bucket(
        &self,
        key: i64,
        capacity: usize,
    ) -> usize;
}

/// Хеш-функция по умолчанию: `DefaultHasher` по ключу, затем
/// остаток от деления на ёмкость.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultBucketHasher;

impl BucketHasher for DefaultBucketHasher {
    fn bucket(
        &self,
        key: i64,
        capacity: usize,
    ) -> usize {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        (h.finish() % capacity as u64) as usize
    }
}
