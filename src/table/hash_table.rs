//! Цепочечная хеш-таблица с ростом по порогу load factor.
//!
//! Ключи фиксированы как `i64`, значения как `String`. Коллизии
//! разрешаются цепочками внутри бакетов; при достижении порога
//! заполненности таблица целиком перестраивается в увеличенный
//! набор бакетов.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{TableError, TableResult},
    table::hasher::{BucketHasher, DefaultBucketHasher},
};

/// Множитель ёмкости при росте таблицы.
const GROWTH_COEFFICIENT: usize = 2;

/// Одна пара (ключ, значение) в цепочке бакета.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
struct Entry {
    key: i64,
    val: String,
}

/// Хеш-таблица с раздельными цепочками.
///
/// **ИНВАРИАНТЫ:**
///
/// - каждый ключ лежит ровно в одном бакете, с индексом
///   `hasher.bucket(key, capacity)`;
/// - `len` равен суммарному числу элементов во всех бакетах;
/// - сразу после каждой вставки `len / capacity < load_factor`;
/// - ёмкость задаётся при создании, никогда не уменьшается и растёт
///   только в `GROWTH_COEFFICIENT` раз как побочный эффект вставки.
///
/// Таблица однопоточная: ни одна операция не блокируется и не
/// прерывается, внешняя синхронизация — забота вызывающего.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = "H: Default"))]
pub struct HashTable<H = DefaultBucketHasher> {
    buckets: Vec<Vec<Entry>>,
    len: usize,
    load_factor: f64,
    #[serde(skip)]
    hasher: H,
}

/// Итератор по парам `(ключ, значение)`: бакеты по порядку,
/// внутри бакета — порядок добавления. Порядок не является
/// частью контракта таблицы.
pub struct TableIter<'a> {
    buckets: &'a [Vec<Entry>],
    bucket_idx: usize,
    entry_idx: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl HashTable<DefaultBucketHasher> {
    /// Создаёт таблицу с хеш-функцией по умолчанию.
    pub fn new(
        capacity: usize,
        load_factor: f64,
    ) -> TableResult<Self> {
        Self::with_hasher(capacity, load_factor, DefaultBucketHasher)
    }
}

impl<H> HashTable<H>
where
    H: BucketHasher,
{
    /// Создаёт таблицу ёмкостью `capacity` бакетов с заданной
    /// хеш-функцией.
    ///
    /// Возвращает `InvalidCapacity` при нулевой ёмкости и
    /// `InvalidLoadFactor`, если порог вне диапазона `(0.0, 1.0]`.
    pub fn with_hasher(
        capacity: usize,
        load_factor: f64,
        hasher: H,
    ) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }

        // NaN не проходит ни одно из сравнений.
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(TableError::InvalidLoadFactor { load_factor });
        }

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Ok(HashTable {
            buckets,
            len: 0,
            load_factor,
            hasher,
        })
    }

    /// Возвращает `Some(&str)` для указанного ключа или `None`.
    pub fn get(
        &self,
        key: i64,
    ) -> Option<&str> {
        let slot = self.bucket_index(key);

        self.buckets[slot]
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.val.as_str())
    }

    /// Вставляет пару `(key, val)`. Если ключ уже есть — обновляет
    /// значение на месте и возвращает `false`.
    ///
    /// Рост проверяется только после новой вставки: обновление
    /// значения не меняет заполненность.
    pub fn insert(
        &mut self,
        key: i64,
        val: String,
    ) -> bool {
        let slot = self.bucket_index(key);

        for e in &mut self.buckets[slot] {
            if e.key == key {
                e.val = val;
                return false;
            }
        }

        self.buckets[slot].push(Entry { key, val });
        self.len += 1;

        // При очень низком пороге одного удвоения может не хватить,
        // поэтому растём, пока заполненность не опустится ниже порога.
        while self.len as f64 / self.buckets.len() as f64 >= self.load_factor {
            self.grow();
        }

        true
    }

    /// Удаляет ключ и возвращает его значение, `None` — если ключа
    /// не было. Ёмкость при удалении не уменьшается.
    pub fn remove(
        &mut self,
        key: i64,
    ) -> Option<String> {
        let slot = self.bucket_index(key);
        let pos = self.buckets[slot].iter().position(|e| e.key == key)?;

        let entry = self.buckets[slot].remove(pos);
        self.len -= 1;

        Some(entry.val)
    }

    /// Возвращает `true`, если ключ присутствует в таблице.
    pub fn contains_key(
        &self,
        key: i64,
    ) -> bool {
        self.get(key).is_some()
    }

    /// Возвращает количество хранимых ключей.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Возвращает `true`, если таблица пуста.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Возвращает текущее число бакетов.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Возвращает настроенный порог load factor (константа после
    /// создания).
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Возвращает множество всех ключей, каждый ровно один раз.
    pub fn keys(&self) -> HashSet<i64> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Возвращает все значения, по одному на элемент; дубликаты
    /// значений у разных ключей сохраняются.
    pub fn values(&self) -> Vec<&str> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Возвращает итератор по парам `(ключ, значение)`.
    pub fn iter(&self) -> TableIter<'_> {
        TableIter {
            buckets: &self.buckets,
            bucket_idx: 0,
            entry_idx: 0,
        }
    }

    /// Индекс бакета для ключа при текущей ёмкости.
    #[inline]
    fn bucket_index(
        &self,
        key: i64,
    ) -> usize {
        self.hasher.bucket(key, self.buckets.len())
    }

    /// Перестраивает таблицу в `GROWTH_COEFFICIENT` раз больше:
    /// строит новый набор бакетов и переносит в него все элементы,
    /// перехешируя каждый ключ под новую ёмкость. Старые бакеты
    /// отбрасываются целиком, чтобы старые и новые индексы не
    /// пересекались во время переноса.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * GROWTH_COEFFICIENT;

        let mut new_buckets = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, Vec::new);

        let old_buckets = std::mem::replace(&mut self.buckets, new_buckets);

        for bucket in old_buckets {
            for entry in bucket {
                let slot = self.hasher.bucket(entry.key, new_capacity);
                self.buckets[slot].push(entry);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для HashTable, TableIter
////////////////////////////////////////////////////////////////////////////////

impl<'a> Iterator for TableIter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bucket = self.buckets.get(self.bucket_idx)?;

            if let Some(entry) = bucket.get(self.entry_idx) {
                self.entry_idx += 1;
                return Some((entry.key, entry.val.as_str()));
            }

            // Цепочка исчерпана - переходим к следующему бакету.
            self.bucket_idx += 1;
            self.entry_idx = 0;
        }
    }
}

impl<'a, H> IntoIterator for &'a HashTable<H>
where
    H: BucketHasher,
{
    type Item = (i64, &'a str);
    type IntoIter = TableIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
