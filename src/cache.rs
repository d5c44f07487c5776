use std::collections::{BTreeMap, VecDeque};

use crate::BlockBuf;

/// A whole-block read cache keyed by `(disk, block)`.
///
/// Holds at most `capacity` blocks and evicts the least recently used
/// entry when full. Lookups and inserts refresh recency. The cache only
/// ever stores complete blocks; reconciling block alignment with a
/// caller's byte-precise request is the translation layer's job.
pub struct BlockCache {
    capacity: usize,
    map: BTreeMap<(u32, u32), BlockBuf>,
    lru: VecDeque<(u32, u32)>,
    hits: u64,
    queries: u64,
}

impl BlockCache {
    /// Create a cache holding `capacity` blocks, clamped to at least two
    pub fn new(capacity: usize) -> BlockCache {
        BlockCache {
            capacity: capacity.max(2),
            map: BTreeMap::new(),
            lru: VecDeque::new(),
            hits: 0,
            queries: 0,
        }
    }

    pub fn lookup(&mut self, disk: u32, block: u32) -> Option<&BlockBuf> {
        self.queries += 1;
        let key = (disk, block);
        if self.map.contains_key(&key) {
            self.hits += 1;
            touch(&mut self.lru, key);
            self.map.get(&key)
        } else {
            None
        }
    }

    pub fn insert(&mut self, disk: u32, block: u32, buffer: &BlockBuf) {
        let key = (disk, block);
        if self.map.len() >= self.capacity && !self.map.contains_key(&key) {
            if let Some(old) = self.lru.pop_front() {
                self.map.remove(&old);
            }
        }
        self.map.insert(key, *buffer);
        touch(&mut self.lru, key);
    }

    /// Drop the entry for `(disk, block)` if present. The write path uses
    /// this so a dirtied block is never served stale from the cache.
    pub fn invalidate(&mut self, disk: u32, block: u32) {
        let key = (disk, block);
        if self.map.remove(&key).is_some() {
            if let Some(pos) = self.lru.iter().position(|k| *k == key) {
                self.lru.remove(pos);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Fraction of lookups that hit, 0.0 before the first lookup
    pub fn hit_rate(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.hits as f64 / self.queries as f64
        }
    }
}

fn touch(lru: &mut VecDeque<(u32, u32)>, key: (u32, u32)) {
    if let Some(pos) = lru.iter().position(|k| *k == key) {
        lru.remove(pos);
    }
    lru.push_back(key);
}
