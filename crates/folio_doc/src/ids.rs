//! Block id generation

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh block ids.
///
/// Callers guarantee ids are unlikely to repeat; [`add_block`](crate::add_block)
/// still re-polls when a candidate collides with a block already on the page.
pub trait BlockIdSource {
    fn next_id(&mut self) -> String;
}

impl<F: FnMut() -> String> BlockIdSource for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Millisecond clock plus a counter, monotonic even if the wall clock steps back.
#[derive(Clone, Debug)]
pub struct ClockIds {
    prefix: String,
    last_millis: u128,
    seq: u32,
}

impl ClockIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last_millis: 0,
            seq: 0,
        }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new("block")
    }
}

impl BlockIdSource for ClockIds {
    fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if now > self.last_millis {
            self.last_millis = now;
            self.seq = 0;
        } else {
            self.seq += 1;
        }
        format!("{}-{}-{}", self.prefix, self.last_millis, self.seq)
    }
}

/// Deterministic `prefix-1`, `prefix-2`, ... ids
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl BlockIdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn clock_ids_never_repeat() {
        let mut ids = ClockIds::default();
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
        assert!(generated.iter().all(|id| id.starts_with("block-")));
    }

    #[test]
    fn sequential_ids() {
        let mut ids = SequentialIds::new("b");
        assert_eq!(ids.next_id(), "b-1");
        assert_eq!(ids.next_id(), "b-2");
    }

    #[test]
    fn closures_are_id_sources() {
        let mut n = 0;
        let mut source = || {
            n += 1;
            format!("c{n}")
        };
        assert_eq!(source.next_id(), "c1");
    }
}
