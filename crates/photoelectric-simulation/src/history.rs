//! Rolling record of (frequency, current) samples for the strip chart

use std::collections::VecDeque;

/// Samples retained before the oldest is evicted
pub const GRAPH_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphSample {
    pub frequency: f64,
    pub current: f64,
}

/// Bounded FIFO of the most recent samples, oldest first
#[derive(Debug, Clone, Default)]
pub struct GraphHistory {
    samples: VecDeque<GraphSample>,
}

impl GraphHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(GRAPH_HISTORY_CAPACITY + 1),
        }
    }

    pub fn push(&mut self, sample: GraphSample) {
        self.samples.push_back(sample);
        while self.samples.len() > GRAPH_HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&GraphSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphSample> + '_ {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> GraphSample {
        GraphSample {
            frequency: i as f64,
            current: i as f64 * 2.0,
        }
    }

    #[test]
    fn test_capped_at_capacity() {
        let mut history = GraphHistory::new();
        for i in 0..200 {
            history.push(sample(i));
            assert!(history.len() <= GRAPH_HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), GRAPH_HISTORY_CAPACITY);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = GraphHistory::new();
        for i in 0..GRAPH_HISTORY_CAPACITY {
            history.push(sample(i));
        }
        assert_eq!(history.iter().next(), Some(&sample(0)));

        history.push(sample(GRAPH_HISTORY_CAPACITY));
        assert_eq!(history.len(), GRAPH_HISTORY_CAPACITY);
        assert_eq!(history.iter().next(), Some(&sample(1)));
        assert_eq!(history.latest(), Some(&sample(GRAPH_HISTORY_CAPACITY)));
    }
}
