//! Garbage collector

use super::memory::Heap;
use std::time::Duration;

/// GC configuration
#[derive(Debug, Clone)]
pub struct GCConfig {
    /// Initial heap size
    pub initial_heap_size: usize,
    /// Maximum heap size
    pub max_heap_size: usize,
    /// Young generation ratio
    pub young_ratio: f64,
    /// Collection threshold
    pub collection_threshold: usize,
    /// Maximum pause time
    pub max_pause: Duration,
}

impl Default for GCConfig {
    fn default() -> Self {
        Self {
            initial_heap_size: 16 * 1024 * 1024,
            max_heap_size: 256 * 1024 * 1024,
            young_ratio: 0.5,
            collection_threshold: 1024 * 1024,
            max_pause: Duration::from_millis(10),
        }
    }
}

/// GC state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GCState {
    Idle,
    Marking,
    Sweeping,
    Paused,
}

/// Garbage collector
#[derive(Debug)]
pub struct GC {
    /// Configuration
    config: GCConfig,
    /// State
    state: GCState,
    /// Heap
    heap: Heap,
    /// Pause time tracking
    total_pause: Duration,
    last_pause: Duration,
}

impl GC {
    /// Create a new GC
    pub fn new(config: GCConfig) -> Self {
        Self {
            config: config.clone(),
            state: GCState::Idle,
            heap: Heap::new(),
            total_pause: Duration::ZERO,
            last_pause: Duration::ZERO,
        }
    }

    /// Collect garbage
    pub fn collect(&mut self) {
        self.state = GCState::Marking;
        // TODO: Implement mark-and-sweep
        self.state = GCState::Sweeping;
        // TODO: Implement sweeping
        self.state = GCState::Idle;
    }

    /// Check if collection is needed
    pub fn should_collect(&self) -> bool {
        // TODO: Implement collection threshold check
        false
    }

    /// Get total pause time
    pub fn total_pause(&self) -> Duration {
        self.total_pause
    }

    /// Get last pause time
    pub fn last_pause(&self) -> Duration {
        self.last_pause
    }
}

impl Default for GC {
    fn default() -> Self {
        Self::new(GCConfig::default())
    }
}
