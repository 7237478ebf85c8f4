//! Shared test infrastructure for pelican-crossing integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pelican_crossing::{CrossingController, LampDriver, LampOutputs, TickRate};

// ============================================================================
// Mock Lamps
// ============================================================================

/// Mock lamp driver that records every write for testing
pub struct MockLamps {
    outputs: LampOutputs,
    history: heapless::Vec<LampOutputs, 64>,
}

impl MockLamps {
    pub fn new() -> Self {
        Self {
            outputs: LampOutputs::ALL_OFF,
            history: heapless::Vec::new(),
        }
    }

    /// The outputs as last written by the controller.
    pub fn outputs(&self) -> LampOutputs {
        self.outputs
    }

    /// Every write the controller made, in order.
    pub fn history(&self) -> &[LampOutputs] {
        &self.history
    }

    /// Number of writes in which `lamp` differs from the write before it.
    pub fn toggle_count(&self, lamp: fn(&LampOutputs) -> bool) -> usize {
        self.history
            .windows(2)
            .filter(|pair| lamp(&pair[0]) != lamp(&pair[1]))
            .count()
    }
}

impl LampDriver for MockLamps {
    fn set_outputs(&mut self, outputs: LampOutputs) {
        self.outputs = outputs;
        let _ = self.history.push(outputs);
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Creates a controller over mock lamps at the 250 ms reference rate.
pub fn reference_controller() -> CrossingController<MockLamps> {
    CrossingController::new(MockLamps::new(), TickRate::DEFAULT)
}

/// Advances `ticks` timer periods, evaluating `evals_per_tick` times after
/// each tick the way the main loop outpaces the timer.
pub fn run_ticks(ctrl: &mut CrossingController<MockLamps>, ticks: u32, evals_per_tick: u32) {
    for _ in 0..ticks {
        ctrl.advance_tick();
        for _ in 0..evals_per_tick {
            ctrl.evaluate();
        }
    }
}
