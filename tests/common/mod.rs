//! Shared test infrastructure for button-chord integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_chord::{ButtonPins, Polarity, TimeDuration, TimeInstant, TimeSource};
use core::cell::{Cell, RefCell};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Backing state for [`MockPins`], owned by the test so levels can be driven
/// and configuration calls inspected while the decoder owns the pins.
pub struct PinState {
    pub levels: Cell<u32>,
    pub input_mask: Cell<u32>,
    pub pulls: RefCell<Vec<(u8, Polarity)>>,
}

impl PinState {
    pub fn new(idle_levels: u32) -> Self {
        Self {
            levels: Cell::new(idle_levels),
            input_mask: Cell::new(0),
            pulls: RefCell::new(Vec::new()),
        }
    }

    pub fn pins(&self) -> MockPins<'_> {
        MockPins { state: self }
    }
}

/// Mock input lines reading from and recording into a shared [`PinState`]
pub struct MockPins<'a> {
    state: &'a PinState,
}

impl ButtonPins for MockPins<'_> {
    fn read_lines(&self) -> u32 {
        self.state.levels.get()
    }

    fn set_input_lines(&mut self, mask: u32) {
        self.state.input_mask.set(mask);
    }

    fn set_pull(&mut self, line: u8, polarity: Polarity) {
        self.state.pulls.borrow_mut().push((line, polarity));
    }
}
