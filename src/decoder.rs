//! Chord press decoding with debounce and duration measurement.
//!
//! Provides [`ChordDecoder`] which samples a group of input lines once per
//! polling tick, absorbs contact bounce, and reports each completed
//! press-and-release cycle as a single [`PressEvent`]. Hardware access goes
//! through the [`ButtonPins`] trait, timing through the
//! [`TimeSource`](crate::TimeSource) trait.

use crate::pins::{ButtonPins, Polarity};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{LineGroup, PressEvent};

/// Debounces a group of input lines and reports chord presses.
///
/// Each decoder owns its pins and is polled from exactly one execution
/// context; no locking is needed on its state. A press is reported once, on
/// release, and only when the span from first assertion to release reached
/// the debounce duration. Lines that assert and release at slightly
/// different moments within one press are combined into a single chord
/// pattern.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `T` - Time source implementation type
pub struct ChordDecoder<'t, I: TimeInstant, P: ButtonPins, T: TimeSource<I>> {
    pins: P,
    time_source: &'t T,
    polarity: Polarity,
    internal_pulls: bool,
    debounce: I::Duration,
    group: LineGroup,
    current_pattern: u16,
    previous_pattern: u16,
    peak_pattern: u16,
    press_started_at: Option<I>,
    last_duration: I::Duration,
    pending: Option<PressEvent>,
}

impl<'t, I: TimeInstant, P: ButtonPins, T: TimeSource<I>> ChordDecoder<'t, I, P, T> {
    /// Creates a decoder over an empty line group.
    ///
    /// `debounce` is the minimum sustained press span for a release to be
    /// accepted as a genuine press. No hardware is touched until
    /// [`configure`](Self::configure) selects the monitored lines.
    pub fn new(
        pins: P,
        time_source: &'t T,
        polarity: Polarity,
        internal_pulls: bool,
        debounce: I::Duration,
    ) -> Self {
        Self {
            pins,
            time_source,
            polarity,
            internal_pulls,
            debounce,
            group: LineGroup::clamped(0, 0),
            current_pattern: 0,
            previous_pattern: 0,
            peak_pattern: 0,
            press_started_at: None,
            last_duration: I::Duration::ZERO,
            pending: None,
        }
    }

    /// Selects the monitored lines and configures them as inputs.
    ///
    /// The request is clamped to the platform bounds rather than rejected;
    /// see [`LineGroup::clamped`]. When the decoder was created with
    /// internal pull resistors, each line of the group also gets the pull
    /// matching the wiring polarity. Any in-flight press state is discarded.
    pub fn configure(&mut self, base_index: u8, line_count: u8) {
        self.group = LineGroup::clamped(base_index, line_count);
        self.pins.set_input_lines(self.group.direction_mask());
        if self.internal_pulls {
            for line in self.group.lines() {
                self.pins.set_pull(line, self.polarity);
            }
        }

        self.current_pattern = 0;
        self.previous_pattern = 0;
        self.peak_pattern = 0;
        self.press_started_at = None;
        self.pending = None;
    }

    /// Samples the lines and advances the decoder by one tick.
    ///
    /// Call this once per polling cycle, at least as often as the fastest
    /// bounce of interest. On the rising edge of the group (anything
    /// asserted after nothing was) the press start is stamped; on the
    /// falling edge (everything released) the span is measured and, if it
    /// reached the debounce duration, the peak pattern becomes the pending
    /// event. Shorter spans are discarded silently.
    pub fn tick(&mut self) {
        let now = self.time_source.now();
        self.previous_pattern = self.current_pattern;
        self.current_pattern = self.normalize(self.pins.read_lines());

        // Peak is the numerically largest pattern seen, not a bitwise
        // union; a superset chord always compares greater than its subsets.
        if self.current_pattern > self.peak_pattern {
            self.peak_pattern = self.current_pattern;
        }

        if self.current_pattern != 0 && self.previous_pattern == 0 {
            self.press_started_at = Some(now);
        } else if self.current_pattern == 0 && self.previous_pattern != 0 {
            if let Some(started) = self.press_started_at.take() {
                let held = now.duration_since(started);
                self.last_duration = held;
                if held.as_millis() >= self.debounce.as_millis() {
                    self.pending = Some(PressEvent {
                        pattern: self.peak_pattern,
                        duration_ms: held.as_millis(),
                    });
                }
            }
            self.peak_pattern = 0;
        }
    }

    /// Returns the completed press event, if one is waiting.
    ///
    /// Read-once: the event is cleared on return, and a second call before
    /// the next qualifying release yields `None`. At most one event is held;
    /// a new qualifying release overwrites an event that was never consumed.
    /// Buffering beyond that single event is the
    /// [`EventChannel`](crate::EventChannel)'s job.
    pub fn consume_pending(&mut self) -> Option<PressEvent> {
        self.pending.take()
    }

    /// Most recently measured press span in whole milliseconds.
    ///
    /// Updated on every release, including spans rejected as bounce, so it
    /// is only meaningful right after [`consume_pending`](Self::consume_pending)
    /// returned an event.
    pub fn last_duration_ms(&self) -> u64 {
        self.last_duration.as_millis()
    }

    /// Returns the clamped line group this decoder monitors.
    pub fn line_group(&self) -> LineGroup {
        self.group
    }

    /// Normalized pattern of the lines asserted at the last tick.
    pub fn current_pattern(&self) -> u16 {
        self.current_pattern
    }

    /// Returns true if any line of the group was asserted at the last tick.
    pub fn is_pressed(&self) -> bool {
        self.current_pattern != 0
    }

    /// Shifts the group down to bit 0, inverts for pull-up wiring and
    /// isolates the group's bits, so an asserted line is always a set bit.
    fn normalize(&self, raw: u32) -> u16 {
        let shifted = (raw >> self.group.base_index()) as u16;
        let levels = match self.polarity {
            Polarity::PullUp => !shifted,
            Polarity::PullDown => shifted,
        };
        levels & self.group.mask()
    }
}
