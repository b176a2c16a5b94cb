//! Edge detection and debouncing for gate, trigger and switch readings.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Low,
    RisingEdge,
    High,
    FallingEdge,
}

#[derive(Debug, Default)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the detector so that a level already present is not reported as an edge.
    pub fn init(&mut self, level: bool) {
        self.previous = level;
    }

    #[inline]
    pub fn process(&mut self, level: bool) -> GateState {
        let state = match (self.previous, level) {
            (false, true) => GateState::RisingEdge,
            (true, true) => GateState::High,
            (true, false) => GateState::FallingEdge,
            (false, false) => GateState::Low,
        };
        self.previous = level;

        state
    }
}

/// Accepts a new level only after it has been read for `samples` consecutive cycles.
#[derive(Debug)]
pub struct Debouncer {
    samples: u32,
    count: u32,
    stable: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Debouncer {
    pub fn new(samples: u32) -> Self {
        Self {
            samples: samples.max(1),
            count: 0,
            stable: false,
        }
    }

    pub fn init(&mut self, level: bool) {
        self.stable = level;
        self.count = 0;
    }

    #[inline]
    pub fn process(&mut self, level: bool) -> bool {
        if level == self.stable {
            self.count = 0;
        } else {
            self.count += 1;
            if self.count >= self.samples {
                self.stable = level;
                self.count = 0;
            }
        }

        self.stable
    }
}
