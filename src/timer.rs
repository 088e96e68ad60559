/// Frame-driven repeating timer. Accumulates `dt` and fires once per elapsed period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatingTimer {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl RepeatingTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: false,
        }
    }

    /// (Re)starts with a new period, discarding any time already accumulated.
    pub fn start(&mut self, period: f32) {
        self.period = period;
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when the period elapsed during this step.
    /// A frame spanning several periods still fires once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed %= self.period;
            true
        } else {
            false
        }
    }
}
