//! Simulated break-beam sensor.
//!
//! There is no hardware behind this: a background thread draws a random number every
//! poll interval and reports a detection when the draw is a multiple of
//! [`BEAM_TRIGGER_MODULUS`]. Detections travel to the UI thread over a channel.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::constants::*;

/// Something crossed the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection;

pub fn is_trigger(value: u32) -> bool {
    value > 0 && value % BEAM_TRIGGER_MODULUS == 0
}

pub struct BreakBeam<R: Rng = StdRng> {
    rng: R,
    interval: Duration,
}

impl BreakBeam<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng(), Duration::from_millis(BEAM_POLL_INTERVAL_MS))
    }
}

impl<R: Rng> BreakBeam<R> {
    pub fn with_rng(rng: R, interval: Duration) -> Self {
        Self { rng, interval }
    }

    /// One draw of the simulated sensor.
    pub fn poll(&mut self) -> Option<Detection> {
        let value = self.rng.random_range(1..=BEAM_MAX_VALUE);
        trace!(value, "beam:draw");
        is_trigger(value).then_some(Detection)
    }

    /// Polls forever on a new thread. The thread ends once the receiver is dropped.
    pub fn spawn(mut self, tx: Sender<Detection>) -> JoinHandle<()>
    where
        R: Send + 'static,
    {
        thread::spawn(move || {
            loop {
                thread::sleep(self.interval);
                if let Some(detection) = self.poll() {
                    debug!("beam:detection");
                    if tx.send(detection).is_err() {
                        debug!("beam:receiver gone, stopping");
                        break;
                    }
                }
            }
        })
    }
}
