use crate::orbit::{WAVEFORM_AMPLITUDE_MAX, WAVEFORM_REFRESH, WAVEFORM_SAMPLES};
use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shared amplitude buffer behind the pivot's waveform ring. Cloning yields
/// another handle to the same samples, so the refresh task can write while
/// the session reads.
#[derive(Debug, Clone)]
pub struct WaveformBuffer(Arc<Mutex<[f64; WAVEFORM_SAMPLES]>>);

impl Default for WaveformBuffer {
    fn default() -> Self {
        Self(Arc::new(Mutex::new([0.0; WAVEFORM_SAMPLES])))
    }
}

impl WaveformBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> [f64; WAVEFORM_SAMPLES] {
        *self.0.lock()
    }

    /// Replaces every sample with a uniform value in [0, 100). Cosmetic
    /// stand-in for a real audio envelope.
    pub fn regenerate(&self) {
        let mut rng = rand::thread_rng();
        for sample in self.0.lock().iter_mut() {
            *sample = rng.gen_range(0.0..WAVEFORM_AMPLITUDE_MAX);
        }
    }
}

/// Owns the periodic refresh task for a [`WaveformBuffer`]. The task runs
/// only between `start` and `stop`; both are idempotent, and `stop` aborts
/// any pending tick so no refresh lands after deactivation.
#[derive(Debug, Default)]
pub struct WaveformSimulator {
    task: Option<JoinHandle<()>>,
}

impl WaveformSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn start(&mut self, buffer: WaveformBuffer) {
        if self.task.is_some() {
            return;
        }
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(WAVEFORM_REFRESH);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                buffer.regenerate();
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for WaveformSimulator {
    // A session torn down mid-simulation must not leak the refresh task.
    fn drop(&mut self) {
        self.stop();
    }
}
