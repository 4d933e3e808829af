//! Phase timing plugin.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use eyre::Result;
use tracing::debug;

use super::{CompilationContext, Plugin};

/// Logs how long each phase took at `debug` level.
#[derive(Default)]
pub struct TimingPlugin {
    started: Mutex<HashMap<String, Instant>>,
}

impl TimingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TimingPlugin {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        self.started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(phase.to_string(), Instant::now());
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let started = self
            .started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(phase);

        if let Some(started) = started {
            debug!(
                phase,
                elapsed_us = started.elapsed().as_micros() as u64,
                diagnostics = ctx.diagnostics.len(),
                "phase finished"
            );
        }
        Ok(())
    }
}
