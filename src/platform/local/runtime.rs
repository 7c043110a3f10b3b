//! Process resource usage for the local backend.
//!
//! Every query takes one `sysinfo` sample of the current process and folds it
//! into a ten-minute window; the one and ten minute figures are plain means of
//! the samples inside each window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::error::ProviderError;
use crate::platform::RuntimeStatsProvider;
use crate::report::models::{CpuUsage, RamUsage, RuntimeStats};

const ONE_MINUTE: Duration = Duration::from_secs(60);
const TEN_MINUTES: Duration = Duration::from_secs(600);
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    cpu: f64,
    ram_mb: f64,
}

#[derive(Debug, Default)]
pub struct RollingWindow {
    samples: VecDeque<Sample>,
}

impl RollingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Records a sample and drops everything older than ten minutes before `at`.
    pub fn record(&mut self, at: Instant, cpu: f64, ram_mb: f64) {
        self.samples.push_back(Sample { at, cpu, ram_mb });
        if let Some(cutoff) = at.checked_sub(TEN_MINUTES) {
            while self.samples.front().is_some_and(|s| s.at < cutoff) {
                self.samples.pop_front();
            }
        }
    }

    /// Mean (cpu, ram) over samples taken within `window` of `now`.
    pub fn average(&self, now: Instant, window: Duration) -> (f64, f64) {
        let cutoff = now.checked_sub(window);
        let (mut cpu, mut ram, mut n) = (0.0, 0.0, 0usize);
        for s in self.samples.iter().rev() {
            if cutoff.is_some_and(|c| s.at < c) {
                break;
            }
            cpu += s.cpu;
            ram += s.ram_mb;
            n += 1;
        }
        if n == 0 {
            return (0.0, 0.0);
        }
        (cpu / n as f64, ram / n as f64)
    }

    pub fn stats(&self, now: Instant, cpu: f64, ram_mb: f64) -> RuntimeStats {
        let (cpu_1m, ram_1m) = self.average(now, ONE_MINUTE);
        let (cpu_10m, ram_10m) = self.average(now, TEN_MINUTES);
        RuntimeStats {
            cpu: CpuUsage { total: cpu, rate_1m: cpu_1m, rate_10m: cpu_10m },
            ram: RamUsage { current: ram_mb, average_1m: ram_1m, average_10m: ram_10m },
        }
    }
}

struct Sampler {
    system: System,
    pid: Pid,
    window: RollingWindow,
}

/// Resource usage of the current process.
pub struct ProcessRuntime {
    inner: Mutex<Sampler>,
}

impl ProcessRuntime {
    pub fn new() -> Result<Self, ProviderError> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| ProviderError::Unavailable(format!("unable to resolve own pid: {}", e)))?;
        Ok(Self {
            inner: Mutex::new(Sampler {
                system: System::new(),
                pid,
                window: RollingWindow::new(),
            }),
        })
    }
}

#[async_trait]
impl RuntimeStatsProvider for ProcessRuntime {
    async fn stats(&self) -> Result<RuntimeStats, ProviderError> {
        let mut sampler = self.inner.lock();
        let Sampler { system, pid, window } = &mut *sampler;

        system.refresh_processes(ProcessesToUpdate::Some(&[*pid]), true);
        let process = system
            .process(*pid)
            .ok_or_else(|| ProviderError::Unavailable(format!("process {} not visible", pid)))?;

        // sysinfo reports percent of one core
        let cpu = f64::from(process.cpu_usage()) / 100.0;
        let ram_mb = process.memory() as f64 / BYTES_PER_MB;

        let now = Instant::now();
        window.record(now, cpu, ram_mb);
        Ok(window.stats(now, cpu, ram_mb))
    }
}
