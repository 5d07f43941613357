use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

pub const DEFAULT_DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// Queries the router makes of the windowing host.
///
/// The interval is read on every click evaluation, never cached, so a host
/// that changes its setting at runtime is picked up on the next click.
pub trait Host {
    fn double_click_interval(&self) -> Duration;

    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn double_click_interval(&self) -> Duration {
        (**self).double_click_interval()
    }

    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall clock with an interval that can be changed while the window runs.
#[derive(Clone, Debug)]
pub struct SystemHost {
    interval: IntervalHandle,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK)
    }
}

impl SystemHost {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: IntervalHandle::new(interval),
        }
    }

    /// Handle for reconfiguring the interval from elsewhere, e.g. a settings
    /// listener on another thread.
    pub fn interval_handle(&self) -> IntervalHandle {
        self.interval.clone()
    }
}

impl Host for SystemHost {
    fn double_click_interval(&self) -> Duration {
        self.interval.get()
    }
}

#[derive(Clone, Debug)]
pub struct IntervalHandle(Arc<AtomicU64>);

impl IntervalHandle {
    fn new(interval: Duration) -> Self {
        Self(Arc::new(AtomicU64::new(millis(interval))))
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, interval: Duration) {
        log::debug!("double-click interval set to {}ms", millis(interval));
        self.0.store(millis(interval), Ordering::Relaxed);
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Fixed interval on the wall clock.
#[derive(Copy, Clone, Debug)]
pub struct FixedHost(pub Duration);

impl Host for FixedHost {
    fn double_click_interval(&self) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_host_reads_live_interval() {
        let host = SystemHost::default();
        assert_eq!(host.double_click_interval(), DEFAULT_DOUBLE_CLICK);

        let handle = host.interval_handle();
        std::thread::spawn(move || handle.set(Duration::from_millis(250)))
            .join()
            .unwrap();

        assert_eq!(host.double_click_interval(), Duration::from_millis(250));
    }

    #[test]
    fn boxed_host_forwards() {
        let host: Box<dyn Host> = Box::new(FixedHost(Duration::from_millis(42)));
        assert_eq!(host.double_click_interval(), Duration::from_millis(42));
    }
}
