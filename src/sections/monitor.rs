use gloo_timers::callback::Interval;
use log::debug;

/// Something that can run a callback repeatedly until its handle is dropped.
pub trait Schedule {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSchedule;

impl Schedule for BrowserSchedule {
    type Handle = Interval;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, tick)
    }
}

/// Per-frame loop that re-evaluates the active section while a scroll is in
/// flight. At most one loop runs at a time; dropping the monitor stops it.
pub struct ScrollMonitor<S: Schedule = BrowserSchedule> {
    schedule: S,
    frame_ms: u32,
    running: Option<S::Handle>,
}

impl<S: Schedule> ScrollMonitor<S> {
    pub fn new(schedule: S, frame_ms: u32) -> Self {
        Self {
            schedule,
            frame_ms,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Starts the loop unless it is already running.
    pub fn start(&mut self, tick: impl FnMut() + 'static) {
        if self.running.is_some() {
            return;
        }
        debug!("Scroll monitor started");
        self.running = Some(self.schedule.every(self.frame_ms, Box::new(tick)));
    }

    pub fn stop(&mut self) {
        if self.running.take().is_some() {
            debug!("Scroll monitor stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    /// Records scheduled callbacks; a handle counts as live until dropped.
    #[derive(Clone, Default)]
    struct FakeSchedule {
        started: Rc<Cell<usize>>,
        live: Rc<Cell<usize>>,
        ticks: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
    }

    struct FakeHandle(Rc<Cell<usize>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Schedule for FakeSchedule {
        type Handle = FakeHandle;

        fn every(&self, _millis: u32, tick: Box<dyn FnMut()>) -> FakeHandle {
            self.started.set(self.started.get() + 1);
            self.live.set(self.live.get() + 1);
            self.ticks.borrow_mut().push(tick);
            FakeHandle(self.live.clone())
        }
    }

    #[test]
    fn start_is_idempotent() {
        let schedule = FakeSchedule::default();
        let mut monitor = ScrollMonitor::new(schedule.clone(), 16);
        monitor.start(|| {});
        monitor.start(|| {});
        assert_eq!(schedule.started.get(), 1);
        assert_eq!(schedule.live.get(), 1);
    }

    #[test]
    fn stop_and_drop_release_the_loop() {
        let schedule = FakeSchedule::default();
        let mut monitor = ScrollMonitor::new(schedule.clone(), 16);
        monitor.start(|| {});
        monitor.stop();
        assert!(!monitor.is_running());
        assert_eq!(schedule.live.get(), 0);

        monitor.start(|| {});
        assert_eq!(schedule.live.get(), 1);
        drop(monitor);
        assert_eq!(schedule.live.get(), 0);
    }

    #[test]
    fn scheduled_tick_runs_the_callback() {
        let schedule = FakeSchedule::default();
        let mut monitor = ScrollMonitor::new(schedule.clone(), 16);
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        monitor.start(move || counter.set(counter.get() + 1));

        for tick in schedule.ticks.borrow_mut().iter_mut() {
            tick();
            tick();
        }
        assert_eq!(frames.get(), 2);
    }
}
