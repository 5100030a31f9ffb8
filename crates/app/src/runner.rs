use crate::demo::DemoCore;
use debugger::StateSource;
use machine::{EmulatorStateView, PauseControl};
use spin_sleep::SpinSleeper;
use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tracing::{debug, info};

struct Shared {
    core: Mutex<DemoCore>,
    advance: AtomicBool,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, DemoCore> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

const STEP: Duration = Duration::from_millis(1);

fn worker(shared: Arc<Shared>) {
    let sleeper = SpinSleeper::default();

    // the runner handle holds the only other reference
    while Arc::strong_count(&shared) > 1 {
        sleeper.sleep(STEP);
        if !shared.advance.load(Ordering::Relaxed) {
            continue;
        }

        shared.lock().exec(STEP);
    }

    debug!("runner handle dropped, worker exiting");
}

/// Runs a [`DemoCore`] in real time on a worker thread.
pub struct Runner {
    shared: Arc<Shared>,
}

impl Runner {
    pub fn new(core: DemoCore, run: bool) -> std::io::Result<Self> {
        let shared = Arc::new(Shared {
            core: Mutex::new(core),
            advance: AtomicBool::new(run),
        });

        std::thread::Builder::new()
            .name("inspector runner".into())
            .spawn({
                let shared = shared.clone();
                move || worker(shared)
            })?;

        Ok(Self { shared })
    }

    /// Executes a single instruction. Does nothing while running.
    pub fn step(&self) {
        if self.paused() {
            let mut core = self.shared.lock();
            core.step();
            debug!("stepped to ip {:#X}", core.registers().pc);
        }
    }

    pub fn reset(&self) {
        self.shared.lock().reset();
        info!("core reset");
    }

    pub fn executed(&self) -> u64 {
        self.shared.lock().executed()
    }
}

impl PauseControl for Runner {
    fn paused(&self) -> bool {
        !self.shared.advance.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.shared.advance.store(!paused, Ordering::Release);
        info!(paused, "execution state changed");
    }
}

impl StateSource for Runner {
    fn with_view(&self, f: &mut dyn FnMut(&dyn EmulatorStateView)) {
        // render outside the lock so the worker is only held up by the copy
        let frozen = self.shared.lock().freeze();
        f(&frozen);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli::Config;
    use clap::Parser;

    fn runner(run: bool) -> Runner {
        let config = Config::try_parse_from(["inspector", "--cpu", "i80286"]).unwrap();
        Runner::new(DemoCore::new(config.machine), run).unwrap()
    }

    #[test]
    fn step_only_while_paused() {
        let runner = runner(false);
        assert!(runner.paused());

        runner.step();
        runner.step();
        assert_eq!(runner.executed(), 2);

        runner.set_paused(false);
        runner.step();
        runner.set_paused(true);

        // stepping while running is ignored; the worker may have executed slices meanwhile
        assert!(runner.executed() >= 2);
    }

    #[test]
    fn view_reflects_steps() {
        let runner = runner(false);
        let mut before = None;
        runner.with_view(&mut |view| before = Some(view.registers().pc));
        assert_eq!(before, Some(0xFFF0));

        runner.step();

        let mut after = None;
        runner.with_view(&mut |view| after = Some(view.registers().pc));
        assert_ne!(after, before);
    }
}
