//! Headless mode: snapshots are written as text.

use debugger::{Error, FormattedSnapshot, Present, RefreshDriver, StateSource};
use eyre_pretty::eyre::{Result, WrapErr};
use spin_sleep::SpinSleeper;
use std::{io::Write, time::Instant};

/// Writes up to a fixed number of snapshots. A failed write ends the dump.
struct TextDump<W> {
    out: W,
    remaining: usize,
    failed: Option<std::io::Error>,
}

impl<W: Write> TextDump<W> {
    fn write(&mut self, snapshot: &FormattedSnapshot) -> std::io::Result<()> {
        for line in snapshot.info_lines() {
            writeln!(self.out, "{line}")?;
        }

        for row in &snapshot.registers {
            writeln!(self.out, "{:<8}{}", row.name, row.value)?;
        }

        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Present for TextDump<W> {
    fn present(&mut self, snapshot: &FormattedSnapshot) -> Result<(), Error> {
        if self.remaining == 0 {
            return Ok(());
        }

        match self.write(snapshot) {
            Ok(()) => self.remaining -= 1,
            Err(e) => {
                self.remaining = 0;
                self.failed = Some(e);
            }
        }

        Ok(())
    }
}

/// Writes `count` snapshots of `source` to `out`, one per refresh tick.
///
/// Stops at the first tick that could not be rendered or written and returns its error.
pub fn dump(
    driver: &mut RefreshDriver,
    source: &dyn StateSource,
    out: impl Write,
    count: usize,
) -> Result<()> {
    let sleeper = SpinSleeper::default();
    let mut dump = TextDump {
        out,
        remaining: count,
        failed: None,
    };

    while dump.remaining > 0 {
        let skipped = driver.stats().skipped;
        let wait = driver.poll(Instant::now(), source, &mut dump);

        match &driver.stats().last_error {
            Some(e) if driver.stats().skipped != skipped => {
                return Err(e.clone()).wrap_err("failed to render snapshot");
            }
            _ => (),
        }

        if let Some(e) = dump.failed.take() {
            return Err(e).wrap_err("failed to write snapshot");
        }

        if dump.remaining > 0 {
            sleeper.sleep(wait);
        }
    }

    Ok(())
}
