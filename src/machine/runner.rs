use super::basics::MachineError;
use super::chip::Chip;
use std::thread;
use std::time::{Duration, Instant};

// 60 Hz timer cadence
const TIMER_INTERVAL: Duration = Duration::from_micros(16667);

/// Drives a machine on the calling thread until its program counter stops
/// moving, which a program reaches through a jump-to-self loop or a key
/// wait with no key source attached. Instructions execute at
/// `instruction_sleep` cadence while the timers tick at 60 Hz on elapsed
/// time, independent of the stepping speed.
pub fn run_until_idle(
    chip: &mut Chip,
    instruction_sleep: Duration,
) -> Result<(), MachineError> {
    let mut last_tick = Instant::now();
    loop {
        let pc = chip.registers().pc();
        chip.step()?;
        while last_tick.elapsed() >= TIMER_INTERVAL {
            chip.tick();
            last_tick += TIMER_INTERVAL;
        }
        if chip.registers().pc() == pc {
            return Ok(());
        }
        if instruction_sleep > Duration::from_secs(0) {
            thread::sleep(instruction_sleep);
        }
    }
}
