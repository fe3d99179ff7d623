use std::io::{self, IsTerminal, Write};

/// Receives one tick per unit of work. Purely observational.
pub trait Progress {
    fn advance(&mut self);

    fn finish(&mut self) {}
}

/// Discards every tick.
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&mut self) {}
}

/// Running counter on stderr, only drawn when stderr is a terminal.
pub struct StderrProgress {
    label: &'static str,
    count: u64,
    enabled: bool,
}

impl StderrProgress {
    const REDRAW_EVERY: u64 = 32;

    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            count: 0,
            enabled: io::stderr().is_terminal(),
        }
    }

    fn draw(&self) {
        let mut err = io::stderr().lock();
        let _ = write!(err, "\r{} {}", self.label, self.count);
        let _ = err.flush();
    }
}

impl Progress for StderrProgress {
    fn advance(&mut self) {
        self.count += 1;
        if self.enabled && self.count % Self::REDRAW_EVERY == 1 {
            self.draw();
        }
    }

    fn finish(&mut self) {
        if self.enabled && self.count > 0 {
            self.draw();
            eprintln!();
        }
    }
}
