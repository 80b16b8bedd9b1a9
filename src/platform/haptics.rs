use std::io::Write;

/// Terminal stand-in for a haptic tap: the bell.
#[derive(Debug, Clone, Copy)]
pub struct Haptics {
    enabled: bool,
}

impl Haptics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Ring the bell. Write failures are ignored.
    pub fn impact(&self) {
        if !self.enabled {
            return;
        }
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}
