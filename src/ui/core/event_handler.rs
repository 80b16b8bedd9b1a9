use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Idle tick when nothing is moving
const IDLE_TICK: Duration = Duration::from_millis(100);
/// Frame budget while an animation runs (~60 FPS)
const FRAME: Duration = Duration::from_millis(16);

pub struct EventHandler {
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            last_render_time: Instant::now(),
        }
    }

    /// Wait for the next terminal event or tick.
    ///
    /// While `animating` the tick runs at frame rate so entrance animations
    /// are sampled smoothly; otherwise it falls back to the idle rate.
    pub async fn next_event(&mut self, animating: bool) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(EventType::Key(key));
                }
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        let wait = if animating { FRAME } else { IDLE_TICK };
        tokio::time::sleep(wait).await;
        Ok(EventType::Tick)
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= FRAME
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
