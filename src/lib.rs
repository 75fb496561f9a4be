use log::{debug, warn};
use std::fmt;
use std::rc::Rc;
use yew::functional::Reducible;

/// Observable lifecycle of a [`Session`].
///
/// `Idle` means nothing has run since the last reset, `Stopped` means the
/// stopwatch has laps on record but is not ticking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

// Custom error type for rejected stopwatch transitions
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionError {
    AlreadyRunning,
    NotRunning,
    AlreadyStarted,
    NothingToResume,
    ResetWhileRunning,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyRunning => write!(f, "Stopwatch is already running"),
            SessionError::NotRunning => write!(f, "Stopwatch is not running"),
            SessionError::AlreadyStarted => write!(
                f,
                "Session already has laps on record; resume or reset it instead"
            ),
            SessionError::NothingToResume => {
                write!(f, "Nothing to resume: the session was never started")
            }
            SessionError::ResetWhileRunning => {
                write!(f, "Cannot reset while running; stop the session first")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// The live timing segment: wall-clock start of the segment and the
/// timestamp observed by the most recent tick, both in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Segment {
    start: u64,
    now: u64,
}

impl Segment {
    fn elapsed(&self) -> u64 {
        self.now.saturating_sub(self.start)
    }
}

/// Complete stopwatch state: the optional live segment plus the lap list,
/// most recent first. `laps[0]` is the in-progress lap's accumulated
/// milliseconds; entries at index 1 and beyond are completed laps.
///
/// A `Some` segment means the stopwatch is ticking. A session never has a
/// segment without at least one lap entry.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Session {
    segment: Option<Segment>,
    laps: Vec<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.segment.is_some() {
            Phase::Running
        } else if self.laps.is_empty() {
            Phase::Idle
        } else {
            Phase::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.segment.is_some()
    }

    /// Lap entries, most recent first. The head entry excludes the live
    /// segment; see [`Session::lap_views`] for display values.
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Begin timing a fresh session: one zero-duration lap, segment opened
    /// at `at`. Only valid from `Idle`.
    pub fn start(&mut self, at: u64) -> Result<(), SessionError> {
        if self.segment.is_some() {
            return Err(SessionError::AlreadyRunning);
        }
        if !self.laps.is_empty() {
            return Err(SessionError::AlreadyStarted);
        }
        self.laps.push(0);
        self.segment = Some(Segment { start: at, now: at });
        Ok(())
    }

    /// Close the current lap and open a new one, restarting the segment at
    /// `at`. The closed lap receives the segment as of the last tick; the
    /// sub-tick remainder between that tick and `at` is discarded, matching
    /// the display the user saw when pressing the button.
    pub fn lap(&mut self, at: u64) -> Result<(), SessionError> {
        let seg = self.segment.as_mut().ok_or(SessionError::NotRunning)?;
        let elapsed = seg.now.saturating_sub(seg.start);
        // A segment never exists without a head lap.
        self.laps[0] += elapsed;
        self.laps.insert(0, 0);
        seg.start = at;
        seg.now = at;
        Ok(())
    }

    /// Halt timing, folding the segment as of the last tick into the head
    /// lap. The head entry stays in place so a later `resume` keeps
    /// accumulating into it.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        let seg = self.segment.take().ok_or(SessionError::NotRunning)?;
        self.laps[0] += seg.elapsed();
        Ok(())
    }

    /// Reopen a segment at `at` on a stopped session. No lap entry is
    /// allocated: the head lap continues across stop/resume cycles.
    pub fn resume(&mut self, at: u64) -> Result<(), SessionError> {
        if self.segment.is_some() {
            return Err(SessionError::AlreadyRunning);
        }
        if self.laps.is_empty() {
            return Err(SessionError::NothingToResume);
        }
        self.segment = Some(Segment { start: at, now: at });
        Ok(())
    }

    /// Clear all laps. Valid whenever the stopwatch is not running; on an
    /// idle session this is a no-op.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.segment.is_some() {
            return Err(SessionError::ResetWhileRunning);
        }
        self.laps.clear();
        Ok(())
    }

    /// Advance the live segment's observed time. Fired by the periodic
    /// refresh while running; a tick arriving after the segment was closed
    /// is ignored rather than treated as an error, since cancellation and
    /// an in-flight callback can race.
    pub fn tick(&mut self, at: u64) {
        if let Some(seg) = self.segment.as_mut() {
            seg.now = at;
        }
    }

    /// Milliseconds accumulated by the live segment, 0 while stopped.
    pub fn segment_elapsed(&self) -> u64 {
        self.segment.map_or(0, |seg| seg.elapsed())
    }

    /// Total time on the clock: every lap entry plus the live segment.
    pub fn total_elapsed(&self) -> u64 {
        self.laps.iter().sum::<u64>() + self.segment_elapsed()
    }

    /// Minimum and maximum duration over *completed* laps (everything but
    /// the head entry), or `None` until more than two laps have completed.
    pub fn completed_extremes(&self) -> Option<(u64, u64)> {
        let completed = self.laps.get(1..).unwrap_or(&[]);
        if completed.len() <= 2 {
            return None;
        }
        let min = *completed.iter().min()?;
        let max = *completed.iter().max()?;
        Some((min, max))
    }

    /// Derive one display row per lap entry, most recent first.
    ///
    /// The head row shows its accumulator plus the live segment while
    /// running. Fastest/slowest flags are a value match against
    /// [`Session::completed_extremes`]: every row whose stored duration
    /// equals the extreme is flagged, ties included, and the head is only
    /// ever flagged if its stored value happens to collide.
    pub fn lap_views(&self) -> Vec<LapView> {
        let extremes = self.completed_extremes();
        let live = self.segment_elapsed();
        let count = self.laps.len();
        self.laps
            .iter()
            .enumerate()
            .map(|(index, &lap)| {
                let interval = if index == 0 { lap + live } else { lap };
                let (fastest, slowest) = match extremes {
                    Some((min, max)) => (lap == min, lap == max),
                    None => (false, false),
                };
                LapView {
                    number: count - index,
                    interval,
                    fastest,
                    slowest,
                }
            })
            .collect()
    }
}

/// One row of the lap table: display number (oldest lap is 1), the interval
/// to render, and the extreme markers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapView {
    pub number: usize,
    pub interval: u64,
    pub fastest: bool,
    pub slowest: bool,
}

/// Reducer actions for driving a [`Session`] from the view layer. Each
/// user-facing action carries the timestamp read at dispatch time so the
/// state machine itself stays clock-free.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionAction {
    Start { at: u64 },
    Lap { at: u64 },
    Stop,
    Resume { at: u64 },
    Reset,
    Tick { at: u64 },
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let outcome = match action {
            SessionAction::Start { at } => next.start(at),
            SessionAction::Lap { at } => next.lap(at),
            SessionAction::Stop => next.stop(),
            SessionAction::Resume { at } => next.resume(at),
            SessionAction::Reset => next.reset(),
            SessionAction::Tick { at } => {
                next.tick(at);
                Ok(())
            }
        };
        match outcome {
            Ok(()) => {
                if !matches!(action, SessionAction::Tick { .. }) {
                    debug!("{:?} -> {:?}", action, next.phase());
                }
                Rc::new(next)
            }
            Err(err) => {
                // Buttons for invalid transitions are never rendered, so
                // landing here means a wiring bug, not a user mistake.
                warn!("Ignoring {:?} while {:?}: {}", action, self.phase(), err);
                self
            }
        }
    }
}

/// A millisecond count split into the fields the timer renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DurationParts {
    pub minutes: u64,
    pub seconds: u64,
    pub centis: u64,
}

/// Split a millisecond count into duration components. Minutes wrap at 60;
/// the display carries no hours field.
pub fn split_ms(ms: u64) -> DurationParts {
    DurationParts {
        minutes: ms / 60_000 % 60,
        seconds: ms / 1_000 % 60,
        centis: ms % 1_000 / 10,
    }
}

/// Format a millisecond count the way the timer renders it.
///
/// # Examples
/// ```
/// assert_eq!(lapwatch::format_ms_to_minseccs(0), "00:00,00");
/// assert_eq!(lapwatch::format_ms_to_minseccs(83_560), "01:23,56");
/// ```
pub fn format_ms_to_minseccs(ms: u64) -> String {
    let parts = split_ms(ms);
    format!(
        "{:02}:{:02},{:02}",
        parts.minutes, parts.seconds, parts.centis
    )
}

/// Current time in milliseconds, suitable for feeding [`SessionAction`]
/// timestamps. Only differences matter to the session, so the epoch may be
/// the page load (performance timeline) or the Unix epoch (fallbacks).
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
