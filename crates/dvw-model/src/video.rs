//! Video timestamp derivation.

use chrono::TimeDelta;

/// Derives a video timestamp from a raw scout line.
///
/// The upstream parser knows the line layout; the validation engine only asks
/// for the timestamp when annotating a finding.
pub trait VideoTimeSource {
    fn video_time(&self, raw_line: &str) -> Option<TimeDelta>;
}

impl<F> VideoTimeSource for F
where
    F: Fn(&str) -> Option<TimeDelta>,
{
    fn video_time(&self, raw_line: &str) -> Option<TimeDelta> {
        self(raw_line)
    }
}

/// A source that never yields a timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVideoTime;

impl VideoTimeSource for NoVideoTime {
    fn video_time(&self, _raw_line: &str) -> Option<TimeDelta> {
        None
    }
}
