/// Indicates how the sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every sweep value produced a frame.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a sweep.
///
/// Frames are not retained; observers consume them as they are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// How the sweep terminated.
    pub status: Status,

    /// Number of frames emitted to the observer.
    pub frames: usize,
}
