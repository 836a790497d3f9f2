use super::Frame;

/// Event emitted by the sweep solver once per sweep value.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position in the sweep, starting at 0.
    pub index: usize,

    /// The swept parameter value for this frame.
    pub param: f64,

    /// The freshly computed frame.
    pub frame: &'a Frame,
}
