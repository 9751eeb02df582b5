use crate::engine::Algorithm;

/// Events emitted by the frame loop that renderers can handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Frame loop started
    Started(Algorithm),

    /// Data was reset, possibly for a different algorithm
    Restarted(Algorithm),

    /// The active algorithm reached its terminal state
    Completed { algorithm: Algorithm, steps: usize },
}
