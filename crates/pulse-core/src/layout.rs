// File: crates/pulse-core/src/layout.rs
// Summary: Result of a chart layout pass: either drawable geometry or an explicit empty state.

/// Why a layout produced no geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// The series has no points.
    NoData,
    /// Every pie value is zero, so no share can be computed.
    ZeroTotal,
}

/// Layout output. Callers check for `Empty` before building a scene; nothing
/// downstream of `Ready` ever divides by an empty or zero aggregate.
#[derive(Clone, Debug, PartialEq)]
pub enum Layout<T> {
    Empty(EmptyReason),
    Ready(T),
}

impl<T> Layout<T> {
    pub fn is_empty(&self) -> bool { matches!(self, Layout::Empty(_)) }

    pub fn ready(self) -> Option<T> {
        match self {
            Layout::Ready(t) => Some(t),
            Layout::Empty(_) => None,
        }
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Layout::Ready(t) => Some(t),
            Layout::Empty(_) => None,
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Layout::Empty(r) => Some(*r),
            Layout::Ready(_) => None,
        }
    }
}
