/// Result of reading a tool's stored state.
///
/// Loading never fails outright: a missing slot and a damaged one are both
/// reported here and the caller decides what to fall back to.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<T> {
    /// A stored state passed the shape check and decoded.
    Loaded(T),
    /// Nothing stored under the key (or an empty value).
    Absent,
    /// Something was stored but could not be used.
    Corrupt(String),
}

impl<T> LoadOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded state, if any.
    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(state) => Some(state),
            Self::Absent | Self::Corrupt(_) => None,
        }
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.loaded().unwrap_or_else(fallback)
    }
}

impl<T: Default> LoadOutcome<T> {
    /// The loaded state, or `T::default()` for both absent and corrupt slots.
    pub fn unwrap_or_default(self) -> T {
        self.loaded().unwrap_or_default()
    }
}
