use std::fmt;

/// Sort directive for the network list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Daemon order; not part of the rotation.
    Unsorted,
    #[default]
    ById,
    ByName,
    ByDriver,
}

impl SortMode {
    /// Next mode in the rotation `ById -> ByName -> ByDriver -> ById`.
    ///
    /// `Unsorted` is outside the cycle and maps to itself.
    pub fn next(self) -> Self {
        match self {
            SortMode::ById => SortMode::ByName,
            SortMode::ByName => SortMode::ByDriver,
            SortMode::ByDriver => SortMode::ById,
            SortMode::Unsorted => SortMode::Unsorted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Unsorted => "unsorted",
            SortMode::ById => "id",
            SortMode::ByName => "name",
            SortMode::ByDriver => "driver",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
