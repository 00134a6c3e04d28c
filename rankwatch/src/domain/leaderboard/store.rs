use super::types::Snapshot;

/// Two-generation snapshot holder.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<Snapshot>,
    previous: Option<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Promotes `snapshot` to current and demotes the old current to
    /// previous. Returns whether `snapshot` differs from the old current.
    pub fn update(&mut self, snapshot: Snapshot) -> bool {
        let changed = self.current.as_ref() != Some(&snapshot);
        self.previous = self.current.replace(snapshot);
        changed
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// Both generations, when two updates have been accepted.
    pub fn pair(&self) -> Option<(&Snapshot, &Snapshot)> {
        Some((self.previous.as_ref()?, self.current.as_ref()?))
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.previous = None;
    }
}
