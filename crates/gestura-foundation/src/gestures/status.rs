/// Lifecycle of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureStatus {
    Started,
    Running,
    Completed,
    Canceled,
}

impl GestureStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GestureStatus::Completed | GestureStatus::Canceled)
    }
}

/// Normalizes raw platform phases into a well-formed status sequence.
///
/// Each gesture instance gets exactly one `Started` before any `Running` or
/// terminal status, and at most one terminal status. Phases that would break
/// that (a second press while active, a release with nothing active) are
/// rewritten or dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureLifecycle {
    active: bool,
}

impl GestureLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw phase. Returns the status to report, or `None` when the
    /// phase does not belong to any gesture instance.
    pub fn advance(&mut self, raw: GestureStatus) -> Option<GestureStatus> {
        match (self.active, raw) {
            (false, GestureStatus::Started | GestureStatus::Running) => {
                self.active = true;
                Some(GestureStatus::Started)
            }
            (false, GestureStatus::Completed | GestureStatus::Canceled) => None,
            (true, GestureStatus::Started | GestureStatus::Running) => Some(GestureStatus::Running),
            (true, terminal) => {
                self.active = false;
                Some(terminal)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = false;
    }
}
