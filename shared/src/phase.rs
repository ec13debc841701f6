/// Page load lifecycle: `Idle -> Loading -> (Loaded | Failed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    /// Value written to `data-phase` on the home container.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadPhase::Idle => "idle",
            LoadPhase::Loading => "loading",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed => "failed",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            LoadPhase::Idle => "Waiting for page",
            LoadPhase::Loading => "Loading map data",
            LoadPhase::Loaded => "Hover a state to see its SEVI score",
            LoadPhase::Failed => "Map data could not be loaded",
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, LoadPhase::Loaded | LoadPhase::Failed)
    }

    /// Start a load. Only an idle page starts; a load in flight or finished is left alone.
    pub fn begin(self) -> Option<LoadPhase> {
        (self == LoadPhase::Idle).then_some(LoadPhase::Loading)
    }

    /// Settle a load in flight with its outcome.
    pub fn finish<T, E>(self, outcome: &Result<T, E>) -> LoadPhase {
        match (self, outcome) {
            (LoadPhase::Loading, Ok(_)) => LoadPhase::Loaded,
            (LoadPhase::Loading, Err(_)) => LoadPhase::Failed,
            (other, _) => other,
        }
    }
}
