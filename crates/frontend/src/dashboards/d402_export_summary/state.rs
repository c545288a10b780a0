use chrono::NaiveDate;
use contracts::dashboards::d402_export_summary::{DateRange, SortState};
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "d402_export_summary_state_v1";

/// View settings restored when the widget is mounted again
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub date_from: String,
    pub date_to: String,
    pub sort: SortState,
}

impl PersistedState {
    pub fn for_today(today: NaiveDate) -> Self {
        let range = DateRange::month_to_date(today);
        Self {
            date_from: range.from_input(),
            date_to: range.to_input(),
            sort: SortState::default(),
        }
    }

    /// Restore from JSON, falling back to the defaults for `today` when the
    /// stored value is missing, was written by an incompatible version or
    /// holds dates that do not parse.
    pub fn from_json(raw: Option<&str>, today: NaiveDate) -> Self {
        raw.and_then(|raw| serde_json::from_str::<PersistedState>(raw).ok())
            .filter(|st| DateRange::parse(&st.date_from, &st.date_to).is_ok())
            .unwrap_or_else(|| Self::for_today(today))
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_state(today: NaiveDate) -> PersistedState {
    let raw = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    PersistedState::from_json(raw.as_deref(), today)
}

pub fn save_state(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else {
        return;
    };
    if storage.set_item(STORAGE_KEY, &raw).is_err() {
        log::warn!("Failed to persist export summary view state");
    }
}
