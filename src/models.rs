use serde::{Deserialize, Serialize};

/// One calendar day of the monthly sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub day: u8,
    pub quota: u32,
    #[serde(default)]
    pub selected_by: Vec<String>,
}

impl DayRecord {
    pub fn empty(day: u8) -> Self {
        Self {
            day,
            quota: 0,
            selected_by: Vec::new(),
        }
    }
}

/// Persisted form of the ledger, scoped to a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEnvelope {
    pub month: u32,
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Picking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u8,
    pub quota: u32,
    pub max_quota: u32,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct SheetResponse {
    pub month: u32,
    pub phase: Phase,
    pub current_user: String,
    pub selected_days: Vec<u8>,
    pub max_days_per_person: usize,
    pub max_quota_per_day: u32,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub welcome: String,
    pub sheet: SheetResponse,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub cell: DayCell,
    pub selected: bool,
    pub selected_days: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub user: String,
    pub days: Vec<u8>,
    pub message: String,
}
