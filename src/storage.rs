use crate::errors::AppError;
use crate::models::{DayRecord, LedgerEnvelope};
use crate::sheet::{fresh_ledger, DAYS_IN_SHEET, MAX_QUOTA_PER_DAY};
use chrono::{Datelike, Local};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/signup.json"))
}

pub fn current_month() -> u32 {
    Local::now().month()
}

pub async fn load_ledger(path: &Path) -> Result<LedgerEnvelope, AppError> {
    load_ledger_for_month(path, current_month()).await
}

/// Loads the stored ledger, replacing it with a fresh one when it is missing,
/// unreadable, or belongs to a different month.
pub async fn load_ledger_for_month(path: &Path, month: u32) -> Result<LedgerEnvelope, AppError> {
    match read_envelope(path).await {
        Some(ledger) if ledger.month == month => return Ok(ledger),
        Some(ledger) => info!(stored = ledger.month, month, "month rolled over, resetting ledger"),
        None => info!(month, "no ledger stored, starting fresh"),
    }

    let ledger = fresh_ledger(month);
    persist_ledger(path, &ledger).await?;
    Ok(ledger)
}

async fn read_envelope(path: &Path) -> Option<LedgerEnvelope> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            error!("failed to read data file: {err}");
            return None;
        }
    };

    match serde_json::from_slice::<LedgerEnvelope>(&bytes) {
        Ok(ledger) if is_well_formed(&ledger) => Some(ledger),
        Ok(_) => {
            warn!("data file does not hold a consistent month of days, ignoring it");
            None
        }
        Err(err) => {
            error!("failed to parse data file: {err}");
            None
        }
    }
}

fn is_well_formed(ledger: &LedgerEnvelope) -> bool {
    ledger.days.len() == usize::from(DAYS_IN_SHEET)
        && ledger
            .days
            .iter()
            .zip(1..=DAYS_IN_SHEET)
            .all(|(record, day)| record.day == day && is_consistent(record))
}

/// Quota within capacity, matching a claimant list without repeats.
fn is_consistent(record: &DayRecord) -> bool {
    let claimants = &record.selected_by;
    record.quota <= MAX_QUOTA_PER_DAY
        && record.quota as usize == claimants.len()
        && claimants
            .iter()
            .enumerate()
            .all(|(index, user)| !claimants[..index].contains(user))
}

pub async fn persist_ledger(path: &Path, ledger: &LedgerEnvelope) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(ledger)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("signup_sheet_{name}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_yields_fresh_persisted_ledger() {
        let path = temp_path("missing");
        let ledger = load_ledger_for_month(&path, 6).await.unwrap();
        assert_eq!(ledger, fresh_ledger(6));

        let stored: LedgerEnvelope = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(stored, ledger);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn rollover_discards_previous_month() {
        let path = temp_path("rollover");
        let mut march = fresh_ledger(3);
        march.days[4] = DayRecord {
            day: 5,
            quota: 2,
            selected_by: vec!["Ana".to_string(), "Bob".to_string()],
        };
        persist_ledger(&path, &march).await.unwrap();

        let ledger = load_ledger_for_month(&path, 4).await.unwrap();
        assert_eq!(ledger.month, 4);
        assert_eq!(ledger.days.len(), 31);
        assert!(ledger.days.iter().all(|record| record.quota == 0 && record.selected_by.is_empty()));

        let stored: LedgerEnvelope = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(stored.month, 4);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn same_month_ledger_is_kept() {
        let path = temp_path("same_month");
        let mut ledger = fresh_ledger(4);
        ledger.days[0].quota = 1;
        ledger.days[0].selected_by.push("Ana".to_string());
        persist_ledger(&path, &ledger).await.unwrap();

        assert_eq!(load_ledger_for_month(&path, 4).await.unwrap(), ledger);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn corrupt_file_is_replaced() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert_eq!(load_ledger_for_month(&path, 9).await.unwrap(), fresh_ledger(9));

        fs::write(&path, br#"{"month":9,"days":[]}"#).await.unwrap();
        assert_eq!(load_ledger_for_month(&path, 9).await.unwrap(), fresh_ledger(9));
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn over_capacity_or_duplicate_claims_are_replaced() {
        let path = temp_path("over_capacity");
        let mut crowded = fresh_ledger(9);
        crowded.days[3] = DayRecord {
            day: 4,
            quota: 6,
            selected_by: ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec(),
        };
        persist_ledger(&path, &crowded).await.unwrap();
        assert_eq!(load_ledger_for_month(&path, 9).await.unwrap(), fresh_ledger(9));

        let mut doubled = fresh_ledger(9);
        doubled.days[3] = DayRecord {
            day: 4,
            quota: 2,
            selected_by: vec!["Ana".to_string(), "Ana".to_string()],
        };
        persist_ledger(&path, &doubled).await.unwrap();
        assert_eq!(load_ledger_for_month(&path, 9).await.unwrap(), fresh_ledger(9));

        let mut full = fresh_ledger(9);
        full.days[3] = DayRecord {
            day: 4,
            quota: 5,
            selected_by: ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
        };
        persist_ledger(&path, &full).await.unwrap();
        assert_eq!(load_ledger_for_month(&path, 9).await.unwrap(), full);
        let _ = fs::remove_file(&path).await;
    }

    #[test]
    fn envelope_uses_camel_case_layout() {
        let mut ledger = fresh_ledger(4);
        ledger.days[1].quota = 1;
        ledger.days[1].selected_by.push("Ana".to_string());
        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(value["month"], 4);
        assert_eq!(
            value["days"][1],
            serde_json::json!({ "day": 2, "quota": 1, "selectedBy": ["Ana"] })
        );
    }
}
