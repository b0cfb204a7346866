use crate::errors::SignupError;
use crate::models::{DayCell, DayRecord, LedgerEnvelope, Phase, SheetResponse};
use tracing::info;

pub const MAX_DAYS_PER_PERSON: usize = 4;
pub const MAX_QUOTA_PER_DAY: u32 = 5;
pub const DAYS_IN_SHEET: u8 = 31;

/// A fresh ledger for `month`: every day present, nobody signed up.
pub fn fresh_ledger(month: u32) -> LedgerEnvelope {
    LedgerEnvelope {
        month,
        days: (1..=DAYS_IN_SHEET).map(DayRecord::empty).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    user: String,
    selected_days: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub cell: DayCell,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user: String,
    pub days: Vec<u8>,
    /// Ledger snapshot to flush to storage.
    pub ledger: LedgerEnvelope,
}

impl Submission {
    pub fn confirmation(&self) -> String {
        let days = self
            .days
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("User: {}\nSelected days: {}", self.user, days)
    }
}

/// In-memory ledger plus the one active picking session.
///
/// Every toggle mutates the ledger immediately; nothing reaches storage until
/// [`SignupSheet::submit`] hands back a snapshot and the caller stores it.
#[derive(Debug, Clone)]
pub struct SignupSheet {
    month: u32,
    days: Vec<DayRecord>,
    session: Option<Session>,
}

impl SignupSheet {
    pub fn new(ledger: LedgerEnvelope) -> Self {
        Self {
            month: ledger.month,
            days: ledger.days,
            session: None,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::Picking
        } else {
            Phase::Idle
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.user.as_str())
    }

    pub fn selected_days(&self) -> &[u8] {
        self.session
            .as_ref()
            .map(|session| session.selected_days.as_slice())
            .unwrap_or_default()
    }

    pub fn ledger(&self) -> LedgerEnvelope {
        LedgerEnvelope {
            month: self.month,
            days: self.days.clone(),
        }
    }

    pub fn start(&mut self, username: &str) -> Result<&str, SignupError> {
        if let Some(session) = &self.session {
            return Err(SignupError::SessionActive(session.user.clone()));
        }

        let username = username.trim();
        if username.is_empty() {
            return Err(SignupError::EmptyName);
        }

        let registered = self
            .days
            .iter()
            .any(|record| record.selected_by.iter().any(|user| user == username));
        if registered {
            return Err(SignupError::AlreadyRegistered(username.to_string()));
        }

        info!(user = username, month = self.month, "session started");
        let session = self.session.insert(Session {
            user: username.to_string(),
            selected_days: Vec::with_capacity(MAX_DAYS_PER_PERSON),
        });
        Ok(session.user.as_str())
    }

    pub fn select_day(&mut self, day: u32) -> Result<Toggle, SignupError> {
        let session = self.session.as_mut().ok_or(SignupError::NoActiveSession)?;
        let record = self
            .days
            .iter_mut()
            .find(|record| u32::from(record.day) == day)
            .ok_or(SignupError::UnknownDay(day))?;

        let already_mine = session.selected_days.contains(&record.day);
        if record.quota >= MAX_QUOTA_PER_DAY && !already_mine {
            return Err(SignupError::QuotaExceeded(record.day));
        }

        if already_mine {
            session.selected_days.retain(|selected| *selected != record.day);
            record.quota = record.quota.saturating_sub(1);
            record.selected_by.retain(|user| *user != session.user);
        } else {
            if session.selected_days.len() >= MAX_DAYS_PER_PERSON {
                return Err(SignupError::PersonalLimitExceeded(MAX_DAYS_PER_PERSON));
            }
            session.selected_days.push(record.day);
            record.quota += 1;
            record.selected_by.push(session.user.clone());
        }

        Ok(Toggle {
            cell: to_cell(record, !already_mine),
            selected: !already_mine,
        })
    }

    /// Checks the active selection and snapshots the ledger to persist.
    /// The session stays open until [`SignupSheet::finish_submit`].
    pub fn submit(&self) -> Result<Submission, SignupError> {
        let session = self.session.as_ref().ok_or(SignupError::NoActiveSession)?;
        if session.selected_days.is_empty() {
            return Err(SignupError::NoSelection);
        }

        Ok(Submission {
            user: session.user.clone(),
            days: session.selected_days.clone(),
            ledger: self.ledger(),
        })
    }

    /// Closes the session once its submission has been stored.
    pub fn finish_submit(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user = %session.user, days = ?session.selected_days, "selection submitted");
        }
    }

    pub fn cells(&self) -> Vec<DayCell> {
        let selected = self.selected_days();
        self.days
            .iter()
            .map(|record| to_cell(record, selected.contains(&record.day)))
            .collect()
    }

    pub fn to_response(&self) -> SheetResponse {
        SheetResponse {
            month: self.month,
            phase: self.phase(),
            current_user: self.current_user().unwrap_or_default().to_string(),
            selected_days: self.selected_days().to_vec(),
            max_days_per_person: MAX_DAYS_PER_PERSON,
            max_quota_per_day: MAX_QUOTA_PER_DAY,
            cells: self.cells(),
        }
    }
}

fn to_cell(record: &DayRecord, selected: bool) -> DayCell {
    DayCell {
        day: record.day,
        quota: record.quota,
        max_quota: MAX_QUOTA_PER_DAY,
        label: format!("({}/{})", record.quota, MAX_QUOTA_PER_DAY),
        disabled: record.quota >= MAX_QUOTA_PER_DAY,
        selected,
    }
}
