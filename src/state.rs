use crate::sheet::SignupSheet;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub sheet: Arc<Mutex<SignupSheet>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, sheet: SignupSheet) -> Self {
        Self {
            data_path,
            sheet: Arc::new(Mutex::new(sheet)),
        }
    }
}
