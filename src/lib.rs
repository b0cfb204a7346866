pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod sheet;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use sheet::SignupSheet;
pub use state::AppState;
pub use storage::{load_ledger, resolve_data_path};
