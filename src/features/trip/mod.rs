/// 旅行データと画面状態
///
/// すべてのコレクションと表示状態、換算ガイドの計算機をまとめて保持する。
#[cfg(feature = "desktop")]
pub mod commands;
pub mod state;
pub mod view;

pub use state::{TripSnapshot, TripState};
pub use view::{Tab, ViewState};
