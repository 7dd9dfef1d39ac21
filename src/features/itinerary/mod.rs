/// 行程機能モジュール
///
/// - 4日間の行程（日ごとの見出しと景點リスト）
/// - 景點の追加・更新・削除（時刻順を維持）
/// - 交通見積もり用の直前の景點の取得
#[cfg(feature = "desktop")]
pub mod commands;
pub mod defaults;
pub mod models;
pub mod service;

pub use models::{DayPlan, SaveSpotDto, Spot, SpotCategory, UpdateDayDto};
pub use service::{delete_spot, find_day, previous_spot, update_day, upsert_spot};
