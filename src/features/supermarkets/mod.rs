/// 補給店舗機能モジュール
///
/// 飯店周辺のスーパー・コンビニ・ドラッグストアの一覧を管理する。
#[cfg(feature = "desktop")]
pub mod commands;
pub mod defaults;
pub mod models;
pub mod service;

pub use models::{SaveSupermarketDto, StorePayment, StoreType, SupermarketItem};
pub use service::{delete_supermarket, toggle_payment, upsert_supermarket};
