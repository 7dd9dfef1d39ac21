/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するモデル、既定データ、操作、コマンドを含む。
pub mod currency;
pub mod enrichment;
pub mod expenses;
pub mod food;
pub mod itinerary;
pub mod overview;
pub mod storage;
pub mod supermarkets;
pub mod trip;
pub mod weather;
