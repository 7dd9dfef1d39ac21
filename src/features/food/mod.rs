/// 美食推薦機能モジュール
///
/// - 美食推薦の追加・更新・削除と日ごとの絞り込み
/// - 區域搜尋項目からのIG hashtag検索カードの生成
#[cfg(feature = "desktop")]
pub mod commands;
pub mod defaults;
pub mod models;
pub mod service;

pub use models::{AreaSearchCard, FoodItem, SaveFoodDto, AREA_SEARCH_TYPE};
pub use service::{area_searches, delete_food, instagram_hashtag_url, list_food, upsert_food};
