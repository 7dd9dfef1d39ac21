use crate::features::food::{models::*, service};
use crate::features::storage::StorageKey;
use crate::AppState;
use tauri::State;

/// 美食推薦を追加または更新する
///
/// # 引数
/// * `dto` - 美食保存用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 保存された美食推薦、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn save_food(dto: SaveFoodDto, state: State<'_, AppState>) -> Result<FoodItem, String> {
    state
        .update_trip(&[StorageKey::Food], |trip| {
            service::upsert_food(&mut trip.food, dto)
        })
        .map_err(|e| e.into())
}

/// 美食推薦を削除する
#[tauri::command]
pub async fn delete_food(id: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .update_trip(&[StorageKey::Food], |trip| {
            service::delete_food(&mut trip.food, &id)
        })
        .map_err(|e| e.into())
}

/// 美食推薦一覧を取得する
///
/// # 引数
/// * `day` - 日フィルター（オプション）
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn get_food(day: Option<u8>, state: State<'_, AppState>) -> Result<Vec<FoodItem>, String> {
    state
        .read_trip(|trip| service::list_food(&trip.food, day))
        .map_err(|e| e.into())
}

/// IG hashtag検索カードを取得する
#[tauri::command]
pub async fn get_area_searches(state: State<'_, AppState>) -> Result<Vec<AreaSearchCard>, String> {
    state
        .read_trip(|trip| service::area_searches(&trip.food))
        .map_err(|e| e.into())
}
