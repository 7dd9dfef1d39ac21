use crate::features::storage::StorageKey;
use crate::features::supermarkets::{models::*, service};
use crate::AppState;
use tauri::State;

/// 店舗を追加または更新する
///
/// # 引数
/// * `dto` - 店舗保存用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 保存された店舗、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn save_supermarket(
    dto: SaveSupermarketDto,
    state: State<'_, AppState>,
) -> Result<SupermarketItem, String> {
    state
        .update_trip(&[StorageKey::Supermarkets], |trip| {
            service::upsert_supermarket(&mut trip.supermarkets, dto)
        })
        .map_err(|e| e.into())
}

/// 店舗を削除する
#[tauri::command]
pub async fn delete_supermarket(id: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .update_trip(&[StorageKey::Supermarkets], |trip| {
            service::delete_supermarket(&mut trip.supermarkets, &id)
        })
        .map_err(|e| e.into())
}

/// 編集フォームの支払い方法の選択を切り替える
///
/// # 引数
/// * `methods` - 現在の選択
/// * `method` - 切り替える支払い方法
///
/// # 戻り値
/// 切り替え後の選択
#[tauri::command]
pub async fn toggle_supermarket_payment(
    methods: Vec<StorePayment>,
    method: StorePayment,
) -> Result<Vec<StorePayment>, String> {
    let mut methods = methods;
    service::toggle_payment(&mut methods, method);
    Ok(methods)
}
