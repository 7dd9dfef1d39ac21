use crate::features::enrichment::{EnrichmentOutcome, TravelEstimate};
use crate::features::itinerary::{models::*, service};
use crate::features::storage::StorageKey;
use crate::AppState;
use tauri::State;

/// 景點を追加または更新する
///
/// # 引数
/// * `day` - 対象の日
/// * `dto` - 景點保存用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新後のその日の行程、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn save_spot(
    day: u8,
    dto: SaveSpotDto,
    state: State<'_, AppState>,
) -> Result<DayPlan, String> {
    state
        .update_trip(&[StorageKey::Itinerary], |trip| {
            service::upsert_spot(&mut trip.itinerary, day, dto)?;
            service::find_day(&trip.itinerary, day).cloned()
        })
        .map_err(|e| e.into())
}

/// 景點を削除する
///
/// # 引数
/// * `day` - 対象の日
/// * `spot_id` - 景點ID
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn delete_spot(
    day: u8,
    spot_id: String,
    state: State<'_, AppState>,
) -> Result<DayPlan, String> {
    state
        .update_trip(&[StorageKey::Itinerary], |trip| {
            service::delete_spot(&mut trip.itinerary, day, &spot_id)?;
            service::find_day(&trip.itinerary, day).cloned()
        })
        .map_err(|e| e.into())
}

/// 日ごとの見出し情報を更新する
#[tauri::command]
pub async fn update_day(
    day: u8,
    dto: UpdateDayDto,
    state: State<'_, AppState>,
) -> Result<DayPlan, String> {
    state
        .update_trip(&[StorageKey::Itinerary], |trip| {
            service::update_day(&mut trip.itinerary, day, dto)
        })
        .map_err(|e| e.into())
}

/// 直前の景點から入力中の住所までの移動を見積もる
///
/// 結果は編集フォームへの提案であり、行程には保存しない。
///
/// # 引数
/// * `day` - 対象の日
/// * `time` - 入力中の時刻
/// * `address` - 入力中の住所
/// * `spot_id` - 編集中の景點ID（新規の場合はNone）
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn estimate_spot_travel(
    day: u8,
    time: String,
    address: String,
    spot_id: Option<String>,
    state: State<'_, AppState>,
) -> Result<EnrichmentOutcome<TravelEstimate>, String> {
    service::estimate_from_previous_spot(&state, day, &time, &address, spot_id.as_deref())
        .await
        .map_err(|e| e.into())
}
