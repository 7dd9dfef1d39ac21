use crate::features::trip::{Tab, TripSnapshot, ViewState};
use crate::AppState;
use tauri::State;

/// 画面表示用の旅行データ全体を取得する
///
/// # 戻り値
/// スナップショット、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_trip_state(state: State<'_, AppState>) -> Result<TripSnapshot, String> {
    state.read_trip(|trip| trip.snapshot()).map_err(|e| e.into())
}

/// 表示するタブを切り替える
///
/// # 引数
/// * `tab` - タブ
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn set_active_tab(tab: Tab, state: State<'_, AppState>) -> Result<ViewState, String> {
    state
        .update_trip(&[], |trip| {
            trip.set_active_tab(tab);
            Ok(trip.view)
        })
        .map_err(|e| e.into())
}

/// 表示する日を切り替える
///
/// # 引数
/// * `day` - 日（行程に存在する日のみ）
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn select_day(day: u8, state: State<'_, AppState>) -> Result<ViewState, String> {
    state
        .update_trip(&[], |trip| {
            trip.select_day(day)?;
            Ok(trip.view)
        })
        .map_err(|e| e.into())
}
