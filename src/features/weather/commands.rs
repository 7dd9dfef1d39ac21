use crate::features::weather::{refresh_forecast, WeatherForecast, WeatherRefresh};
use crate::AppState;
use tauri::State;

/// 天気予報を取得する
#[tauri::command]
pub async fn get_weather(state: State<'_, AppState>) -> Result<Vec<WeatherForecast>, String> {
    state
        .read_trip(|trip| trip.weather.clone())
        .map_err(|e| e.into())
}

/// 天気予報を更新する
///
/// 外部サービスが未設定なら同梱の予報に戻し、失敗した場合は元の予報を保持する。
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新結果、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn refresh_weather(state: State<'_, AppState>) -> Result<WeatherRefresh, String> {
    refresh_forecast(&state).await.map_err(|e| e.into())
}
