use crate::features::overview::{trip_overview, TripOverview};

/// 旅行概要（航班・飯店・自駕守則）を取得する
#[tauri::command]
pub async fn get_trip_overview() -> Result<TripOverview, String> {
    Ok(trip_overview())
}
