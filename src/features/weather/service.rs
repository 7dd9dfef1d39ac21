use crate::features::enrichment::{fetch_forecast, EnrichmentOutcome};
use crate::features::itinerary::defaults::TRIP_DAYS;
use crate::features::storage::StorageKey;
use crate::features::weather::defaults::initial_weather;
use crate::features::weather::models::WeatherForecast;
use crate::shared::errors::AppResult;
use crate::AppState;
use serde::Serialize;

/// 天気予報の更新元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshSource {
    /// 外部サービスの予報に置き換えた
    Provider,
    /// 同梱の既定予報に戻した
    Bundled,
    /// 取得に失敗したため元の予報のまま
    Unchanged,
}

/// 天気予報の更新結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRefresh {
    pub source: RefreshSource,
    pub forecast: Vec<WeatherForecast>,
    /// 失敗時の理由
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WeatherRefresh {
    /// 保存が必要かどうか
    pub fn changed(&self) -> bool {
        self.source != RefreshSource::Unchanged
    }
}

/// 外部サービスの結果を天気予報に反映する
///
/// - 取得できた場合: その予報に置き換える
/// - サービス未設定の場合: 同梱の既定予報に戻す
/// - 失敗した場合: 元の予報を保持する
///
/// # 引数
/// * `current` - 現在の天気予報
/// * `outcome` - 外部サービスの結果
pub fn apply_refresh(
    current: &mut Vec<WeatherForecast>,
    outcome: EnrichmentOutcome<Vec<WeatherForecast>>,
) -> WeatherRefresh {
    let (source, message) = match outcome {
        EnrichmentOutcome::Ready(forecast) => {
            *current = forecast;
            (RefreshSource::Provider, None)
        }
        EnrichmentOutcome::Unavailable => {
            *current = initial_weather();
            (RefreshSource::Bundled, None)
        }
        EnrichmentOutcome::Failed(message) => {
            log::warn!("天気予報の更新に失敗したため既存の予報を保持します: {message}");
            (RefreshSource::Unchanged, Some(message))
        }
    };

    WeatherRefresh {
        source,
        forecast: current.clone(),
        message,
    }
}

/// 外部サービスから天気予報を取得して反映する
///
/// 予報が変わった場合のみ保存する。
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新結果、または保存失敗時はエラー
pub async fn refresh_forecast(state: &AppState) -> AppResult<WeatherRefresh> {
    let outcome = fetch_forecast(
        state.forecast_provider.clone(),
        usize::from(TRIP_DAYS),
        state.config.enrichment_timeout,
    )
    .await;

    state.update_trip_when(
        |trip| Ok(apply_refresh(&mut trip.weather, outcome)),
        |refresh| {
            if refresh.changed() {
                vec![StorageKey::Weather]
            } else {
                Vec::new()
            }
        },
    )
}
