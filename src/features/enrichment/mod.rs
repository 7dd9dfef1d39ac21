/// 外部補完機能モジュール
///
/// 交通見積もりと天気予報の取得を差し替え可能なポートとして扱う。
/// 呼び出しは別スレッドで行い、タイムアウトを設ける。結果は
/// `EnrichmentOutcome` で返し、記録データは外部サービスの有無に依存しない。
pub mod ports;

use crate::features::weather::models::WeatherForecast;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub use ports::{
    ForecastProvider, TrafficEstimator, UnavailableForecastProvider, UnavailableTrafficEstimator,
};

/// 交通見積もりに必要な住所の最小文字数
pub const MIN_ADDRESS_CHARS: usize = 5;

/// 外部補完の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum EnrichmentOutcome<T> {
    /// 取得できた
    Ready(T),
    /// サービス未設定、または前提条件を満たさない
    Unavailable,
    /// 呼び出し失敗・タイムアウト・応答形式の不一致
    Failed(String),
}

/// 交通見積もり
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// 例: "45 min"
    pub time: String,
    /// 例: "12.5 km"
    pub distance: String,
}

/// 交通見積もり応答の形式を検証する
///
/// # 引数
/// * `raw` - 応答JSON
///
/// # 戻り値
/// `time`と`distance`が空でない文字列であれば見積もり、それ以外はエラー
pub fn parse_travel_estimate(raw: &str) -> AppResult<TravelEstimate> {
    let estimate: TravelEstimate = serde_json::from_str(raw).map_err(|e| {
        AppError::external_service("交通見積もり", format!("応答の形式が正しくありません: {e}"))
    })?;

    let estimate = TravelEstimate {
        time: estimate.time.trim().to_string(),
        distance: estimate.distance.trim().to_string(),
    };

    if estimate.time.is_empty() || estimate.distance.is_empty() {
        return Err(AppError::external_service(
            "交通見積もり",
            "時間または距離が空です",
        ));
    }

    Ok(estimate)
}

/// 天気予報応答の形式を検証する
///
/// # 引数
/// * `raw` - 応答JSON
/// * `expected_days` - 期待する日数
pub fn parse_forecast(raw: &str, expected_days: usize) -> AppResult<Vec<WeatherForecast>> {
    let forecast: Vec<WeatherForecast> = serde_json::from_str(raw).map_err(|e| {
        AppError::external_service("天気予報", format!("応答の形式が正しくありません: {e}"))
    })?;

    if forecast.len() != expected_days {
        return Err(AppError::external_service(
            "天気予報",
            format!("日数が一致しません（期待: {expected_days}、実際: {}）", forecast.len()),
        ));
    }

    Ok(forecast)
}

/// ブロッキングな外部呼び出しを別スレッドで実行し、結果を検証する
///
/// # 引数
/// * `label` - ログ用の名前
/// * `timeout` - タイムアウト
/// * `call` - 外部呼び出し（未設定の場合はOk(None)）
/// * `parse` - 応答の検証
async fn run_with_timeout<T, C, P>(label: &str, timeout: Duration, call: C, parse: P) -> EnrichmentOutcome<T>
where
    C: FnOnce() -> AppResult<Option<String>> + Send + 'static,
    P: FnOnce(&str) -> AppResult<T>,
{
    let handle = tokio::task::spawn_blocking(call);

    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(Ok(Some(raw)))) => match parse(&raw) {
            Ok(value) => EnrichmentOutcome::Ready(value),
            Err(e) => {
                log::warn!("{label}: {}", e.details());
                EnrichmentOutcome::Failed(e.user_message().to_string())
            }
        },
        Ok(Ok(Ok(None))) => {
            log::debug!("{label}: サービスが設定されていません");
            EnrichmentOutcome::Unavailable
        }
        Ok(Ok(Err(e))) => {
            log::warn!("{label}: 呼び出しに失敗しました: {}", e.details());
            EnrichmentOutcome::Failed(e.user_message().to_string())
        }
        Ok(Err(join_error)) => {
            log::error!("{label}: タスクが異常終了しました: {join_error}");
            EnrichmentOutcome::Failed(format!("{label}の処理が異常終了しました"))
        }
        Err(_) => {
            log::warn!("{label}: タイムアウトしました（> {}s）", timeout.as_secs());
            EnrichmentOutcome::Failed(format!("{label}がタイムアウトしました"))
        }
    }
}

/// 前の地点から現在の住所までの移動を見積もる
///
/// 前の地点がない場合や住所が短すぎる場合は呼び出さずに`Unavailable`を返す。
///
/// # 引数
/// * `estimator` - 交通見積もりサービス
/// * `previous_address` - 前の地点の住所
/// * `address` - 現在の住所
/// * `timeout` - タイムアウト
pub async fn estimate_travel(
    estimator: Arc<dyn TrafficEstimator>,
    previous_address: Option<&str>,
    address: &str,
    timeout: Duration,
) -> EnrichmentOutcome<TravelEstimate> {
    let address = address.trim();
    let Some(previous_address) = previous_address.map(str::trim).filter(|a| !a.is_empty()) else {
        return EnrichmentOutcome::Unavailable;
    };
    if address.chars().count() < MIN_ADDRESS_CHARS {
        return EnrichmentOutcome::Unavailable;
    }

    let from = previous_address.to_string();
    let to = address.to_string();
    run_with_timeout(
        "交通見積もり",
        timeout,
        move || estimator.estimate(&from, &to),
        parse_travel_estimate,
    )
    .await
}

/// 天気予報を取得する
///
/// # 引数
/// * `provider` - 天気予報サービス
/// * `days` - 日数
/// * `timeout` - タイムアウト
pub async fn fetch_forecast(
    provider: Arc<dyn ForecastProvider>,
    days: usize,
    timeout: Duration,
) -> EnrichmentOutcome<Vec<WeatherForecast>> {
    run_with_timeout(
        "天気予報",
        timeout,
        move || provider.forecast(days),
        |raw| parse_forecast(raw, days),
    )
    .await
}
