/// 天気予報機能モジュール
///
/// 4日間の天気予報を保持し、外部サービスから更新する。
#[cfg(feature = "desktop")]
pub mod commands;
pub mod defaults;
pub mod models;
pub mod service;

pub use models::{TimeWeather, WeatherForecast, WeatherIcon};
pub use service::{apply_refresh, refresh_forecast, RefreshSource, WeatherRefresh};
