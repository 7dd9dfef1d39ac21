use serde::{Deserialize, Serialize};

/// 天気アイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Moon,
}

/// 時間帯ごとの天気
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWeather {
    /// 気温表示（例: "16°"）
    pub temp: String,
    pub icon: WeatherIcon,
    pub desc: String,
}

/// 1日分の天気予報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    /// 表示用の日付（例: "1/11 (日)"）
    pub date: String,
    pub morning: TimeWeather,
    pub noon: TimeWeather,
    pub night: TimeWeather,
    #[serde(default)]
    pub clothing_tip: String,
}
