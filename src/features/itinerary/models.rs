use serde::{Deserialize, Serialize};

/// 景點のカテゴリ
///
/// 直列化は画面表示と同じラベルを使う。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotCategory {
    #[serde(rename = "食物")]
    Food,
    #[serde(rename = "活動")]
    Activity,
    #[serde(rename = "購物")]
    Shopping,
    #[serde(rename = "景點")]
    #[default]
    Sights,
    #[serde(rename = "酒店")]
    Hotel,
    #[serde(rename = "交通")]
    Transport,
}

impl SpotCategory {
    pub const ALL: [SpotCategory; 6] = [
        SpotCategory::Food,
        SpotCategory::Activity,
        SpotCategory::Shopping,
        SpotCategory::Sights,
        SpotCategory::Hotel,
        SpotCategory::Transport,
    ];

    /// 表示ラベル
    pub fn label(self) -> &'static str {
        match self {
            SpotCategory::Food => "食物",
            SpotCategory::Activity => "活動",
            SpotCategory::Shopping => "購物",
            SpotCategory::Sights => "景點",
            SpotCategory::Hotel => "酒店",
            SpotCategory::Transport => "交通",
        }
    }
}

/// 行程の1地点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: String,
    /// HH:MM
    pub time: String,
    pub category: SpotCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_tips: Option<String>,
    #[serde(default)]
    pub group_friendly: bool,
    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_pending_payment: bool,
    #[serde(default, rename = "showQRCode")]
    pub show_qr_code: bool,
    /// 前の地点からの移動時間（例: "45 min"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
    /// 前の地点からの移動距離（例: "12.5 km"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_distance: Option<String>,
}

/// 1日分の行程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u8,
    /// 表示用の日付（例: "2026/1/11 (日)"）
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub clothing_tips: String,
    #[serde(default)]
    pub weather_tips: String,
    #[serde(default)]
    pub spots: Vec<Spot>,
}

/// 景點保存用DTO（idなしで新規作成、idありで既存の置き換え）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSpotDto {
    pub id: Option<String>,
    pub time: String,
    #[serde(default)]
    pub category: SpotCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub address: String,
    pub parking_info: Option<String>,
    pub gas_info: Option<String>,
    pub photo_tips: Option<String>,
    #[serde(default)]
    pub group_friendly: bool,
    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_pending_payment: bool,
    #[serde(default, rename = "showQRCode")]
    pub show_qr_code: bool,
    pub travel_time: Option<String>,
    pub travel_distance: Option<String>,
}

/// 日ごとの見出し情報の更新用DTO（指定された項目のみ更新）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDayDto {
    pub date: Option<String>,
    pub title: Option<String>,
    pub clothing_tips: Option<String>,
    pub weather_tips: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_category_serializes_as_label() {
        for category in SpotCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_spot_deserializes_stored_layout() {
        let json = r#"{
            "id": "1-1",
            "time": "16:50",
            "category": "交通",
            "name": "OTS 租車",
            "description": "辦理手續",
            "tags": ["核對護照"],
            "mapUrl": "https://www.google.com/maps/search/?api=1&query=OTS",
            "address": "3-37 Toyosaki",
            "gasInfo": "隔壁有加油站",
            "showQRCode": true,
            "travelTime": "5 min",
            "travelDistance": "1.5 km"
        }"#;

        let spot: Spot = serde_json::from_str(json).unwrap();
        assert_eq!(spot.category, SpotCategory::Transport);
        assert_eq!(spot.gas_info.as_deref(), Some("隔壁有加油站"));
        assert!(spot.show_qr_code);
        assert!(!spot.is_paid);
        assert_eq!(spot.parking_info, None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"id":"x","time":"10:00","category":"露營","name":"n"}"#;
        assert!(serde_json::from_str::<Spot>(json).is_err());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let spot = Spot {
            id: "a".into(),
            time: "10:00".into(),
            category: SpotCategory::Sights,
            name: "波上宮".into(),
            description: String::new(),
            tags: vec![],
            map_url: String::new(),
            address: String::new(),
            parking_info: None,
            gas_info: None,
            photo_tips: None,
            group_friendly: false,
            is_reserved: false,
            is_paid: false,
            is_pending_payment: false,
            show_qr_code: false,
            travel_time: None,
            travel_distance: None,
        };
        let json = serde_json::to_string(&spot).unwrap();
        assert!(!json.contains("parkingInfo"));
        assert!(json.contains("\"showQRCode\":false"));
    }
}
