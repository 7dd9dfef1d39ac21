use serde::{Deserialize, Serialize};

/// IG検索カードとして扱う種類ラベル
pub const AREA_SEARCH_TYPE: &str = "區域搜尋";

/// 美食推薦
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    /// 種類ラベル（名店、小吃、區域搜尋 など）
    #[serde(rename = "type")]
    pub food_type: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub group_friendly: bool,
    pub day: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended: String,
}

impl FoodItem {
    /// IG検索カードかどうか
    pub fn is_area_search(&self) -> bool {
        self.food_type == AREA_SEARCH_TYPE
    }
}

/// 美食保存用DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFoodDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", default = "default_food_type")]
    pub food_type: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub group_friendly: bool,
    #[serde(default = "default_day")]
    pub day: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended: String,
}

fn default_food_type() -> String {
    "名店".to_string()
}

fn default_day() -> u8 {
    1
}

impl Default for SaveFoodDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            food_type: default_food_type(),
            time: String::new(),
            map_url: String::new(),
            tags: Vec::new(),
            group_friendly: false,
            day: default_day(),
            description: String::new(),
            recommended: String::new(),
        }
    }
}

/// IG hashtag検索カード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSearchCard {
    pub id: String,
    pub day: u8,
    pub name: String,
    /// 表示用ハッシュタグ（例: "#國際通美食"）
    pub hashtag: String,
    pub instagram_url: String,
}
