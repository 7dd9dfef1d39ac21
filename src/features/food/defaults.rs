use crate::features::food::models::{FoodItem, AREA_SEARCH_TYPE};
use crate::shared::utils::google_maps_search_url;

/// 同梱の美食推薦リストを生成する
///
/// 各日の宿泊・観光エリアごとのIG検索カードと、いくつかの名店を含む。
pub fn initial_food() -> Vec<FoodItem> {
    vec![
        area_search("food-1", 1, "國際通周邊", "國際通", "Kokusai+Dori+Naha"),
        area_search("food-2", 2, "古宇利・本部", "本部町", "Motobu+Okinawa"),
        area_search("food-3", 3, "北谷美國村", "北谷", "American+Village+Chatan"),
        area_search("food-4", 4, "系滿・瀨長島", "瀨長島", "Senagajima+Umikaji+Terrace"),
        FoodItem {
            id: "food-5".to_string(),
            name: "暖暮拉麵 牧志店".to_string(),
            food_type: "名店".to_string(),
            time: "11:00-02:00".to_string(),
            map_url: google_maps_search_url("Danbo+Ramen+Makishi"),
            tags: vec!["九州拉麵".to_string(), "排隊名店".to_string()],
            group_friendly: false,
            day: 1,
            description: "飯店步行可達，適合抵達當晚的宵夜。".to_string(),
            recommended: "招牌拉麵加溏心蛋".to_string(),
        },
        FoodItem {
            id: "food-6".to_string(),
            name: "A&W 牧港店".to_string(),
            food_type: "小吃".to_string(),
            time: "24h".to_string(),
            map_url: google_maps_search_url("A%26W+Makiminato"),
            tags: vec!["沖繩限定".to_string(), "得來速".to_string()],
            group_friendly: true,
            day: 3,
            description: "美式速食，座位多，大人數也好安排。".to_string(),
            recommended: "Mozza Burger、麥根沙士".to_string(),
        },
    ]
}

fn area_search(id: &str, day: u8, name: &str, tag: &str, map_query: &str) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        food_type: AREA_SEARCH_TYPE.to_string(),
        time: String::new(),
        map_url: google_maps_search_url(map_query),
        tags: vec![tag.to_string()],
        group_friendly: true,
        day,
        description: String::new(),
        recommended: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_has_an_area_search() {
        let food = initial_food();
        for day in 1..=4 {
            assert!(food.iter().any(|f| f.day == day && f.is_area_search()));
        }
        assert!(food
            .iter()
            .filter(|f| f.is_area_search())
            .all(|f| !f.tags.is_empty()));
    }
}
