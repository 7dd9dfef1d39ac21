use crate::features::food::models::{AreaSearchCard, FoodItem, SaveFoodDto};
use crate::features::itinerary::defaults::TRIP_DAYS;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{
    generate_record_id, non_blank, normalize_tags, validate_map_url, validate_required_field,
    validate_text_length,
};

const INSTAGRAM_TAG_URL: &str = "https://www.instagram.com/explore/tags/";

/// 美食保存用DTOのバリデーション
pub fn validate_food_dto(dto: &SaveFoodDto) -> AppResult<()> {
    validate_required_field(&dto.name, "料理名")?;
    validate_text_length(&dto.name, 100, "料理名")?;
    validate_required_field(&dto.food_type, "種類")?;
    validate_trip_day(dto.day)?;
    validate_map_url(&dto.map_url)?;
    Ok(())
}

/// 旅行日（1〜4）のバリデーション
pub fn validate_trip_day(day: u8) -> AppResult<()> {
    if !(1..=TRIP_DAYS).contains(&day) {
        return Err(AppError::validation(format!(
            "日程は1〜{TRIP_DAYS}日目で指定してください"
        )));
    }
    Ok(())
}

/// 美食推薦を追加または更新する
///
/// # 引数
/// * `items` - 美食リスト
/// * `dto` - 美食保存用DTO
///
/// # 戻り値
/// 保存された美食推薦、または失敗時はエラー
pub fn upsert_food(items: &mut Vec<FoodItem>, dto: SaveFoodDto) -> AppResult<FoodItem> {
    validate_food_dto(&dto)?;

    let id = non_blank(dto.id.clone());
    let item = FoodItem {
        id: id.clone().unwrap_or_else(generate_record_id),
        name: dto.name.trim().to_string(),
        food_type: dto.food_type.trim().to_string(),
        time: dto.time.trim().to_string(),
        map_url: dto.map_url.trim().to_string(),
        tags: normalize_tags(dto.tags),
        group_friendly: dto.group_friendly,
        day: dto.day,
        description: dto.description.trim().to_string(),
        recommended: dto.recommended.trim().to_string(),
    };

    match id {
        Some(id) => {
            let existing = items
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| AppError::not_found(format!("グルメ（id={id}）")))?;
            *existing = item.clone();
        }
        None => items.push(item.clone()),
    }

    Ok(item)
}

/// 美食推薦を削除する
pub fn delete_food(items: &mut Vec<FoodItem>, id: &str) -> AppResult<()> {
    let before = items.len();
    items.retain(|f| f.id != id);
    if items.len() == before {
        return Err(AppError::not_found(format!("グルメ（id={id}）")));
    }
    Ok(())
}

/// 美食推薦を日で絞り込む（Noneの場合はすべて）
pub fn list_food(items: &[FoodItem], day: Option<u8>) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|f| day.map_or(true, |d| f.day == d))
        .cloned()
        .collect()
}

/// IG hashtag検索のURLを組み立てる
///
/// # 引数
/// * `tag` - 地域タグ（"美食"を付けてエンコードする）
pub fn instagram_hashtag_url(tag: &str) -> String {
    format!(
        "{INSTAGRAM_TAG_URL}{}/",
        urlencoding::encode(&format!("{tag}美食"))
    )
}

/// 區域搜尋の美食推薦をIG検索カードに変換する
///
/// タグのない項目は検索語を作れないため除外する。
pub fn area_searches(items: &[FoodItem]) -> Vec<AreaSearchCard> {
    items
        .iter()
        .filter(|f| f.is_area_search())
        .filter_map(|f| {
            let tag = f.tags.first()?;
            Some(AreaSearchCard {
                id: f.id.clone(),
                day: f.day,
                name: f.name.clone(),
                hashtag: format!("#{tag}美食"),
                instagram_url: instagram_hashtag_url(tag),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::food::defaults::initial_food;
    use crate::features::food::models::AREA_SEARCH_TYPE;

    fn draft(name: &str, day: u8) -> SaveFoodDto {
        SaveFoodDto {
            name: name.to_string(),
            day,
            ..Default::default()
        }
    }

    #[test]
    fn test_instagram_hashtag_url_is_encoded() {
        assert_eq!(
            instagram_hashtag_url("北谷"),
            "https://www.instagram.com/explore/tags/%E5%8C%97%E8%B0%B7%E7%BE%8E%E9%A3%9F/"
        );
    }

    #[test]
    fn test_area_searches_only_include_area_type() {
        let mut items = initial_food();
        let area_count = items.iter().filter(|f| f.is_area_search()).count();

        let mut dto = draft("沒有標籤", 2);
        dto.food_type = AREA_SEARCH_TYPE.to_string();
        upsert_food(&mut items, dto).unwrap();

        let cards = area_searches(&items);
        assert_eq!(cards.len(), area_count);
        assert!(cards.iter().all(|c| c.instagram_url.ends_with('/')));
        assert_eq!(cards[0].hashtag, "#國際通美食");
    }

    #[test]
    fn test_upsert_create_and_edit() {
        let mut items = Vec::new();
        let created = upsert_food(&mut items, draft("花笠食堂", 1)).unwrap();
        assert_eq!(items.len(), 1);

        let mut dto = draft("花笠食堂 本店", 2);
        dto.id = Some(created.id.clone());
        let edited = upsert_food(&mut items, dto).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(edited.id, created.id);
        assert_eq!(items[0].day, 2);
    }

    #[test]
    fn test_invalid_day_is_rejected() {
        let mut items = Vec::new();
        assert!(upsert_food(&mut items, draft("x", 0)).is_err());
        assert!(upsert_food(&mut items, draft("x", 5)).is_err());
        assert!(items.is_empty());
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let mut items = Vec::new();
        let mut dto = draft("x", 1);
        dto.id = Some("nope".to_string());
        assert!(matches!(
            upsert_food(&mut items, dto),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_and_list() {
        let mut items = initial_food();
        let total = items.len();
        let day1 = list_food(&items, Some(1)).len();
        assert!(day1 > 0);
        assert_eq!(list_food(&items, None).len(), total);

        let id = items[0].id.clone();
        delete_food(&mut items, &id).unwrap();
        assert_eq!(items.len(), total - 1);
        assert!(delete_food(&mut items, &id).is_err());
    }
}
