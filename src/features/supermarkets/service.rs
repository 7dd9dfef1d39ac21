use crate::features::food::service::validate_trip_day;
use crate::features::supermarkets::models::{SaveSupermarketDto, StorePayment, SupermarketItem};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{
    generate_record_id, non_blank, validate_map_url, validate_required_field,
};

/// 店舗保存用DTOのバリデーション
pub fn validate_supermarket_dto(dto: &SaveSupermarketDto) -> AppResult<()> {
    validate_required_field(&dto.name, "店名")?;
    validate_trip_day(dto.day)?;
    validate_map_url(&dto.map_url)?;
    Ok(())
}

/// 支払い方法の選択を切り替える
///
/// 選択済みなら外し、未選択なら末尾に追加する。
pub fn toggle_payment(methods: &mut Vec<StorePayment>, method: StorePayment) {
    if let Some(index) = methods.iter().position(|m| *m == method) {
        methods.remove(index);
    } else {
        methods.push(method);
    }
}

fn dedup_payments(methods: Vec<StorePayment>) -> Vec<StorePayment> {
    let mut unique = Vec::with_capacity(methods.len());
    for method in methods {
        if !unique.contains(&method) {
            unique.push(method);
        }
    }
    unique
}

/// 店舗を追加または更新する
///
/// # 引数
/// * `items` - 店舗リスト
/// * `dto` - 店舗保存用DTO
///
/// # 戻り値
/// 保存された店舗、または失敗時はエラー
pub fn upsert_supermarket(
    items: &mut Vec<SupermarketItem>,
    dto: SaveSupermarketDto,
) -> AppResult<SupermarketItem> {
    validate_supermarket_dto(&dto)?;

    let id = non_blank(dto.id.clone());
    let item = SupermarketItem {
        id: id.clone().unwrap_or_else(generate_record_id),
        name: dto.name.trim().to_string(),
        store_type: dto.store_type,
        opening_hours: dto.opening_hours.trim().to_string(),
        payment_methods: dedup_payments(dto.payment_methods),
        description: dto.description.trim().to_string(),
        map_url: dto.map_url.trim().to_string(),
        day: dto.day,
        travel_time: non_blank(dto.travel_time),
        travel_distance: non_blank(dto.travel_distance),
    };

    match id {
        Some(id) => {
            let existing = items
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::not_found(format!("店舗（id={id}）")))?;
            *existing = item.clone();
        }
        None => items.push(item.clone()),
    }

    Ok(item)
}

/// 店舗を削除する
pub fn delete_supermarket(items: &mut Vec<SupermarketItem>, id: &str) -> AppResult<()> {
    let index = items
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("店舗（id={id}）")))?;
    items.remove(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::supermarkets::defaults::initial_supermarkets;
    use crate::features::supermarkets::models::StoreType;

    fn draft(name: &str) -> SaveSupermarketDto {
        SaveSupermarketDto {
            name: name.to_string(),
            store_type: StoreType::ConvenienceStore,
            day: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_payment() {
        let mut methods = vec![StorePayment::Cash];

        toggle_payment(&mut methods, StorePayment::PayPay);
        assert_eq!(methods, vec![StorePayment::Cash, StorePayment::PayPay]);

        toggle_payment(&mut methods, StorePayment::Cash);
        assert_eq!(methods, vec![StorePayment::PayPay]);
    }

    #[test]
    fn test_upsert_dedups_payments() {
        let mut items = Vec::new();
        let mut dto = draft("Lawson");
        dto.payment_methods = vec![StorePayment::Cash, StorePayment::Cash];

        let saved = upsert_supermarket(&mut items, dto).unwrap();
        assert_eq!(saved.payment_methods, vec![StorePayment::Cash]);
    }

    #[test]
    fn test_edit_and_delete() {
        let mut items = initial_supermarkets();
        let total = items.len();
        let id = items[1].id.clone();

        let mut dto = draft("FamilyMart 改");
        dto.id = Some(id.clone());
        upsert_supermarket(&mut items, dto).unwrap();
        assert_eq!(items.len(), total);
        assert_eq!(items[1].name, "FamilyMart 改");

        delete_supermarket(&mut items, &id).unwrap();
        assert_eq!(items.len(), total - 1);
        assert!(items.iter().all(|s| s.id != id));
    }

    #[test]
    fn test_invalid_drafts() {
        let mut items = Vec::new();
        assert!(upsert_supermarket(&mut items, draft("")).is_err());

        let mut dto = draft("x");
        dto.day = 7;
        assert!(upsert_supermarket(&mut items, dto).is_err());
        assert!(items.is_empty());
    }
}
