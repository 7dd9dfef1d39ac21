use crate::features::supermarkets::models::{StorePayment, StoreType, SupermarketItem};
use crate::shared::utils::google_maps_search_url;

/// 同梱の補給店舗リストを生成する（那霸逸之彩飯店周辺）
pub fn initial_supermarkets() -> Vec<SupermarketItem> {
    use StorePayment::*;

    vec![
        store(
            "shop-1",
            "MaxValu 牧志店",
            StoreType::Supermarket,
            "24h",
            &[Cash, CreditCard, TransitIc],
            "熟食便當晚上打折，適合買早餐和飲料。",
            "MaxValu+Makishi",
            1,
        ),
        store(
            "shop-2",
            "FamilyMart 牧志站前店",
            StoreType::ConvenienceStore,
            "24h",
            &[Cash, CreditCard, PayPay, TransitIc],
            "飯店旁邊，宵夜與冰品補給。",
            "FamilyMart+Makishi+Station",
            1,
        ),
        store(
            "shop-3",
            "大國藥妝 國際通店",
            StoreType::Drugstore,
            "09:00-23:00",
            &[Cash, CreditCard, PayPay],
            "滿額免稅，記得帶護照。",
            "Daikoku+Drug+Kokusai+Dori",
            3,
        ),
        store(
            "shop-4",
            "唐吉訶德 國際通店",
            StoreType::Drugstore,
            "24h",
            &[Cash, CreditCard, PayPay],
            "伴手禮與零食一次買齊，深夜也營業。",
            "Don+Quijote+Kokusai+Dori",
            4,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn store(
    id: &str,
    name: &str,
    store_type: StoreType,
    opening_hours: &str,
    payment_methods: &[StorePayment],
    description: &str,
    map_query: &str,
    day: u8,
) -> SupermarketItem {
    SupermarketItem {
        id: id.to_string(),
        name: name.to_string(),
        store_type,
        opening_hours: opening_hours.to_string(),
        payment_methods: payment_methods.to_vec(),
        description: description.to_string(),
        map_url: google_maps_search_url(map_query),
        day,
        travel_time: None,
        travel_distance: None,
    }
}
