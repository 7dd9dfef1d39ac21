/// 旅行概要（表示専用の参照データ）
///
/// 航班・行李、航空安全提醒、飯店資訊、自駕守則を提供する。
#[cfg(feature = "desktop")]
pub mod commands;

use crate::shared::utils::google_maps_search_url;
use serde::Serialize;

/// 航班
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// 表示用の日付（例: "1/11"）
    pub date: String,
    pub flight_no: String,
    /// 去程 / 回程
    pub leg: String,
    pub from: String,
    pub departs: String,
    pub to: String,
    pub arrives: String,
    pub checked_baggage_kg: u32,
    pub cabin_baggage_kg: u32,
}

/// 飯店資訊
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCard {
    pub name: String,
    pub tagline: String,
    pub map_url: String,
    pub amenities: Vec<String>,
}

/// 旅行概要
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOverview {
    /// 例: "2026.01.11 - 01.14 Staff Trip"
    pub trip_label: String,
    pub flights: Vec<Flight>,
    pub safety_reminders: Vec<String>,
    pub hotel: HotelCard,
    pub driving_rules: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
fn flight(
    date: &str,
    flight_no: &str,
    leg: &str,
    from: &str,
    departs: &str,
    to: &str,
    arrives: &str,
    checked_baggage_kg: u32,
) -> Flight {
    Flight {
        date: date.to_string(),
        flight_no: flight_no.to_string(),
        leg: leg.to_string(),
        from: from.to_string(),
        departs: departs.to_string(),
        to: to.to_string(),
        arrives: arrives.to_string(),
        checked_baggage_kg,
        cabin_baggage_kg: 7,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 旅行概要を取得する
pub fn trip_overview() -> TripOverview {
    TripOverview {
        trip_label: "2026.01.11 - 01.14 Staff Trip".to_string(),
        flights: vec![
            flight("1/11", "FD230", "去程", "TPE", "13:30", "OKA", "15:55", 20),
            flight("1/14", "BR185", "回程", "OKA", "20:20", "TPE", "21:10", 23),
        ],
        safety_reminders: strings(&["行動電源 (嚴禁托運)", "打火機 (限一隨身)"]),
        hotel: HotelCard {
            name: "那霸逸之彩飯店".to_string(),
            tagline: "牧志站 1 分鐘 / 拉麵啤酒 Happy Hour".to_string(),
            map_url: google_maps_search_url("Okinawa+Hinode+Hotel"),
            amenities: strings(&["早餐 06:30+", "宵夜拉麵 20:30+", "啤酒暢飲 10-22h", "24h 洗衣"]),
        },
        driving_rules: strings(&[
            "靠左行駛",
            "必停三秒",
            "禁止手機",
            "嚴禁酒駕",
            "地圖優先",
            "遵守速限",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flights() {
        let overview = trip_overview();
        let outbound = &overview.flights[0];
        assert_eq!(outbound.flight_no, "FD230");
        assert_eq!((outbound.departs.as_str(), outbound.arrives.as_str()), ("13:30", "15:55"));
        assert_eq!(outbound.checked_baggage_kg, 20);

        let inbound = &overview.flights[1];
        assert_eq!(inbound.flight_no, "BR185");
        assert_eq!(inbound.from, "OKA");
        assert_eq!(inbound.checked_baggage_kg, 23);
        assert_eq!(inbound.cabin_baggage_kg, 7);
    }

    #[test]
    fn test_reference_tables() {
        let overview = trip_overview();
        assert_eq!(overview.driving_rules.len(), 6);
        assert_eq!(overview.hotel.amenities.len(), 4);
        assert!(overview.hotel.map_url.ends_with("Okinawa+Hinode+Hotel"));
    }
}
