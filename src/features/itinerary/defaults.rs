use crate::features::itinerary::models::{DayPlan, Spot, SpotCategory};
use crate::shared::utils::google_maps_search_url;

/// 旅行日数
pub const TRIP_DAYS: u8 = 4;

/// 同梱の初期行程（4日間）を生成する
pub fn initial_itinerary() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day: 1,
            date: "2026/1/11 (日)".to_string(),
            title: "抵達．安頓．那霸夜".to_string(),
            clothing_tips: "1月均溫 15-20°C，建議洋蔥式穿法，晚上海風冷需薄外套。".to_string(),
            weather_tips: "市區高樓風小，但海邊風力較強，體感溫度約低 2 度。".to_string(),
            spots: vec![
                spot(
                    "1-1",
                    "16:50",
                    SpotCategory::Transport,
                    "OTS 租車 (臨空豐崎店)",
                    "抵達機場後搭乘接駁車前往租車處，辦理手續並確認保險。",
                    &["必拍租車合照", "核對護照"],
                    "OTS+Rent+a+Car+Rinku+Toyosaki",
                    "3-37 Toyosaki, Tomigusuku, Okinawa 901-0225日本",
                )
                .parking("租車場內")
                .gas("OTS 隔壁有加油站")
                .travel("5 min", "1.5 km"),
                spot(
                    "1-2",
                    "18:00",
                    SpotCategory::Shopping,
                    "iias 豐崎商場",
                    "超市採買補給品：水、零食、酒精飲品。",
                    &["超市補給", "日系雜貨"],
                    "iias+Okinawa+Toyosaki",
                    "3-35 Toyosaki, Tomigusuku, Okinawa 901-0225日本",
                )
                .parking("商場免費停車場")
                .group_friendly()
                .travel("25 min", "10.2 km"),
                spot(
                    "1-3",
                    "19:30",
                    SpotCategory::Hotel,
                    "沖繩逸之彩飯店",
                    "辦理 Check-in。晚上 20:30 有免費拉麵、啤酒無限暢飲。",
                    &["必喝啤酒", "拉麵宵夜"],
                    "Okinawa+Hinode+Hotel",
                    "3 Chome-18-33 Makishi, Naha, Okinawa 900-0013日本",
                )
                .parking("飯店停車場")
                .photo_tips("大廳的和風燈籠背景很適合拍團體照"),
            ],
        },
        DayPlan {
            day: 2,
            date: "2026/1/12 (一)".to_string(),
            title: "北部．海洋與絕景".to_string(),
            clothing_tips: "北部海邊風大，建議穿著防風外套與好走運動鞋。".to_string(),
            weather_tips: "注意古宇利島海風，建議戴帽子以免頭痛。".to_string(),
            spots: vec![
                spot(
                    "2-0",
                    "08:30",
                    SpotCategory::Hotel,
                    "沖繩逸之彩飯店 (出發)",
                    "吃飽早餐，準備前往北部。",
                    &["元氣早餐"],
                    "Okinawa+Hinode+Hotel",
                    "3 Chome-18-33 Makishi, Naha, Okinawa 900-0013日本",
                )
                .travel("90 min", "82.5 km"),
                spot(
                    "2-1",
                    "10:30",
                    SpotCategory::Sights,
                    "古宇利島南端觀景台",
                    "欣賞跨海大橋最佳視角，感受沖繩藍。",
                    &["絕美海景", "大橋全景"],
                    "Kouri+Island+Observatory",
                    "Kouri, 今歸仁村國頭郡沖繩縣 905-0406日本",
                )
                .travel("5 min", "0.8 km"),
                spot(
                    "2-2",
                    "11:00",
                    SpotCategory::Food,
                    "Shirasa 食堂",
                    "名產海膽炒飯、海膽蓋飯，品嚐在地新鮮海味。",
                    &["海膽炒飯", "必吃午餐"],
                    "Shirasa+Shokudo+Kouri",
                    "176 Kouri, Nakijin, Kunigami District, Okinawa 905-0406日本",
                )
                .parking("附設停車場")
                .travel("30 min", "20.5 km"),
                spot(
                    "2-3",
                    "12:30",
                    SpotCategory::Sights,
                    "美麗海水族館",
                    "巨大黑潮之海，鯨鯊震撼全場。",
                    &["必看鯨鯊", "海豚秀"],
                    "Okinawa+Churaumi+Aquarium",
                    "424 Ishikawa, Motobu, Kunigami District, Okinawa 905-0206日本",
                )
                .parking("P7停車場")
                .travel("65 min", "51.5 km"),
                spot(
                    "2-4",
                    "16:00",
                    SpotCategory::Shopping,
                    "永旺來客夢 AEON Mall",
                    "沖繩最大購物中心。",
                    &["購物衝刺", "Workman"],
                    "AEON+Mall+Okinawa+Rycom",
                    "1番地 Raikamu, Kitanakagusuku, Nakagami District, Okinawa 901-2306日本",
                )
                .group_friendly()
                .travel("35 min", "16.5 km"),
                spot(
                    "2-5",
                    "19:30",
                    SpotCategory::Hotel,
                    "返回逸之彩飯店",
                    "結束北部行程。",
                    &["辛苦了"],
                    "Okinawa+Hinode+Hotel",
                    "3 Chome-18-33 Makishi, Naha, Okinawa 900-0013日本",
                ),
            ],
        },
        DayPlan {
            day: 3,
            date: "2026/1/13 (二)".to_string(),
            title: "中部．懷舊美式風情".to_string(),
            clothing_tips: "今日穿著可以偏美式休閒。".to_string(),
            weather_tips: "萬座毛斷崖邊風勢極大，拍照注意。".to_string(),
            spots: vec![
                spot(
                    "3-0",
                    "09:00",
                    SpotCategory::Hotel,
                    "沖繩逸之彩飯店 (出發)",
                    "悠閒早餐後出發。",
                    &["充足睡眠"],
                    "Okinawa+Hinode+Hotel",
                    "3 Chome-18-33 Makishi, Naha, Okinawa 900-0013日本",
                )
                .travel("55 min", "44.2 km"),
                spot(
                    "3-1",
                    "10:30",
                    SpotCategory::Sights,
                    "萬座毛 (Manzamo)",
                    "著名的象鼻岩，一望無際的海景。",
                    &["必拍象鼻岩"],
                    "Manzamo",
                    "Onna, Kunigami District, Okinawa 904-0411日本",
                )
                .parking("附設停車場")
                .travel("45 min", "32.5 km"),
                spot(
                    "3-2",
                    "11:50",
                    SpotCategory::Shopping,
                    "Makeman Urasoe Main Branch",
                    "大型連鎖工具店，愛好者必逛。",
                    &["工具店", "生活雜貨"],
                    "Makeman+Urasoe",
                    "2008 Gusukuma, Urasoe, Okinawa 901-2133日本",
                )
                .parking("大型免費停車場")
                .travel("20 min", "12.8 km"),
                spot(
                    "3-3",
                    "14:00",
                    SpotCategory::Activity,
                    "美國村 (American Village)",
                    "異國風情街區，漫步夕陽海灘。",
                    &["美式風格", "大國藥妝"],
                    "Mihama+American+Village",
                    "Mihama, Chatan, Nakagami District, Okinawa 904-0115日本",
                )
                .parking("免費公共停車場")
                .group_friendly()
                .travel("30 min", "16.8 km"),
                spot(
                    "3-4",
                    "22:00",
                    SpotCategory::Activity,
                    "Churasun6 秀",
                    "在地特色表演，已預約附一杯飲品。",
                    &["精彩演出", "已預約"],
                    "Churasun6+Naha",
                    "Okinawa, Naha, Matsuyama, 1 Chome−5−1",
                )
                .group_friendly(),
            ],
        },
        DayPlan {
            day: 4,
            date: "2026/1/14 (三)".to_string(),
            title: "南部．秘境與回程".to_string(),
            clothing_tips: "穿著方便穿脫的鞋子。".to_string(),
            weather_tips: "南部山谷內較涼。".to_string(),
            spots: vec![
                spot(
                    "4-0",
                    "08:30",
                    SpotCategory::Hotel,
                    "沖繩逸之彩飯店 (退房)",
                    "辦理退房。",
                    &["退房"],
                    "Okinawa+Hinode+Hotel",
                    "3 Chome-18-33 Makishi, Naha, Okinawa 900-0013日本",
                )
                .travel("10 min", "3.2 km"),
                spot(
                    "4-1",
                    "09:00",
                    SpotCategory::Sights,
                    "波上宮",
                    "懸崖上的神社，祈求旅途平安。",
                    &["必買御守", "海上神社"],
                    "Naminoue+Shrine",
                    "1 Chome-25-11 Wakasa, Naha, Okinawa 900-0031日本",
                )
                .parking("神社旁停車場")
                .travel("35 min", "18.2 km"),
                spot(
                    "4-2",
                    "12:00",
                    SpotCategory::Activity,
                    "Gangala 之谷",
                    "鐘乳石山洞探索，洞穴咖啡必喝。",
                    &["巨大榕樹", "山洞咖啡"],
                    "Valley+of+Gangala",
                    "Maekawa-202 Tamagusuku, Nanjo, Okinawa 901-0616日本",
                )
                .parking("園區停車場")
                .travel("15 min", "8.5 km"),
                spot(
                    "4-3",
                    "13:00",
                    SpotCategory::Food,
                    "系滿魚市場 (午餐)",
                    "新鮮生魚片、烤海鮮。",
                    &["海鮮午餐", "魚市場"],
                    "Itoman+Fish+Market",
                    "4 Chome-19 Nishizakicho, Itoman, Okinawa 901-0306日本",
                )
                .parking("市場停車場")
                .travel("15 min", "5.2 km"),
                spot(
                    "4-4",
                    "14:10",
                    SpotCategory::Shopping,
                    "コーナンPRO 豊見城豊崎店",
                    "職人工具店，Outlet 對面。",
                    &["工具專門", "五金雜貨"],
                    "Kohnan+PRO+Toyosaki",
                    "1-420 Toyosaki, Tomigusuku, Okinawa 901-0225日本",
                )
                .parking("附設停車場")
                .travel("5 min", "1.2 km"),
                spot(
                    "4-5",
                    "15:30",
                    SpotCategory::Shopping,
                    "ASHIBINAA Outlet",
                    "最後補貨採買。",
                    &["品牌特賣", "Outlet"],
                    "ASHIBINAA+Outlet",
                    "1-188 Toyosaki, Tomigusuku, Okinawa 901-0225日本",
                )
                .travel("15 min", "5.4 km"),
                spot(
                    "4-6",
                    "17:30",
                    SpotCategory::Transport,
                    "OTS 還車 ＆ 機場",
                    "完成還車，準備搭機。",
                    &["平安返家"],
                    "Naha+Airport",
                    "150 Kagamizu, Naha, Okinawa 901-0142日本",
                ),
            ],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn spot(
    id: &str,
    time: &str,
    category: SpotCategory,
    name: &str,
    description: &str,
    tags: &[&str],
    map_query: &str,
    address: &str,
) -> Spot {
    Spot {
        id: id.to_string(),
        time: time.to_string(),
        category,
        name: name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        map_url: google_maps_search_url(map_query),
        address: address.to_string(),
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
    }
}

impl Spot {
    fn parking(mut self, info: &str) -> Self {
        self.parking_info = Some(info.to_string());
        self
    }

    fn gas(mut self, info: &str) -> Self {
        self.gas_info = Some(info.to_string());
        self
    }

    fn photo_tips(mut self, tips: &str) -> Self {
        self.photo_tips = Some(tips.to_string());
        self
    }

    fn group_friendly(mut self) -> Self {
        self.group_friendly = true;
        self
    }

    fn travel(mut self, time: &str, distance: &str) -> Self {
        self.travel_time = Some(time.to_string());
        self.travel_distance = Some(distance.to_string());
        self
    }
}
