use crate::features::enrichment::{estimate_travel, EnrichmentOutcome, TravelEstimate};
use crate::features::itinerary::models::{DayPlan, SaveSpotDto, Spot, UpdateDayDto};
use crate::shared::errors::{AppError, AppResult};
use crate::AppState;
use crate::shared::utils::{
    generate_record_id, non_blank, normalize_tags, validate_map_url, validate_required_field,
    validate_text_length, validate_time_of_day,
};

/// 景點名の最大文字数
const MAX_SPOT_NAME_LENGTH: usize = 100;
/// 説明の最大文字数
const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// 景點保存用DTOのバリデーション
///
/// # 引数
/// * `dto` - 景點保存用DTO
///
/// # 戻り値
/// 有効な場合はOk(())、無効な場合はエラー
pub fn validate_spot_dto(dto: &SaveSpotDto) -> AppResult<()> {
    validate_required_field(&dto.name, "名称")?;
    validate_text_length(&dto.name, MAX_SPOT_NAME_LENGTH, "名称")?;
    validate_time_of_day(&dto.time)?;
    validate_required_field(&dto.address, "住所")?;
    validate_text_length(&dto.description, MAX_DESCRIPTION_LENGTH, "説明")?;
    validate_map_url(&dto.map_url)?;
    Ok(())
}

fn find_day_mut(itinerary: &mut [DayPlan], day: u8) -> AppResult<&mut DayPlan> {
    itinerary
        .iter_mut()
        .find(|d| d.day == day)
        .ok_or_else(|| AppError::not_found(format!("{day}日目")))
}

/// 指定日の行程を取得する
pub fn find_day(itinerary: &[DayPlan], day: u8) -> AppResult<&DayPlan> {
    itinerary
        .iter()
        .find(|d| d.day == day)
        .ok_or_else(|| AppError::not_found(format!("{day}日目")))
}

fn build_spot(id: String, dto: SaveSpotDto) -> Spot {
    Spot {
        id,
        time: dto.time,
        category: dto.category,
        name: dto.name.trim().to_string(),
        description: dto.description.trim().to_string(),
        tags: normalize_tags(dto.tags),
        map_url: dto.map_url.trim().to_string(),
        address: dto.address.trim().to_string(),
        parking_info: non_blank(dto.parking_info),
        gas_info: non_blank(dto.gas_info),
        photo_tips: non_blank(dto.photo_tips),
        group_friendly: dto.group_friendly,
        is_reserved: dto.is_reserved,
        is_paid: dto.is_paid,
        is_pending_payment: dto.is_pending_payment,
        show_qr_code: dto.show_qr_code,
        travel_time: non_blank(dto.travel_time),
        travel_distance: non_blank(dto.travel_distance),
    }
}

/// 景點を追加または更新する
///
/// idなしの場合は新しいidで末尾に追加し、idありの場合は同じidの景點をその場で置き換える。
/// どちらの場合も最後に時刻順で安定ソートする（同時刻の景點は元の順序を保つ）。
///
/// # 引数
/// * `itinerary` - 全日程
/// * `day` - 対象の日
/// * `dto` - 景點保存用DTO
///
/// # 戻り値
/// 保存された景點、または失敗時はエラー
pub fn upsert_spot(itinerary: &mut [DayPlan], day: u8, dto: SaveSpotDto) -> AppResult<Spot> {
    validate_spot_dto(&dto)?;

    let plan = find_day_mut(itinerary, day)?;

    let saved = match non_blank(dto.id.clone()) {
        Some(id) => {
            let index = plan
                .spots
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| AppError::not_found(format!("スポット（id={id}）")))?;
            let spot = build_spot(id, dto);
            plan.spots[index] = spot.clone();
            log::debug!("景點を更新しました: day={day}, id={}", spot.id);
            spot
        }
        None => {
            let spot = build_spot(generate_record_id(), dto);
            plan.spots.push(spot.clone());
            log::debug!("景點を追加しました: day={day}, id={}", spot.id);
            spot
        }
    };

    plan.spots.sort_by(|a, b| a.time.cmp(&b.time));

    Ok(saved)
}

/// 景點を削除する
///
/// # 引数
/// * `itinerary` - 全日程
/// * `day` - 対象の日
/// * `spot_id` - 景點ID
pub fn delete_spot(itinerary: &mut [DayPlan], day: u8, spot_id: &str) -> AppResult<()> {
    let plan = find_day_mut(itinerary, day)?;

    let index = plan
        .spots
        .iter()
        .position(|s| s.id == spot_id)
        .ok_or_else(|| AppError::not_found(format!("スポット（id={spot_id}）")))?;

    plan.spots.remove(index);
    log::debug!("景點を削除しました: day={day}, id={spot_id}");
    Ok(())
}

/// 日ごとの見出し情報を更新する（指定された項目のみ）
///
/// # 戻り値
/// 更新後の行程、または失敗時はエラー
pub fn update_day(itinerary: &mut [DayPlan], day: u8, dto: UpdateDayDto) -> AppResult<DayPlan> {
    if let Some(title) = &dto.title {
        validate_required_field(title, "タイトル")?;
    }
    if let Some(date) = &dto.date {
        validate_required_field(date, "日付")?;
    }

    let plan = find_day_mut(itinerary, day)?;

    if let Some(date) = dto.date {
        plan.date = date.trim().to_string();
    }
    if let Some(title) = dto.title {
        plan.title = title.trim().to_string();
    }
    if let Some(clothing_tips) = dto.clothing_tips {
        plan.clothing_tips = clothing_tips.trim().to_string();
    }
    if let Some(weather_tips) = dto.weather_tips {
        plan.weather_tips = weather_tips.trim().to_string();
    }

    Ok(plan.clone())
}

/// 指定時刻の直前にある景點を取得する
///
/// 編集中の景點自身（`exclude_id`）は対象外。同時刻の景點は直前とみなさない。
///
/// # 引数
/// * `plan` - 1日分の行程
/// * `time` - 基準時刻（HH:MM）
/// * `exclude_id` - 除外する景點ID
pub fn previous_spot<'a>(
    plan: &'a DayPlan,
    time: &str,
    exclude_id: Option<&str>,
) -> Option<&'a Spot> {
    plan.spots
        .iter()
        .filter(|s| Some(s.id.as_str()) != exclude_id)
        .filter(|s| s.time.as_str() < time)
        .last()
}

/// 直前の景點から指定住所までの移動を見積もる
///
/// 見積もり結果は提案として返すだけで、景點には保存しない。
///
/// # 引数
/// * `state` - アプリケーション状態
/// * `day` - 対象の日
/// * `time` - 編集中の景點の時刻（HH:MM）
/// * `address` - 編集中の景點の住所
/// * `spot_id` - 編集中の景點ID（新規の場合はNone）
///
/// # 戻り値
/// 見積もり結果、または日が存在しない場合はエラー
pub async fn estimate_from_previous_spot(
    state: &AppState,
    day: u8,
    time: &str,
    address: &str,
    spot_id: Option<&str>,
) -> AppResult<EnrichmentOutcome<TravelEstimate>> {
    let previous_address = state.read_trip(|trip| {
        find_day(&trip.itinerary, day)
            .map(|plan| previous_spot(plan, time, spot_id).map(|s| s.address.clone()))
    })??;

    Ok(estimate_travel(
        state.traffic_estimator.clone(),
        previous_address.as_deref(),
        address,
        state.config.enrichment_timeout,
    )
    .await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::enrichment::{TrafficEstimator, UnavailableForecastProvider};
    use crate::shared::config::EnvironmentConfig;
    use crate::shared::database::create_tables;
    use rusqlite::Connection;
    use std::sync::{Arc, Mutex};
    use crate::features::itinerary::models::SpotCategory;
    use crate::shared::utils::is_valid_record_id;

    fn draft(time: &str, name: &str) -> SaveSpotDto {
        SaveSpotDto {
            time: time.to_string(),
            category: SpotCategory::Sights,
            name: name.to_string(),
            address: "Naha, Okinawa".to_string(),
            ..Default::default()
        }
    }

    fn itinerary_with(times: &[&str]) -> Vec<DayPlan> {
        let mut plan = DayPlan {
            day: 1,
            date: "2026/1/11 (日)".to_string(),
            title: "抵達".to_string(),
            clothing_tips: String::new(),
            weather_tips: String::new(),
            spots: Vec::new(),
        };
        for (i, time) in times.iter().enumerate() {
            plan.spots
                .push(build_spot(format!("s{i}"), draft(time, &format!("spot{i}"))));
        }
        vec![plan]
    }

    fn times(plan: &DayPlan) -> Vec<&str> {
        plan.spots.iter().map(|s| s.time.as_str()).collect()
    }

    #[test]
    fn test_new_spot_is_inserted_in_time_order() {
        let mut itinerary = itinerary_with(&["09:00", "14:00"]);

        let saved = upsert_spot(&mut itinerary, 1, draft("11:00", "首里城")).unwrap();

        assert_eq!(times(&itinerary[0]), vec!["09:00", "11:00", "14:00"]);
        assert!(is_valid_record_id(&saved.id));
        assert_eq!(itinerary[0].spots[1].id, saved.id);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut itinerary = itinerary_with(&["09:00", "11:00", "14:00"]);
        let before_ids: Vec<String> = itinerary[0].spots.iter().map(|s| s.id.clone()).collect();

        let mut dto = draft("11:00", "改名後");
        dto.id = Some("s1".to_string());
        upsert_spot(&mut itinerary, 1, dto).unwrap();

        let after_ids: Vec<String> = itinerary[0].spots.iter().map(|s| s.id.clone()).collect();
        assert_eq!(before_ids, after_ids);
        assert_eq!(itinerary[0].spots[1].name, "改名後");
    }

    #[test]
    fn test_edit_with_new_time_resorts_keeping_others() {
        let mut itinerary = itinerary_with(&["09:00", "11:00", "14:00"]);

        let mut dto = draft("15:00", "移到最後");
        dto.id = Some("s0".to_string());
        upsert_spot(&mut itinerary, 1, dto).unwrap();

        let ids: Vec<&str> = itinerary[0].spots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s0"]);
    }

    #[test]
    fn test_same_time_keeps_insertion_order() {
        let mut itinerary = itinerary_with(&["10:00"]);
        let saved = upsert_spot(&mut itinerary, 1, draft("10:00", "後加")).unwrap();

        assert_eq!(itinerary[0].spots[0].id, "s0");
        assert_eq!(itinerary[0].spots[1].id, saved.id);
    }

    #[test]
    fn test_unknown_day_and_id_are_not_found() {
        let mut itinerary = itinerary_with(&["09:00"]);

        let result = upsert_spot(&mut itinerary, 9, draft("10:00", "x"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(result.unwrap_err().user_message(), "9日目が見つかりません");

        let mut dto = draft("10:00", "x");
        dto.id = Some("missing".to_string());
        let result = upsert_spot(&mut itinerary, 1, dto);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(itinerary[0].spots.len(), 1);
    }

    #[test]
    fn test_invalid_drafts_are_rejected() {
        let mut itinerary = itinerary_with(&[]);

        assert!(upsert_spot(&mut itinerary, 1, draft("9:00", "x")).is_err());
        let blank_name = upsert_spot(&mut itinerary, 1, draft("09:00", "  ")).unwrap_err();
        assert_eq!(blank_name.user_message(), "名称は必須項目です");

        let mut dto = draft("09:00", "x");
        dto.address = String::new();
        let blank_address = upsert_spot(&mut itinerary, 1, dto).unwrap_err();
        assert_eq!(blank_address.user_message(), "住所は必須項目です");

        let mut dto = draft("09:00", "x");
        dto.map_url = "ftp://example.com".to_string();
        assert!(upsert_spot(&mut itinerary, 1, dto).is_err());

        assert!(itinerary[0].spots.is_empty());
    }

    #[test]
    fn test_fields_are_normalized() {
        let mut itinerary = itinerary_with(&[]);
        let mut dto = draft("09:00", "  美麗海水族館 ");
        dto.tags = vec!["必看".into(), " 必看".into(), "".into()];
        dto.parking_info = Some("   ".into());

        let saved = upsert_spot(&mut itinerary, 1, dto).unwrap();
        assert_eq!(saved.name, "美麗海水族館");
        assert_eq!(saved.tags, vec!["必看"]);
        assert_eq!(saved.parking_info, None);
    }

    #[test]
    fn test_delete_spot() {
        let mut itinerary = itinerary_with(&["09:00", "11:00"]);

        delete_spot(&mut itinerary, 1, "s0").unwrap();
        assert_eq!(itinerary[0].spots.len(), 1);
        assert_eq!(itinerary[0].spots[0].id, "s1");

        assert!(delete_spot(&mut itinerary, 1, "s0").is_err());
    }

    #[test]
    fn test_update_day_only_touches_given_fields() {
        let mut itinerary = itinerary_with(&[]);
        let dto = UpdateDayDto {
            title: Some("北部一日遊".to_string()),
            weather_tips: Some("海風強".to_string()),
            ..Default::default()
        };

        let plan = update_day(&mut itinerary, 1, dto).unwrap();
        assert_eq!(plan.title, "北部一日遊");
        assert_eq!(plan.weather_tips, "海風強");
        assert_eq!(plan.date, "2026/1/11 (日)");

        let blank = UpdateDayDto {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(update_day(&mut itinerary, 1, blank).is_err());
        assert_eq!(itinerary[0].title, "北部一日遊");
    }

    #[test]
    fn test_previous_spot() {
        let itinerary = itinerary_with(&["09:00", "11:00", "14:00"]);
        let plan = &itinerary[0];

        assert_eq!(previous_spot(plan, "12:00", None).map(|s| s.id.as_str()), Some("s1"));
        assert_eq!(previous_spot(plan, "09:00", None), None);
        assert_eq!(
            previous_spot(plan, "14:30", Some("s2")).map(|s| s.id.as_str()),
            Some("s1")
        );
    }

    /// 呼び出された住所を記録する見積もりサービス
    #[derive(Default)]
    struct RecordingEstimator {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl TrafficEstimator for RecordingEstimator {
        fn estimate(&self, from: &str, to: &str) -> AppResult<Option<String>> {
            self.calls
                .lock()
                .unwrap()
                .push((from.to_string(), to.to_string()));
            Ok(Some(r#"{"time":"20 min","distance":"8 km"}"#.to_string()))
        }
    }

    fn create_state(estimator: Arc<RecordingEstimator>) -> AppState {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        AppState::new(conn, EnvironmentConfig::from_env())
            .with_providers(estimator, Arc::new(UnavailableForecastProvider))
    }

    #[tokio::test]
    async fn test_estimate_uses_previous_spot_address() {
        let estimator = Arc::new(RecordingEstimator::default());
        let state = create_state(estimator.clone());

        let outcome = estimate_from_previous_spot(&state, 1, "19:00", "Kokusai Dori, Naha", None)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            EnrichmentOutcome::Ready(TravelEstimate {
                time: "20 min".to_string(),
                distance: "8 km".to_string(),
            })
        );
        let calls = estimator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.starts_with("3-35 Toyosaki"));
        assert_eq!(calls[0].1, "Kokusai Dori, Naha");
    }

    #[tokio::test]
    async fn test_estimate_without_previous_spot_skips_service() {
        let estimator = Arc::new(RecordingEstimator::default());
        let state = create_state(estimator.clone());

        let outcome = estimate_from_previous_spot(&state, 1, "08:00", "Kokusai Dori, Naha", None)
            .await
            .unwrap();

        assert_eq!(outcome, EnrichmentOutcome::Unavailable);
        assert!(estimator.calls.lock().unwrap().is_empty());

        let missing_day = estimate_from_previous_spot(&state, 9, "08:00", "Naha", None).await;
        assert!(missing_day.is_err());
    }
}
