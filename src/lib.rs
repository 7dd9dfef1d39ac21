pub mod features;
pub mod shared;

use features::enrichment::{
    ForecastProvider, TrafficEstimator, UnavailableForecastProvider, UnavailableTrafficEstimator,
};
use features::storage::StorageKey;
use features::trip::TripState;
use rusqlite::Connection;
use shared::config::EnvironmentConfig;
use shared::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// アプリケーション状態
///
/// 旅行データ（メモリ上）と、その保存先のデータベース接続、外部補完サービスを保持する。
/// ロックは旅行データ、データベース接続の順に取得する。
pub struct AppState {
    pub db: Mutex<Connection>,
    pub trip: Mutex<TripState>,
    pub traffic_estimator: Arc<dyn TrafficEstimator>,
    pub forecast_provider: Arc<dyn ForecastProvider>,
    pub config: EnvironmentConfig,
}

impl AppState {
    /// 保存済みデータを読み込んでアプリケーション状態を作成する
    ///
    /// # 引数
    /// * `conn` - データベース接続
    /// * `config` - 環境設定
    pub fn new(conn: Connection, config: EnvironmentConfig) -> Self {
        let trip = TripState::load(&conn);

        Self {
            db: Mutex::new(conn),
            trip: Mutex::new(trip),
            traffic_estimator: Arc::new(UnavailableTrafficEstimator),
            forecast_provider: Arc::new(UnavailableForecastProvider),
            config,
        }
    }

    /// 外部補完サービスを差し替える
    pub fn with_providers(
        mut self,
        traffic_estimator: Arc<dyn TrafficEstimator>,
        forecast_provider: Arc<dyn ForecastProvider>,
    ) -> Self {
        self.traffic_estimator = traffic_estimator;
        self.forecast_provider = forecast_provider;
        self
    }

    /// 旅行データを参照する
    pub fn read_trip<R>(&self, f: impl FnOnce(&TripState) -> R) -> AppResult<R> {
        let trip = self
            .trip
            .lock()
            .map_err(|e| AppError::concurrency(format!("旅行データのロック取得失敗: {e}")))?;
        Ok(f(&trip))
    }

    /// 旅行データを変更し、指定キーのコレクションを保存する
    ///
    /// # 引数
    /// * `keys` - 保存するキー（表示状態のみの変更なら空）
    /// * `f` - 変更処理
    ///
    /// # 戻り値
    /// 変更処理の結果、または失敗時はエラー
    pub fn update_trip<R>(
        &self,
        keys: &[StorageKey],
        f: impl FnOnce(&mut TripState) -> AppResult<R>,
    ) -> AppResult<R> {
        self.update_trip_when(f, |_| keys.to_vec())
    }

    /// 旅行データを変更し、変更結果に応じたキーを保存する
    ///
    /// 変更は複製に対して行い、保存まで成功した場合のみメモリ上の状態に反映する。
    ///
    /// # 引数
    /// * `f` - 変更処理
    /// * `keys_for` - 変更結果から保存するキーを決める関数
    ///
    /// # 戻り値
    /// 変更処理の結果、または失敗時はエラー
    pub fn update_trip_when<R>(
        &self,
        f: impl FnOnce(&mut TripState) -> AppResult<R>,
        keys_for: impl FnOnce(&R) -> Vec<StorageKey>,
    ) -> AppResult<R> {
        let mut trip = self
            .trip
            .lock()
            .map_err(|e| AppError::concurrency(format!("旅行データのロック取得失敗: {e}")))?;

        let mut next = trip.clone();
        let result = f(&mut next)?;
        let keys = keys_for(&result);

        if !keys.is_empty() {
            let db = self.db.lock().map_err(|e| {
                AppError::concurrency(format!("データベースロック取得失敗: {e}"))
            })?;
            for key in keys {
                next.persist(&db, key).map_err(|e| {
                    log::error!("保存に失敗しました: {}", e.details());
                    e
                })?;
            }
        }

        *trip = next;
        Ok(result)
    }
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use features::{currency, expenses, food, itinerary, overview, supermarkets, trip, weather};
    use log::{error, info};
    use tauri::Manager;

    // 環境変数を読み込み（.envファイルがある場合）
    shared::config::load_environment_variables();

    // ログシステムを初期化
    shared::config::initialize_logging_system();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            info!("アプリケーション初期化を開始します...");

            let env_config = EnvironmentConfig::from_env();
            info!(
                "環境設定: environment={}, enrichment_timeout={}s",
                env_config.environment,
                env_config.enrichment_timeout.as_secs()
            );

            // アプリ起動時にデータベースを初期化
            info!("データベースを初期化しています...");
            let db_conn = shared::database::initialize_database(app.handle()).map_err(|e| {
                error!("データベースの初期化に失敗しました: {e}");
                e
            })?;

            // 保存済みデータを読み込んでアプリ状態に保存
            app.manage(AppState::new(db_conn, env_config));

            info!("アプリケーション初期化が完了しました");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // 画面状態コマンド
            trip::commands::get_trip_state,
            trip::commands::set_active_tab,
            trip::commands::select_day,
            overview::commands::get_trip_overview,
            // 行程コマンド
            itinerary::commands::save_spot,
            itinerary::commands::delete_spot,
            itinerary::commands::update_day,
            itinerary::commands::estimate_spot_travel,
            // 美食コマンド
            food::commands::save_food,
            food::commands::delete_food,
            food::commands::get_food,
            food::commands::get_area_searches,
            // 補給店舗コマンド
            supermarkets::commands::save_supermarket,
            supermarkets::commands::delete_supermarket,
            supermarkets::commands::toggle_supermarket_payment,
            // 支出コマンド
            expenses::commands::save_expense,
            expenses::commands::delete_expense,
            expenses::commands::get_expense_summary,
            // 換算ガイドコマンド
            currency::commands::press_calculator_key,
            currency::commands::set_conversion_direction,
            currency::commands::set_exchange_rate,
            currency::commands::evaluate_calculator_expression,
            // 天気コマンド
            weather::commands::get_weather,
            weather::commands::refresh_weather,
        ])
        .run(tauri::generate_context!())
        .expect("Tauriアプリケーションの実行中にエラーが発生しました");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::expenses::models::SaveExpenseDto;
    use crate::features::expenses::service::upsert_expense;
    use crate::shared::database::{create_tables, open_database};
    use tempfile::TempDir;

    fn create_test_state() -> AppState {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        AppState::new(conn, EnvironmentConfig::from_env())
    }

    fn lunch() -> SaveExpenseDto {
        SaveExpenseDto {
            name: "海膽炒飯".to_string(),
            amount_jpy: 1800.0,
            date: Some("2026-01-12".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_trip_persists_given_keys() {
        let state = create_test_state();

        state
            .update_trip(&[StorageKey::Expenses], |trip| {
                upsert_expense(&mut trip.expenses, lunch())
            })
            .unwrap();

        let db = state.db.lock().unwrap();
        let reloaded = TripState::load(&db);
        assert_eq!(reloaded.expenses.len(), 1);
    }

    #[test]
    fn test_failed_update_is_not_persisted() {
        let state = create_test_state();

        let mut invalid = lunch();
        invalid.amount_jpy = -5.0;
        let result = state.update_trip(&[StorageKey::Expenses], |trip| {
            upsert_expense(&mut trip.expenses, invalid)
        });
        assert!(result.is_err());

        let count = state.read_trip(|trip| trip.expenses.len()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_failed_save_leaves_memory_unchanged() {
        let state = create_test_state();
        state
            .db
            .lock()
            .unwrap()
            .execute("DROP TABLE kv_store", [])
            .unwrap();

        for _ in 0..2 {
            let result = state.update_trip(&[StorageKey::Expenses], |trip| {
                upsert_expense(&mut trip.expenses, lunch())
            });
            assert!(matches!(result, Err(AppError::Storage(_))));
        }

        let count = state.read_trip(|trip| trip.expenses.len()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_update_trip_when_skips_save_for_empty_keys() {
        let state = create_test_state();
        state
            .db
            .lock()
            .unwrap()
            .execute("DROP TABLE kv_store", [])
            .unwrap();

        let day = state
            .update_trip_when(
                |trip| {
                    trip.select_day(3)?;
                    Ok(trip.view.selected_day)
                },
                |_| Vec::new(),
            )
            .unwrap();

        assert_eq!(day, 3);
        assert_eq!(state.read_trip(|trip| trip.view.selected_day).unwrap(), 3);
    }

    #[test]
    fn test_state_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("trip_planner.db");

        {
            let state = AppState::new(open_database(&db_path).unwrap(), EnvironmentConfig::from_env());
            state
                .update_trip(&[StorageKey::Expenses], |trip| {
                    upsert_expense(&mut trip.expenses, lunch())
                })
                .unwrap();
            state
                .update_trip(&[], |trip| trip.select_day(2))
                .unwrap();
        }

        let state = AppState::new(open_database(&db_path).unwrap(), EnvironmentConfig::from_env());
        let (expenses, selected_day) = state
            .read_trip(|trip| (trip.expenses.clone(), trip.view.selected_day))
            .unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].name, "海膽炒飯");
        // 表示状態は保存しない
        assert_eq!(selected_day, 1);
    }
}
