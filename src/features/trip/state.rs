use crate::features::currency::{
    convert_display, CalculatorPad, ConversionDirection, CurrencyConversion, ExchangeRate,
};
use crate::features::expenses::models::{ExpenseItem, ExpenseSummary};
use crate::features::expenses::service::summarize_expenses;
use crate::features::food::defaults::initial_food;
use crate::features::food::models::{AreaSearchCard, FoodItem};
use crate::features::food::service::area_searches;
use crate::features::itinerary::defaults::initial_itinerary;
use crate::features::itinerary::models::DayPlan;
use crate::features::storage::{self, StorageKey};
use crate::features::supermarkets::defaults::initial_supermarkets;
use crate::features::supermarkets::models::SupermarketItem;
use crate::features::trip::view::{Tab, ViewState};
use crate::features::weather::defaults::initial_weather;
use crate::features::weather::models::WeatherForecast;
use crate::shared::errors::{AppError, AppResult};
use rusqlite::Connection;
use serde::Serialize;

/// 旅行データ全体（メモリ上の状態）
#[derive(Debug, Clone, PartialEq)]
pub struct TripState {
    pub itinerary: Vec<DayPlan>,
    pub food: Vec<FoodItem>,
    pub supermarkets: Vec<SupermarketItem>,
    pub expenses: Vec<ExpenseItem>,
    pub weather: Vec<WeatherForecast>,
    pub rate: ExchangeRate,
    pub view: ViewState,
    pub pad: CalculatorPad,
    pub direction: ConversionDirection,
}

impl Default for TripState {
    fn default() -> Self {
        Self {
            itinerary: initial_itinerary(),
            food: initial_food(),
            supermarkets: initial_supermarkets(),
            expenses: Vec::new(),
            weather: initial_weather(),
            rate: ExchangeRate::default(),
            view: ViewState::default(),
            pad: CalculatorPad::default(),
            direction: ConversionDirection::default(),
        }
    }
}

/// 画面表示用のスナップショット
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSnapshot {
    pub view: ViewState,
    pub itinerary: Vec<DayPlan>,
    pub food: Vec<FoodItem>,
    pub area_searches: Vec<AreaSearchCard>,
    pub supermarkets: Vec<SupermarketItem>,
    pub expenses: ExpenseSummary,
    pub weather: Vec<WeatherForecast>,
    pub rate: String,
    pub conversion: CurrencyConversion,
}

impl TripState {
    /// 保存済みデータを読み込む
    ///
    /// キーごとに読み込み、未保存または解析できないキーだけ既定値を使う。
    ///
    /// # 引数
    /// * `conn` - データベース接続
    pub fn load(conn: &Connection) -> Self {
        let state = Self {
            itinerary: storage::load_or_default(conn, StorageKey::Itinerary, initial_itinerary),
            food: storage::load_or_default(conn, StorageKey::Food, initial_food),
            supermarkets: storage::load_or_default(
                conn,
                StorageKey::Supermarkets,
                initial_supermarkets,
            ),
            expenses: storage::load_or_default(conn, StorageKey::Expenses, Vec::new),
            weather: storage::load_or_default(conn, StorageKey::Weather, initial_weather),
            rate: storage::load_or_default(conn, StorageKey::Rate, ExchangeRate::default),
            ..Self::default()
        };

        log::info!(
            "旅行データを読み込みました: days={}, food={}, supermarkets={}, expenses={}",
            state.itinerary.len(),
            state.food.len(),
            state.supermarkets.len(),
            state.expenses.len()
        );

        state
    }

    /// 指定キーのコレクション全体を保存する
    pub fn persist(&self, conn: &Connection, key: StorageKey) -> AppResult<()> {
        match key {
            StorageKey::Itinerary => storage::save(conn, key, &self.itinerary),
            StorageKey::Food => storage::save(conn, key, &self.food),
            StorageKey::Supermarkets => storage::save(conn, key, &self.supermarkets),
            StorageKey::Expenses => storage::save(conn, key, &self.expenses),
            StorageKey::Weather => storage::save(conn, key, &self.weather),
            StorageKey::Rate => storage::save(conn, key, &self.rate),
        }
    }

    /// すべてのコレクションを保存する
    pub fn persist_all(&self, conn: &Connection) -> AppResult<()> {
        for key in StorageKey::ALL {
            self.persist(conn, key)?;
        }
        Ok(())
    }

    /// 表示する日を切り替える
    pub fn select_day(&mut self, day: u8) -> AppResult<()> {
        if !self.itinerary.iter().any(|d| d.day == day) {
            return Err(AppError::not_found(format!("{day}日目")));
        }
        self.view.selected_day = day;
        Ok(())
    }

    /// 表示するタブを切り替える
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.view.active_tab = tab;
    }

    /// 計算機の表示を現在のレートで換算する
    pub fn conversion(&self) -> CurrencyConversion {
        convert_display(&self.pad.display, self.direction, &self.rate)
    }

    /// 現在のレートで支出の合計を求める
    pub fn expense_summary(&self) -> ExpenseSummary {
        summarize_expenses(&self.expenses, &self.rate)
    }

    /// 画面表示用のスナップショットを作成する
    pub fn snapshot(&self) -> TripSnapshot {
        TripSnapshot {
            view: self.view,
            itinerary: self.itinerary.clone(),
            food: self.food.clone(),
            area_searches: area_searches(&self.food),
            supermarkets: self.supermarkets.clone(),
            expenses: self.expense_summary(),
            weather: self.weather.clone(),
            rate: self.rate.as_str().to_string(),
            conversion: self.conversion(),
        }
    }
}
