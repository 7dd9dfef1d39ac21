use serde::{Deserialize, Serialize};

/// 画面のタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Itinerary,
    Food,
    Supermarket,
    Guide,
    Expenses,
    Weather,
}

/// 表示状態（保存しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_tab: Tab,
    pub selected_day: u8,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Overview,
            selected_day: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ViewState::default();
        assert_eq!(view.active_tab, Tab::Overview);
        assert_eq!(view.selected_day, 1);
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(serde_json::to_string(&Tab::Supermarket).unwrap(), "\"supermarket\"");
        let tab: Tab = serde_json::from_str("\"guide\"").unwrap();
        assert_eq!(tab, Tab::Guide);
    }
}
