use serde::{Deserialize, Serialize};

/// 店舗の種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreType {
    #[serde(rename = "超市")]
    #[default]
    Supermarket,
    #[serde(rename = "便利商店")]
    ConvenienceStore,
    #[serde(rename = "藥妝店")]
    Drugstore,
}

/// 店舗で使える支払い方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorePayment {
    #[serde(rename = "現金")]
    Cash,
    #[serde(rename = "信用卡")]
    CreditCard,
    #[serde(rename = "PayPay")]
    PayPay,
    #[serde(rename = "交通系IC")]
    TransitIc,
}

/// 補給用の店舗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupermarketItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub store_type: StoreType,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub payment_methods: Vec<StorePayment>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub map_url: String,
    pub day: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_distance: Option<String>,
}

/// 店舗保存用DTO
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSupermarketDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub store_type: StoreType,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub payment_methods: Vec<StorePayment>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub map_url: String,
    pub day: u8,
    pub travel_time: Option<String>,
    pub travel_distance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_stored_layout() {
        let json = r#"{
            "id": "s1",
            "name": "MaxValu",
            "type": "藥妝店",
            "paymentMethods": ["現金", "交通系IC"],
            "day": 2
        }"#;
        let item: SupermarketItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.store_type, StoreType::Drugstore);
        assert_eq!(
            item.payment_methods,
            vec![StorePayment::Cash, StorePayment::TransitIc]
        );
    }

    #[test]
    fn test_unknown_payment_is_rejected() {
        let json = r#"{"id":"s1","name":"x","type":"超市","paymentMethods":["支票"],"day":1}"#;
        assert!(serde_json::from_str::<SupermarketItem>(json).is_err());
    }
}
