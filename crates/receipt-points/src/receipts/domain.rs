use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored receipts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// Single line item on a receipt.
///
/// The price arrives on the wire as decimal text (`"12.25"`) and is parsed at
/// intake; a payload whose price does not parse is rejected before storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    #[serde(with = "price_text")]
    pub price: f64,
}

/// Purchase receipt as accepted at intake.
///
/// `purchase_date`, `purchase_time`, and `total` are kept as the raw strings
/// received so the scoring rules can degrade to zero contributions on
/// malformed values instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// Serde codec for prices carried as JSON strings.
mod price_text {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{price:.2}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price '{raw}'")))
    }
}
