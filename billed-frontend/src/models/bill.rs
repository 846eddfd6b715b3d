//! Bill records as stored remotely, as drafted locally and as displayed.

use crate::error::FormatError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// Label shown to employees.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, FormatError> {
        match label {
            "En attente" => Ok(BillStatus::Pending),
            "Accepté" => Ok(BillStatus::Accepted),
            "Refusé" => Ok(BillStatus::Refused),
            other => Err(FormatError::UnknownLabel(other.to_string())),
        }
    }
}

impl FromStr for BillStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            other => Err(FormatError::UnknownStatus(other.to_string())),
        }
    }
}

/// A persisted bill exactly as the remote store returns it.
///
/// Every field decodes leniently (nulls, numbers where text is expected and
/// the reverse) so that one odd record does not break a whole list; the
/// formatter decides what is displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub expense_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Option<Decimal>,
    /// ISO calendar date (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub vat: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub pct: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub commentary: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_url: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_admin: Option<String>,
}

mod lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(text(Value::deserialize(deserializer)?))
    }

    pub fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .map(Decimal::from)
                .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or_default(),
            Value::String(s) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        })
    }
}

impl Bill {
    /// Materialize a persisted bill from a draft once the store has assigned
    /// an id and a receipt URL.
    pub fn from_draft(id: impl Into<String>, file_url: impl Into<String>, draft: BillDraft) -> Self {
        Self {
            id: id.into(),
            email: draft.email,
            expense_type: draft.expense_type,
            name: draft.name,
            amount: draft.amount,
            date: draft.date,
            vat: draft.vat,
            pct: draft.pct,
            commentary: draft.commentary,
            file_url: file_url.into(),
            file_name: draft.file_name,
            status: draft.status.as_str().to_string(),
            comment_admin: None,
        }
    }
}

/// A bill under construction. Never carries an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<Decimal>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_name: String,
    pub status: BillStatus,
}

/// Display-ready projection of a [`Bill`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<Decimal>,
    /// Short French date, or the stored string when it could not be parsed.
    pub date: String,
    /// Stored ISO date, kept for ordering.
    pub iso_date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    /// Status label, or the stored status when it is not a known one.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}
