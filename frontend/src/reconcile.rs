//! Client for `POST /api/commerce/reconcile`.

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const RECONCILE_PATH: &str = "/api/commerce/reconcile";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileType {
    Bank,
    Gst,
    Vendor,
    Customer,
}

impl ReconcileType {
    pub const ALL: [ReconcileType; 4] = [
        ReconcileType::Bank,
        ReconcileType::Gst,
        ReconcileType::Vendor,
        ReconcileType::Customer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileType::Bank => "bank",
            ReconcileType::Gst => "gst",
            ReconcileType::Vendor => "vendor",
            ReconcileType::Customer => "customer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReconcileType::Bank => "Bank statement",
            ReconcileType::Gst => "GST returns",
            ReconcileType::Vendor => "Vendor ledger",
            ReconcileType::Customer => "Customer ledger",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ReconcileError {
    #[error("you need to be logged in to start a reconciliation")]
    MissingToken,
    #[error("unknown reconcile type `{0}`")]
    UnknownType(String),
    #[error("invalid {field} date `{value}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("period start {start} is after period end {end}")]
    PeriodOrder { start: NaiveDate, end: NaiveDate },
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReconcileRequest {
    pub reconcile_type: ReconcileType,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconcileForm {
    pub reconcile_type: String,
    pub period_start: String,
    pub period_end: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ReconcileError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ReconcileError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl ReconcileForm {
    pub fn validate(&self) -> Result<ReconcileRequest, ReconcileError> {
        let reconcile_type = ReconcileType::parse(self.reconcile_type.trim())
            .ok_or_else(|| ReconcileError::UnknownType(self.reconcile_type.clone()))?;
        let period_start = parse_date("period start", &self.period_start)?;
        let period_end = parse_date("period end", &self.period_end)?;

        if period_start > period_end {
            return Err(ReconcileError::PeriodOrder {
                start: period_start,
                end: period_end,
            });
        }

        Ok(ReconcileRequest {
            reconcile_type,
            period_start,
            period_end,
        })
    }
}

pub async fn create_reconcile(request: &ReconcileRequest, token: &str) -> Result<(), ReconcileError> {
    let response = Request::post(&config::api_url(RECONCILE_PATH))
        .header("Authorization", &format!("Bearer {}", token))
        .json(request)
        .map_err(|e| ReconcileError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ReconcileError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(ReconcileError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: &str, start: &str, end: &str) -> ReconcileForm {
        ReconcileForm {
            reconcile_type: kind.to_string(),
            period_start: start.to_string(),
            period_end: end.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let request = form("gst", "2024-04-01", "2024-06-30").validate().unwrap();
        assert_eq!(request.reconcile_type, ReconcileType::Gst);
        assert_eq!(request.period_start, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(request.period_end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_same_day_period_is_allowed() {
        assert!(form("bank", "2024-01-31", "2024-01-31").validate().is_ok());
    }

    #[test]
    fn test_reversed_period_rejected() {
        let err = form("bank", "2024-02-01", "2024-01-01").validate().unwrap_err();
        assert!(matches!(err, ReconcileError::PeriodOrder { .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = form("vendor", "01/02/2024", "2024-03-01").validate().unwrap_err();
        assert_eq!(
            err,
            ReconcileError::InvalidDate {
                field: "period start",
                value: "01/02/2024".to_string()
            }
        );
        let err = form("vendor", "2024-01-01", "").validate().unwrap_err();
        assert!(matches!(err, ReconcileError::InvalidDate { field: "period end", .. }));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = form("payroll", "2024-01-01", "2024-01-31").validate().unwrap_err();
        assert_eq!(err, ReconcileError::UnknownType("payroll".to_string()));
    }

    #[test]
    fn test_request_body_shape() {
        let request = form("customer", "2024-04-01", "2025-03-31").validate().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "reconcile_type": "customer",
                "period_start": "2024-04-01",
                "period_end": "2025-03-31",
            })
        );
    }

    #[test]
    fn test_type_round_trips_through_str() {
        for kind in ReconcileType::ALL {
            assert_eq!(ReconcileType::parse(kind.as_str()), Some(kind));
        }
    }
}
