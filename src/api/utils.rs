use anyhow::{Context, Result};
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::ProviderError;

pub async fn make_request(client: &Client, url: &str, subject: &str) -> Result<Value> {
    debug!(%url, "provider request");
    let res = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", subject))?;

    let status = res.status();
    if !status.is_success() {
        return Err(ProviderError::from_status(subject, status).into());
    }

    let text = res
        .text()
        .await
        .with_context(|| format!("Failed to read response body for {}", subject))?;

    serde_json::from_str::<Value>(&text).map_err(|e| {
        ProviderError::UnexpectedResponse {
            subject: subject.to_string(),
            detail: e.to_string(),
        }
        .into()
    })
}

pub fn parse_response_object<T>(data: Value, subject: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj)).map_err(|e| {
            ProviderError::UnexpectedResponse {
                subject: subject.to_string(),
                detail: e.to_string(),
            }
            .into()
        }),
        _ => Err(ProviderError::UnexpectedResponse {
            subject: subject.to_string(),
            detail: String::from("not an object"),
        }
        .into()),
    }
}

pub fn to_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(Decimal::from_f64)
}
