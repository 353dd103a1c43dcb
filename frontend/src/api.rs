use gloo_net::http::Request;
use serde_json::Value;

use crate::model::{parse_payload, Transaction};

pub const API_BASE: &str = "http://127.0.0.1:8000";

pub fn transactions_url() -> String {
    format!("{}/api/transactions", API_BASE)
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, String> {
    // 1) send
    let resp = Request::get(&transactions_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    // 2) http status
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    // 3) parse json; the server reports failures inside a 200 body
    let value = resp
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse JSON error: {e}"))?;
    parse_payload(value)
}
