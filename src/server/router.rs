use std::sync::Arc;

use http_body_util::Full;
use hyper::{Method, Request, Response, StatusCode, body::Bytes};
use serde_json::json;
use tracing::{debug, error, info};

use super::{
    AppState,
    response::{
        build_404_response, build_405_response, build_error_response, build_json_response,
        build_options_response,
    },
};
use crate::services::StockDataError;

pub const STOCK_DATA_PATH: &str = "/api/getStockData";
pub const FUNCTION_PATH: &str = "/.netlify/functions/getStockData";
pub const HEALTH_PATH: &str = "/api/test";

pub async fn handle_request<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    drop(req);

    debug!(%method, %path, "incoming request");

    if method == Method::OPTIONS {
        return build_options_response();
    }
    if method != Method::GET {
        return build_405_response();
    }

    match path.trim_end_matches('/') {
        STOCK_DATA_PATH | FUNCTION_PATH => handle_stock_data(query.as_deref(), &state).await,
        HEALTH_PATH => build_json_response(
            StatusCode::OK,
            &json!({ "message": "Stock data endpoint is up", "symbol": "TEST" }),
        ),
        _ => build_404_response(),
    }
}

async fn handle_stock_data(query: Option<&str>, state: &AppState) -> Response<Full<Bytes>> {
    let Some(input) = query
        .and_then(|q| query_param(q, "symbol"))
        .filter(|s| !s.trim().is_empty())
    else {
        info!("request without symbol parameter");
        return build_error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'symbol' parameter. Please provide a valid ticker symbol, WKN or ISIN.",
        );
    };

    match state.service().fetch(&input).await {
        Ok(data) => {
            info!(%input, symbol = %data.symbol(), "stock data served");
            build_json_response(StatusCode::OK, &data)
        }
        Err(err) => {
            let detail = format!("{:#}", err);
            error!(%input, error = %detail, "failed to fetch stock data");
            build_error_response(StatusCode::INTERNAL_SERVER_ERROR, &error_message(&input, &err))
        }
    }
}

pub fn error_message(input: &str, err: &StockDataError) -> String {
    if err.is_no_data() {
        format!("No data found for '{}'. Please check the symbol.", input)
    } else if err.is_invalid_input() {
        format!(
            "Invalid symbol '{}'. Please use a valid Yahoo Finance symbol, WKN or ISIN.",
            input
        )
    } else {
        format!(
            "Failed to fetch data for '{}'. The symbol may be invalid or there was a temporary problem. Details: {:#}",
            input, err
        )
    }
}

/// First value of `name` in a raw query string, percent-decoded with `+` as space.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key)? != name {
            return None;
        }
        decode_component(value)
    })
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|s| s.into_owned())
}
