use std::sync::Arc;

use axum::{extract::State, response::IntoResponse};
use log::{debug, warn};

use crate::presenter::{res_error, res_success};
use crate::transactions::load_transactions;
use crate::AppState;

pub async fn get_transactions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match load_transactions(&state.transactions_path).await {
        Ok(transactions) => {
            debug!("served {}", state.transactions_path.display());
            res_success(transactions)
        }
        Err(err) => {
            warn!("{}", err);
            res_error(err)
        }
    }
}
