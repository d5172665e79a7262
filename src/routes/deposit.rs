use std::path::PathBuf;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::db::PlayerStore;
use crate::error::ApiError;
use crate::models::parse_currency;

// Query parameters for a deposit
#[derive(Deserialize)]
pub struct DepositParams {
    amount_usd: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepositReceipt {
    pub old_balance_usd: String,
    pub new_balance_usd: String,
}

// POST /deposit/player/:pid?amount_usd=.. - Add funds to a player's balance
pub async fn deposit_to_player(
    State(data_path): State<PathBuf>,
    Path(pid): Path<i64>,
    Query(params): Query<DepositParams>,
) -> Result<Json<DepositReceipt>, ApiError> {
    // A malformed amount is a 400 regardless of whether the player exists.
    let amount = params
        .amount_usd
        .as_deref()
        .and_then(parse_currency)
        .ok_or(ApiError::BadRequest)?;

    let mut store = PlayerStore::open(data_path)?;
    let old_balance = store
        .get_balance(pid)
        .ok_or(ApiError::NotFound)?
        .to_string();
    store.update_player(pid, None, None, Some(amount))?;
    let new_balance = store
        .get_balance(pid)
        .ok_or(ApiError::NotFound)?
        .to_string();

    Ok(Json(DepositReceipt {
        old_balance_usd: old_balance,
        new_balance_usd: new_balance,
    }))
}
