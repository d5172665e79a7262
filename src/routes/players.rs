use std::path::PathBuf;

use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
};
use serde::Deserialize;

use crate::db::PlayerStore;
use crate::error::ApiError;
use crate::models::{is_valid_name, parse_currency, Handedness, PlayerView};

// Query parameters for creating a player. Everything is optional here so
// that missing fields end up in the 422 field list instead of a generic
// deserialization failure.
#[derive(Deserialize)]
pub struct CreatePlayerParams {
    fname: Option<String>,
    lname: Option<String>,
    handed: Option<String>,
    initial_balance_usd: Option<String>,
}

// Query parameters for updating a player
#[derive(Deserialize)]
pub struct UpdatePlayerParams {
    active: Option<String>,
    lname: Option<String>,
}

// GET /player - List all players, sorted by display name
pub async fn get_players(
    State(data_path): State<PathBuf>,
) -> Result<Json<Vec<PlayerView>>, ApiError> {
    let store = PlayerStore::open(data_path)?;
    Ok(Json(store.list_players()))
}

// GET /player/:pid - Get player by id
pub async fn get_player_by_id(
    State(data_path): State<PathBuf>,
    Path(pid): Path<i64>,
) -> Result<Json<PlayerView>, ApiError> {
    let store = PlayerStore::open(data_path)?;
    let player = store.get_player(pid).ok_or(ApiError::NotFound)?;
    Ok(Json(player.to_view()))
}

// POST /player?fname=..&lname=..&handed=..&initial_balance_usd=.. - Create a player
pub async fn create_player(
    State(data_path): State<PathBuf>,
    Query(params): Query<CreatePlayerParams>,
) -> Result<Redirect, ApiError> {
    let mut invalid = String::from("invalid fields:");
    let mut error = false;

    let fname = params.fname.as_deref().unwrap_or("");
    if !is_valid_name(fname) {
        error = true;
        invalid.push_str("fname");
    }

    if let Some(lname) = params.lname.as_deref() {
        if !is_valid_name(lname) {
            error = true;
            invalid.push_str("lname");
        }
    }

    let handed = params.handed.as_deref().and_then(Handedness::from_param);
    if handed.is_none() {
        error = true;
        invalid.push_str("handed");
    }

    let initial_balance = params
        .initial_balance_usd
        .as_deref()
        .and_then(parse_currency);
    if initial_balance.is_none() {
        error = true;
        invalid.push_str("initial_balance_usd");
    }

    if error {
        return Err(ApiError::InvalidFields(invalid));
    }

    // Both validated as Some above.
    let (Some(handed), Some(initial_balance)) = (handed, initial_balance) else {
        return Err(ApiError::Unprocessable);
    };

    let mut store = PlayerStore::open(data_path)?;
    let pid = store.create_player(fname, params.lname, handed, initial_balance)?;
    Ok(Redirect::to(&format!("/player/{pid}")))
}

// POST /player/:pid?active=..&lname=.. - Update last name and active flag
pub async fn update_player(
    State(data_path): State<PathBuf>,
    Path(pid): Path<i64>,
    Query(params): Query<UpdatePlayerParams>,
) -> Result<Redirect, ApiError> {
    // Anything outside the truthy set, including an absent parameter,
    // deactivates the player.
    let is_active = params
        .active
        .as_deref()
        .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "t"));

    if let Some(lname) = params.lname.as_deref() {
        if !is_valid_name(lname) {
            return Err(ApiError::Unprocessable);
        }
    }

    let mut store = PlayerStore::open(data_path)?;
    match store.update_player(pid, params.lname, Some(is_active), None)? {
        Some(pid) => Ok(Redirect::to(&format!("/player/{pid}"))),
        None => Err(ApiError::NotFound),
    }
}

// DELETE /player/:pid - Remove a player
pub async fn delete_player(
    State(data_path): State<PathBuf>,
    Path(pid): Path<i64>,
) -> Result<Redirect, ApiError> {
    let mut store = PlayerStore::open(data_path)?;
    match store.delete_player(pid)? {
        Some(_) => Ok(Redirect::to("/player")),
        None => Err(ApiError::NotFound),
    }
}
