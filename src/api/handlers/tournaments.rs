use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::models::{
    CountResponse, DeletedResponse, MatchReported, NewMatch, NewName, PairingItem, PlayerItem,
    StandingItem, TournamentItem,
};
use crate::database::TournamentId;
use crate::errors::StoreResult;
use super::AppState;

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewName>,
) -> StoreResult<(StatusCode, Json<TournamentItem>)> {
    let tournament = state.tournaments.create_tournament(&body.name)?;
    Ok((StatusCode::CREATED, Json(tournament.into())))
}

pub async fn count_players(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> StoreResult<Json<CountResponse>> {
    let count = state.tournaments.count_players(tournament_id)?;
    Ok(Json(CountResponse { count }))
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(body): Json<NewName>,
) -> StoreResult<(StatusCode, Json<PlayerItem>)> {
    let player = state.tournaments.register_player(tournament_id, &body.name)?;
    Ok((StatusCode::CREATED, Json(player.into())))
}

pub async fn delete_players(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> StoreResult<Json<DeletedResponse>> {
    let deleted = state.tournaments.delete_players(tournament_id)?;
    Ok(Json(DeletedResponse { deleted }))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> StoreResult<Json<Vec<StandingItem>>> {
    let standings = state.tournaments.player_standings(tournament_id)?;
    Ok(Json(StandingItem::ranked(standings)))
}

pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> StoreResult<Json<Vec<PairingItem>>> {
    let pairings = state.tournaments.swiss_pairings(tournament_id)?;
    Ok(Json(pairings.into_iter().map(PairingItem::from).collect()))
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(body): Json<NewMatch>,
) -> StoreResult<(StatusCode, Json<MatchReported>)> {
    let match_id = state
        .tournaments
        .report_match(tournament_id, body.winner, body.loser)?;
    Ok((StatusCode::CREATED, Json(MatchReported { match_id })))
}

pub async fn delete_matches(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> StoreResult<Json<DeletedResponse>> {
    let deleted = state.tournaments.delete_matches(tournament_id)?;
    Ok(Json(DeletedResponse { deleted }))
}
