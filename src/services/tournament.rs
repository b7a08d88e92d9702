use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::database::{
    self, setup::Schema, DbPool, MatchId, Outcome, Pairing, Player, PlayerId, Standing, Tournament,
    TournamentId,
};
use crate::errors::{StoreError, StoreResult};
use crate::pairing::{self, OddPlayerPolicy};
use crate::sanitize::Sanitizer;

/// Swiss-system tournament bookkeeping: players, matches and pairings.
///
/// Every operation names the tournament it works on. Mutations spanning
/// several statements run in a single transaction.
#[derive(Clone)]
pub struct TournamentStore {
    pool: DbPool,
    sanitizer: Arc<Sanitizer>,
    odd_player_policy: OddPlayerPolicy,
}

impl TournamentStore {
    pub fn new(pool: DbPool, sanitizer: Arc<Sanitizer>, odd_player_policy: OddPlayerPolicy) -> Self {
        Self {
            pool,
            sanitizer,
            odd_player_policy,
        }
    }

    pub fn open(config: &AppConfig, sanitizer: Arc<Sanitizer>) -> Result<Self> {
        let pool = database::create_pool(&config.database.tournament_path, &config.database)?;
        Ok(Self::new(pool, sanitizer, config.tournament.odd_player_policy))
    }

    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = database::get_connection(&self.pool)?;
        database::setup::apply_schema(&conn, Schema::Tournament)?;
        Ok(())
    }

    pub fn create_tournament(&self, name: &str) -> StoreResult<Tournament> {
        let name = self.clean_name(name)?;
        let conn = database::get_connection(&self.pool)?;
        let tournament = database::tournaments::insert_tournament(&conn, &name)?;
        info!("Created tournament {} ({})", tournament.id, tournament.name);
        Ok(tournament)
    }

    /// Remove all matches and results of the tournament. Returns how many
    /// matches were removed.
    pub fn delete_matches(&self, tournament_id: TournamentId) -> StoreResult<usize> {
        let removed = database::with_transaction(&self.pool, "delete_matches", |tx| {
            Ok(database::matches::delete_by_tournament(tx, tournament_id)?)
        })?;

        info!("Deleted {} matches from tournament {}", removed, tournament_id);
        Ok(removed)
    }

    /// Withdraw every player of the tournament, removing their matches and
    /// results, and the players themselves once enrolled nowhere else.
    /// Returns how many players were withdrawn.
    pub fn delete_players(&self, tournament_id: TournamentId) -> StoreResult<usize> {
        let (withdrawn, deleted) = database::with_transaction(&self.pool, "delete_players", |tx| {
            // Matches only ever involve players of their own tournament.
            let matches = database::matches::delete_by_tournament(tx, tournament_id)?;
            let player_ids = database::players::withdraw_all(tx, tournament_id)?;

            let mut deleted = 0;
            for player_id in &player_ids {
                if database::players::delete_if_unenrolled(tx, *player_id)? {
                    deleted += 1;
                }
            }

            debug!("Removed {} matches with the players of tournament {}", matches, tournament_id);
            Ok((player_ids.len(), deleted))
        })?;

        info!(
            "Withdrew {} players from tournament {} ({} deleted)",
            withdrawn, tournament_id, deleted
        );
        Ok(withdrawn)
    }

    pub fn count_players(&self, tournament_id: TournamentId) -> StoreResult<i64> {
        let conn = database::get_connection(&self.pool)?;

        database::tournaments::count_players(&conn, tournament_id)?.ok_or_else(|| {
            StoreError::NoData(format!("player_count has no row for tournament {}", tournament_id))
        })
    }

    pub fn register_player(&self, tournament_id: TournamentId, name: &str) -> StoreResult<Player> {
        let name = self.clean_name(name)?;

        let player = database::with_transaction(&self.pool, "register_player", |tx| {
            require_tournament(tx, tournament_id)?;
            let player = database::players::insert_player(tx, &name)?;
            database::players::enroll(tx, player.id, tournament_id)?;
            Ok(player)
        })?;

        info!("Registered player {} ({}) in tournament {}", player.id, player.name, tournament_id);
        Ok(player)
    }

    /// Players ordered by wins, best first
    pub fn player_standings(&self, tournament_id: TournamentId) -> StoreResult<Vec<Standing>> {
        let conn = database::get_connection(&self.pool)?;
        require_tournament(&conn, tournament_id)?;

        let standings = database::matches::standings(&conn, tournament_id)?;
        debug!("Standings of tournament {}: {} players", tournament_id, standings.len());
        Ok(standings)
    }

    /// Record a single match. The match and both results are stored
    /// together or not at all.
    pub fn report_match(
        &self,
        tournament_id: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> StoreResult<MatchId> {
        if winner == loser {
            return Err(StoreError::InvalidInput(format!(
                "player {} cannot play against themselves",
                winner
            )));
        }

        let match_id = database::with_transaction(&self.pool, "report_match", |tx| {
            require_tournament(tx, tournament_id)?;
            for player_id in [winner, loser] {
                if !database::players::is_enrolled(tx, tournament_id, player_id)? {
                    return Err(StoreError::NotFound(format!(
                        "player {} is not registered in tournament {}",
                        player_id, tournament_id
                    )));
                }
            }

            let match_id = database::matches::insert_match(tx, tournament_id)?;
            database::matches::insert_result(tx, match_id, winner, Outcome::Win)?;
            database::matches::insert_result(tx, match_id, loser, Outcome::Loss)?;
            Ok(match_id)
        })?;

        info!(
            "Reported match {} in tournament {}: {} beat {}",
            match_id, tournament_id, winner, loser
        );
        Ok(match_id)
    }

    /// Pairings for the next round: neighbours in the standings play each other.
    pub fn swiss_pairings(&self, tournament_id: TournamentId) -> StoreResult<Vec<Pairing>> {
        let standings = self.player_standings(tournament_id)?;
        pairing::pair_adjacent(&standings, self.odd_player_policy)
    }

    fn clean_name(&self, name: &str) -> StoreResult<String> {
        let name = self.sanitizer.clean(name.trim());
        if name.is_empty() {
            return Err(StoreError::InvalidInput("name must not be empty".to_string()));
        }
        Ok(name)
    }
}

fn require_tournament(conn: &Connection, tournament_id: TournamentId) -> StoreResult<Tournament> {
    database::tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| StoreError::NotFound(format!("tournament {}", tournament_id)))
}
