use serde::{Deserialize, Serialize};

use crate::database::{MatchId, Pairing, Player, PlayerId, Post, Standing, Tournament};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItem {
    pub id: i64,
    pub content: String,
    pub time: String,
}

impl From<Post> for PostItem {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            content: post.content,
            time: post.time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentItem {
    pub id: i64,
    pub name: String,
}

impl From<Tournament> for TournamentItem {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub player_id: PlayerId,
    pub name: String,
}

impl From<Player> for PlayerItem {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

impl StandingItem {
    pub fn ranked(standings: Vec<Standing>) -> Vec<Self> {
        standings
            .into_iter()
            .enumerate()
            .map(|(i, row)| Self {
                rank: i + 1,
                player_id: row.player_id,
                name: row.name,
                wins: row.wins,
                matches: row.matches,
            })
            .collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingItem {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl From<Pairing> for PairingItem {
    fn from(pairing: Pairing) -> Self {
        Self {
            id1: pairing.id1,
            name1: pairing.name1,
            id2: pairing.id2,
            name2: pairing.name2,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReported {
    pub match_id: MatchId,
}

#[derive(Deserialize)]
pub struct NewPost {
    pub content: String,
}

#[derive(Deserialize)]
pub struct NewName {
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewMatch {
    pub winner: PlayerId,
    pub loser: PlayerId,
}
