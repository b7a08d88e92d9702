use chrono::NaiveDateTime;

pub type TournamentId = i64;
pub type PlayerId = i64;
pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss = 0,
    Win = 1,
}

impl Outcome {
    pub fn score(self) -> i64 {
        self as i64
    }
}

// DTOs for joined queries
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.player_id,
            name1: first.name.clone(),
            id2: second.player_id,
            name2: second.name.clone(),
        }
    }
}
