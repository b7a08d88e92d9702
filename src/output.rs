use colored::Colorize;

use crate::database::{Pairing, Post, Standing};

pub fn format_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts yet".dimmed().to_string();
    }

    posts
        .iter()
        .map(|post| {
            let time = post.time.format("%Y-%m-%d %H:%M:%S").to_string();
            format!("{} {}", time.dimmed(), post.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_standings(standings: &[Standing]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:>6}  {:<30} {:>5} {:>7}",
        "#", "id", "name", "wins", "matches"
    )
    .bold()
    .to_string()];

    for (i, row) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>6}  {:<30} {:>5} {:>7}",
            i + 1,
            row.player_id,
            row.name,
            row.wins,
            row.matches
        );
        let line = if i == 0 && row.wins > 0 {
            line.green().to_string()
        } else {
            line
        };
        lines.push(line);
    }

    lines.join("\n")
}

pub fn format_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".dimmed().to_string();
    }

    pairings
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "Table {}: {} ({}) {} {} ({})",
                i + 1,
                p.name1,
                p.id1,
                "vs".cyan(),
                p.name2,
                p.id2
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
