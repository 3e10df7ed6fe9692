// 🗄️ SQLite export - the derived league as queryable tables
//
// Each write replaces the previous contents wholesale inside one
// transaction; derived data is never updated row by row.

use crate::context::LeagueData;
use crate::matchups::Matchup;
use crate::standings::{PlayoffResult, YearlyStanding};
use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

/// Open (or create) the database file and make sure the schema exists
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open database: {:?}", path))?;
    setup_database(&conn)?;
    Ok(conn)
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS owners (
            id TEXT PRIMARY KEY,
            display_name TEXT NOT NULL,
            first_name TEXT,
            last_name TEXT
        );

        CREATE TABLE IF NOT EXISTS standings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            team TEXT NOT NULL,
            owner TEXT NOT NULL,
            rank INTEGER NOT NULL,
            wins INTEGER NOT NULL,
            losses INTEGER NOT NULL,
            ties INTEGER NOT NULL,
            points_for REAL NOT NULL,
            points_against REAL NOT NULL,
            playoff_result TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS records (
            owner TEXT PRIMARY KEY,
            wins INTEGER NOT NULL,
            losses INTEGER NOT NULL,
            ties INTEGER NOT NULL,
            points_for REAL NOT NULL,
            points_against REAL NOT NULL,
            playoff_appearances INTEGER NOT NULL,
            championships INTEGER NOT NULL,
            seasons INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS draft_positions (
            year INTEGER NOT NULL,
            team TEXT NOT NULL,
            owner TEXT NOT NULL,
            position INTEGER NOT NULL,
            final_rank INTEGER
        );

        CREATE TABLE IF NOT EXISTS matchups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            season INTEGER NOT NULL,
            week INTEGER NOT NULL,
            home_team TEXT NOT NULL,
            away_team TEXT NOT NULL,
            home_owner TEXT NOT NULL,
            away_owner TEXT NOT NULL,
            home_score REAL NOT NULL,
            away_score REAL NOT NULL,
            is_playoff INTEGER NOT NULL,
            is_championship INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_standings_year ON standings(year);
        CREATE INDEX IF NOT EXISTS idx_matchups_season ON matchups(season, week);",
    )?;

    Ok(())
}

/// Replace every table with the contents of `data`
pub fn write_league(conn: &mut Connection, data: &LeagueData) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute_batch(
        "DELETE FROM owners;
         DELETE FROM standings;
         DELETE FROM records;
         DELETE FROM draft_positions;
         DELETE FROM matchups;",
    )?;

    {
        let mut stmt =
            tx.prepare("INSERT INTO owners (id, display_name, first_name, last_name) VALUES (?1, ?2, ?3, ?4)")?;
        for owner in data.owners.all() {
            stmt.execute(params![owner.id, owner.display_name, owner.first_name, owner.last_name])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO standings (
                year, team, owner, rank, wins, losses, ties,
                points_for, points_against, playoff_result
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for s in &data.standings {
            stmt.execute(params![
                s.year,
                s.team,
                s.owner,
                s.rank,
                s.wins,
                s.losses,
                s.ties,
                s.points_for,
                s.points_against,
                s.playoff_result.as_str(),
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO records (
                owner, wins, losses, ties, points_for, points_against,
                playoff_appearances, championships, seasons
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for r in &data.records {
            stmt.execute(params![
                r.owner,
                r.wins,
                r.losses,
                r.ties,
                r.points_for,
                r.points_against,
                r.playoff_appearances,
                r.championships,
                r.seasons,
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO draft_positions (year, team, owner, position, final_rank)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for d in &data.draft_positions {
            stmt.execute(params![d.year, d.team, d.owner, d.position, d.final_rank])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO matchups (
                season, week, home_team, away_team, home_owner, away_owner,
                home_score, away_score, is_playoff, is_championship
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for m in &data.matchups {
            stmt.execute(params![
                m.season,
                m.week,
                m.home_team,
                m.away_team,
                m.home_owner,
                m.away_owner,
                m.home_score,
                m.away_score,
                m.is_playoff,
                m.is_championship,
            ])?;
        }
    }

    tx.commit().context("Failed to commit league data")?;

    info!(
        standings = data.standings.len(),
        matchups = data.matchups.len(),
        "wrote league database"
    );
    Ok(())
}

/// Standings in export order: year descending, rank ascending
pub fn read_standings(conn: &Connection) -> Result<Vec<YearlyStanding>> {
    let mut stmt = conn.prepare(
        "SELECT year, team, owner, rank, wins, losses, ties,
                points_for, points_against, playoff_result
         FROM standings
         ORDER BY year DESC, rank ASC, id ASC",
    )?;

    let standings = stmt
        .query_map([], |row| {
            let label: String = row.get(9)?;
            let playoff_result = PlayoffResult::parse(&label).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    9,
                    Type::Text,
                    format!("unknown playoff result: {}", label).into(),
                )
            })?;

            Ok(YearlyStanding {
                year: row.get(0)?,
                team: row.get(1)?,
                owner: row.get(2)?,
                rank: row.get(3)?,
                wins: row.get(4)?,
                losses: row.get(5)?,
                ties: row.get(6)?,
                points_for: row.get(7)?,
                points_against: row.get(8)?,
                playoff_result,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(standings)
}

/// Matchups in export order: season descending, week ascending
pub fn read_matchups(conn: &Connection) -> Result<Vec<Matchup>> {
    let mut stmt = conn.prepare(
        "SELECT season, week, home_team, away_team, home_owner, away_owner,
                home_score, away_score, is_playoff, is_championship
         FROM matchups
         ORDER BY season DESC, week ASC, id ASC",
    )?;

    let matchups = stmt
        .query_map([], |row| {
            Ok(Matchup {
                season: row.get(0)?,
                week: row.get(1)?,
                home_team: row.get(2)?,
                away_team: row.get(3)?,
                home_owner: row.get(4)?,
                away_owner: row.get(5)?,
                home_score: row.get(6)?,
                away_score: row.get(7)?,
                is_playoff: row.get(8)?,
                is_championship: row.get(9)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(matchups)
}

pub fn verify_count(conn: &Connection, table: &str) -> Result<i64> {
    let sql = match table {
        "owners" | "standings" | "records" | "draft_positions" | "matchups" => {
            format!("SELECT COUNT(*) FROM {}", table)
        }
        other => anyhow::bail!("Unknown table: {}", other),
    };
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;

    Ok(count)
}

// ============================================================================
// TESTS
// ============================================================================
