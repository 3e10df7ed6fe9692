// 📦 Export - writes the derived collections for the presentation layer
//
// Collection files only contain derived data, so an unchanged input always
// produces byte-identical files. The run timestamp lives in manifest.json
// next to a SHA-256 digest of every file.

use crate::context::LeagueData;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub rows: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub files: Vec<ManifestEntry>,
}

// ============================================================================
// CSV ROWS
// ============================================================================
// CSV needs a flat record with the same columns on every row.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftRow<'a> {
    year: u16,
    team: &'a str,
    owner: &'a str,
    position: u32,
    final_rank: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChampionRow<'a> {
    year: u16,
    team_name: &'a str,
    owner_name: &'a str,
    wins: u32,
    losses: u32,
    ties: u32,
    points_for: f64,
    points_against: f64,
}

#[derive(Serialize)]
struct YearRow {
    year: u16,
}

struct Collection {
    name: &'static str,
    rows: usize,
    bytes: Vec<u8>,
}

fn to_json<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(rows)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV buffer: {}", e.error()))
}

fn collection<J: Serialize, C: Serialize>(
    name: &'static str,
    json_rows: &[J],
    csv_rows: &[C],
    format: ExportFormat,
) -> Result<Collection> {
    let bytes = match format {
        ExportFormat::Json => to_json(json_rows),
        ExportFormat::Csv => to_csv(csv_rows),
    }
    .with_context(|| format!("Failed to encode {}", name))?;

    Ok(Collection {
        name,
        rows: json_rows.len(),
        bytes,
    })
}

fn collections(data: &LeagueData, format: ExportFormat) -> Result<Vec<Collection>> {
    let draft_rows: Vec<DraftRow> = data
        .draft_positions
        .iter()
        .map(|d| DraftRow {
            year: d.year,
            team: &d.team,
            owner: &d.owner,
            position: d.position,
            final_rank: d.final_rank,
        })
        .collect();

    let champions = data.champions();
    let champion_rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            year: c.year,
            team_name: &c.team_name,
            owner_name: &c.owner_name,
            wins: c.record.wins,
            losses: c.record.losses,
            ties: c.record.ties,
            points_for: c.points_for,
            points_against: c.points_against,
        })
        .collect();

    let year_rows: Vec<YearRow> = data.years.iter().map(|&year| YearRow { year }).collect();

    Ok(vec![
        collection("standings", &data.standings, &data.standings, format)?,
        collection("records", &data.records, &data.records, format)?,
        collection("draftPositions", &data.draft_positions, &draft_rows, format)?,
        collection("matchups", &data.matchups, &data.matchups, format)?,
        collection("years", &data.years, &year_rows, format)?,
        collection("champions", &champions, &champion_rows, format)?,
    ])
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Write every collection plus manifest.json into `dir` (created if needed)
pub fn export_league(data: &LeagueData, dir: &Path, format: ExportFormat) -> Result<Manifest> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let mut files = Vec::new();
    for c in collections(data, format)? {
        let file = format!("{}.{}", c.name, format.extension());
        let path = dir.join(&file);
        fs::write(&path, &c.bytes).with_context(|| format!("Failed to write {:?}", path))?;

        debug!(file = %file, rows = c.rows, "wrote collection");
        files.push(ManifestEntry {
            file,
            rows: c.rows,
            sha256: sha256_hex(&c.bytes),
        });
    }

    let manifest = Manifest {
        generated_at: Utc::now(),
        version: crate::VERSION.to_string(),
        files,
    };

    let manifest_path = dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {:?}", manifest_path))?;

    info!(dir = ?dir, files = manifest.files.len(), "export complete");
    Ok(manifest)
}

/// Read the manifest in `dir`
pub fn read_manifest(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).context("Failed to parse manifest JSON")
}

/// Files in `dir` whose content no longer matches the manifest digest
///
/// A missing file counts as a mismatch.
pub fn verify_manifest(dir: &Path) -> Result<Vec<String>> {
    let manifest = read_manifest(dir)?;

    Ok(manifest
        .files
        .into_iter()
        .filter(|entry| match fs::read(dir.join(&entry.file)) {
            Ok(bytes) => sha256_hex(&bytes) != entry.sha256,
            Err(_) => true,
        })
        .map(|entry| entry.file)
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================
