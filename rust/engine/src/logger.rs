use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Category;
use crate::showdown::Ranking;
use crate::table::Table;

/// One seat's result within a showdown record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    /// Seat index, starting at 0
    pub player: usize,
    /// Hole cards in dealt order
    pub hole: Vec<Card>,
    pub category: Category,
    /// Category tier (0-900)
    pub score: u16,
    /// Human readable category name
    pub label: String,
    /// Best five cards, category cards first
    pub best_five: Vec<Card>,
    /// Competition place, 1 for the winner(s)
    pub place: usize,
}

/// Complete record of one dealt table and its showdown.
/// Serialized to JSONL, one record per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownRecord {
    /// Unique identifier for this deal (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for the deck shuffle
    pub seed: Option<u64>,
    /// The five community cards
    pub board: Vec<Card>,
    /// Seats ordered strongest first
    pub seats: Vec<SeatResult>,
    /// Seat indices sharing first place
    pub winners: Vec<usize>,
    /// Timestamp of the write (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl ShowdownRecord {
    pub fn new(hand_id: String, seed: Option<u64>, table: &Table, ranking: &Ranking<usize>) -> Self {
        let seats = ranking
            .standings()
            .iter()
            .map(|s| SeatResult {
                player: s.id,
                hole: table
                    .seats()
                    .iter()
                    .find(|seat| seat.id() == s.id)
                    .map(|seat| seat.hole_cards().to_vec())
                    .unwrap_or_default(),
                category: s.hand.category(),
                score: s.hand.score(),
                label: s.hand.label().to_string(),
                best_five: s.hand.best_five().to_vec(),
                place: s.place,
            })
            .collect();
        Self {
            hand_id,
            seed,
            board: table.board().to_vec(),
            seats,
            winners: ranking.winners().map(|s| s.id).collect(),
            ts: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct ShowdownLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl ShowdownLogger {
    /// Open `path` for appending, creating parent directories as needed.
    /// Ids continue after the records already in the file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = match File::open(path) {
            Ok(f) => BufReader::new(f)
                .lines()
                .map_while(Result::ok)
                .filter(|l| !l.trim().is_empty())
                .count() as u32,
            Err(_) => 0,
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &ShowdownRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ShowdownLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowdownLogger")
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}
