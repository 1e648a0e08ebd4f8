use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::actions::Action;
use super::error::JournalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalStage {
    /// Handed to the store by the host.
    Received,
    /// Dispatched by the router while handling another action.
    Dispatched,
    /// Reached the end of the chain as a command or notification.
    Effect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub ts_ms: i64,
    pub stage: JournalStage,
    pub action: Action,
}

#[derive(Serialize)]
struct JournalRecordRef<'a> {
    seq: u64,
    ts_ms: i64,
    stage: JournalStage,
    action: &'a Action,
}

/// Append-only JSON-lines log of everything that went through the store.
#[derive(Debug)]
pub struct ActionJournal {
    path: PathBuf,
    next_seq: u64,
}

impl ActionJournal {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let next_seq = load_records(path.as_path())?
            .iter()
            .map(|record| record.seq)
            .max()
            .map_or(1, |seq| seq.saturating_add(1));
        Ok(Self { path, next_seq })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, stage: JournalStage, action: &Action) -> Result<u64, JournalError> {
        let seq = self.next_seq;
        let record = JournalRecordRef {
            seq,
            ts_ms: chrono::Utc::now().timestamp_millis(),
            stage,
            action,
        };
        let line = serde_json::to_string(&record).map_err(JournalError::Serialize)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        self.next_seq = self.next_seq.saturating_add(1);
        Ok(seq)
    }

    pub fn load(&self) -> Result<Vec<JournalRecord>, JournalError> {
        load_records(self.path.as_path())
    }

    pub fn load_since(&self, seq_exclusive: u64) -> Result<Vec<JournalRecord>, JournalError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|record| record.seq > seq_exclusive)
            .collect())
    }
}

fn load_records(path: &Path) -> Result<Vec<JournalRecord>, JournalError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(std::fs::File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str::<JournalRecord>(&line).map_err(|source| {
            JournalError::Parse {
                line: idx + 1,
                source,
            }
        })?;
        records.push(record);
    }
    Ok(records)
}
