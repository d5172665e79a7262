use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{format_currency, Handedness, Player, PlayerView};

const DATA_VERSION: &str = "1.0";

/// The entire datastore as serialized to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document {
    pub players: Vec<Player>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub version: String,
}

impl Document {
    fn empty() -> Self {
        let timestamp = Utc::now();
        Document {
            players: Vec::new(),
            updated_at: timestamp,
            created_at: timestamp,
            version: DATA_VERSION.to_string(),
        }
    }
}

/// Sole owner of the persisted document. Every operation works against a
/// fresh read of the file and mutations rewrite the whole file before
/// returning, so the file is the only state carried between requests.
///
/// There is no file locking: overlapping requests against the same path can
/// race on the read-modify-write. Known hazard, accepted for this service.
#[derive(Debug)]
pub struct PlayerStore {
    path: PathBuf,
    doc: Document,
}

impl PlayerStore {
    /// Open the datastore at `path`, creating the containing directory and
    /// an empty document if the file does not exist yet. An existing file
    /// that fails to parse is an error, never silently reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let doc = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            let doc = Document::empty();
            write_document(&path, &doc)?;
            doc
        };
        Ok(PlayerStore { path, doc })
    }

    /// Linear scan by id.
    pub fn get_player(&self, pid: i64) -> Option<&Player> {
        self.doc.players.iter().find(|p| p.pid == pid)
    }

    /// Create a player and return its id. Ids are assigned as one more than
    /// the highest id currently in the document, so numbering survives
    /// restarts. New players are always active.
    pub fn create_player(
        &mut self,
        fname: &str,
        lname: Option<String>,
        handed: Handedness,
        initial_balance: f64,
    ) -> Result<i64, StoreError> {
        let pid = self.doc.players.iter().map(|p| p.pid).max().unwrap_or(0) + 1;
        self.doc.players.push(Player {
            pid,
            fname: fname.to_string(),
            lname,
            handed,
            is_active: true,
            balance_usd: format_currency(initial_balance),
        });
        self.flush()?;
        Ok(pid)
    }

    /// Update a player in place. `lname` and `is_active` replace the stored
    /// values only when supplied; a deposit is applied only when positive.
    /// First name and handedness never change after creation. Returns
    /// `Ok(None)` when the id is unknown.
    pub fn update_player(
        &mut self,
        pid: i64,
        lname: Option<String>,
        is_active: Option<bool>,
        deposit: Option<f64>,
    ) -> Result<Option<i64>, StoreError> {
        let Some(player) = self.doc.players.iter_mut().find(|p| p.pid == pid) else {
            return Ok(None);
        };
        if let Some(lname) = lname {
            player.lname = Some(lname);
        }
        if let Some(is_active) = is_active {
            player.is_active = is_active;
        }
        if let Some(deposit) = deposit {
            if deposit > 0.0 {
                let balance: f64 = player
                    .balance_usd
                    .parse()
                    .map_err(|_| StoreError::BadBalance(pid))?;
                player.balance_usd = format_currency(balance + deposit);
            }
        }
        self.flush()?;
        Ok(Some(pid))
    }

    /// Remove the first record with a matching id. Returns `Ok(None)` when
    /// the id is unknown.
    pub fn delete_player(&mut self, pid: i64) -> Result<Option<i64>, StoreError> {
        let Some(index) = self.doc.players.iter().position(|p| p.pid == pid) else {
            return Ok(None);
        };
        self.doc.players.remove(index);
        self.flush()?;
        Ok(Some(pid))
    }

    pub fn get_balance(&self, pid: i64) -> Option<&str> {
        self.get_player(pid).map(|p| p.balance_usd.as_str())
    }

    /// All players in external form, sorted ascending by display name under
    /// ordinal comparison. Tie order between equal names is unspecified.
    pub fn list_players(&self) -> Vec<PlayerView> {
        let mut players: Vec<PlayerView> =
            self.doc.players.iter().map(Player::to_view).collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        players
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.doc.updated_at = Utc::now();
        write_document(&self.path, &self.doc)
    }
}

fn write_document(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(doc)?;
    fs::write(path, content)?;
    Ok(())
}
