//! SQLite Store
//!
//! Embedded single-file implementation of the reporting store.
//! Timestamps are stored as Unix-epoch milliseconds so range queries
//! stay plain integer comparisons.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::audit::{AuditAction, AuditEvent};
use crate::error::{StoreError, StoreResult};
use crate::models::{Agent, Contribution, ContributionStatus, Mission, MissionStatus};
use crate::store::DataStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS agents (
    id         INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    matricule  TEXT NOT NULL UNIQUE,
    service    TEXT NOT NULL,
    active     INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS contributions (
    id           INTEGER PRIMARY KEY,
    title        TEXT NOT NULL,
    content      TEXT NOT NULL,
    status       TEXT NOT NULL DEFAULT 'DRAFT',
    priority     INTEGER NOT NULL DEFAULT 2,
    created_at   INTEGER NOT NULL,
    validated_at INTEGER,
    agent_id     INTEGER NOT NULL REFERENCES agents(id)
);
CREATE INDEX IF NOT EXISTS idx_contributions_created ON contributions(created_at);

CREATE TABLE IF NOT EXISTS missions (
    id           INTEGER PRIMARY KEY,
    title        TEXT NOT NULL,
    status       TEXT NOT NULL DEFAULT 'PENDING',
    priority     INTEGER NOT NULL DEFAULT 2,
    created_at   INTEGER NOT NULL,
    completed_at INTEGER,
    due_at       INTEGER,
    agent_id     INTEGER NOT NULL REFERENCES agents(id)
);

CREATE TABLE IF NOT EXISTS audit_log (
    id        TEXT PRIMARY KEY,
    user      TEXT,
    action    TEXT NOT NULL,
    target    TEXT NOT NULL,
    timestamp INTEGER NOT NULL
);
";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Private throwaway database, used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    // ========================================================================
    // SEEDING
    // ========================================================================

    pub fn insert_agent(&self, agent: &Agent) -> StoreResult<()> {
        self.conn.lock().execute(
            "INSERT INTO agents (id, name, matricule, service, active) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![agent.id, agent.name, agent.matricule, agent.service, agent.active],
        )?;
        Ok(())
    }

    /// The denormalized `service` field is ignored on insert; reads
    /// recover it by joining the owning agent.
    pub fn insert_contribution(&self, contrib: &Contribution) -> StoreResult<()> {
        self.conn.lock().execute(
            "INSERT INTO contributions (id, title, content, status, priority, created_at, validated_at, agent_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                contrib.id,
                contrib.title,
                contrib.content,
                contrib.status.as_str(),
                contrib.priority,
                contrib.created_at.timestamp_millis(),
                contrib.validated_at.map(|t| t.timestamp_millis()),
                contrib.agent_id,
            ],
        )?;
        Ok(())
    }

    pub fn insert_mission(&self, mission: &Mission) -> StoreResult<()> {
        self.conn.lock().execute(
            "INSERT INTO missions (id, title, status, priority, created_at, completed_at, due_at, agent_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                mission.id,
                mission.title,
                mission.status.as_str(),
                mission.priority,
                mission.created_at.timestamp_millis(),
                mission.completed_at.map(|t| t.timestamp_millis()),
                mission.due_at.map(|t| t.timestamp_millis()),
                mission.agent_id,
            ],
        )?;
        Ok(())
    }

    fn query_contributions(&self, min_created_millis: Option<i64>) -> StoreResult<Vec<Contribution>> {
        let conn = self.conn.lock();
        let sql = "SELECT c.id, c.title, c.content, c.status, c.priority, c.created_at,
                          c.validated_at, c.agent_id, a.service
                   FROM contributions c
                   LEFT JOIN agents a ON a.id = c.agent_id
                   WHERE c.created_at >= ?1
                   ORDER BY c.id";
        let mut stmt = conn.prepare(sql)?;

        let raw: Vec<RawContribution> = stmt
            .query_map(params![min_created_millis.unwrap_or(i64::MIN)], |row| {
                Ok(RawContribution {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                    status: row.get(3)?,
                    priority: row.get(4)?,
                    created_at: row.get(5)?,
                    validated_at: row.get(6)?,
                    agent_id: row.get(7)?,
                    service: row.get(8)?,
                })
            })?
            .collect::<Result<_, _>>()?;

        raw.into_iter().map(RawContribution::decode).collect()
    }
}

// ============================================================================
// ROW DECODING
// ============================================================================

struct RawContribution {
    id: i64,
    title: String,
    content: String,
    status: String,
    priority: i32,
    created_at: i64,
    validated_at: Option<i64>,
    agent_id: i64,
    service: Option<String>,
}

impl RawContribution {
    fn decode(self) -> StoreResult<Contribution> {
        Ok(Contribution {
            id: self.id,
            title: self.title,
            content: self.content,
            status: ContributionStatus::parse(&self.status).ok_or_else(|| {
                StoreError::corrupt("contributions", format!("unknown status '{}'", self.status))
            })?,
            priority: self.priority,
            created_at: decode_millis("contributions", self.created_at)?,
            validated_at: self.validated_at.map(|m| decode_millis("contributions", m)).transpose()?,
            agent_id: self.agent_id,
            service: self.service,
        })
    }
}

fn decode_millis(table: &'static str, millis: i64) -> StoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| StoreError::corrupt(table, format!("timestamp {} out of range", millis)))
}

// ============================================================================
// DATASTORE IMPL
// ============================================================================

impl DataStore for SqliteStore {
    fn contributions_since(&self, t: DateTime<Utc>) -> StoreResult<Vec<Contribution>> {
        self.query_contributions(Some(t.timestamp_millis()))
    }

    fn contributions_all(&self) -> StoreResult<Vec<Contribution>> {
        self.query_contributions(None)
    }

    fn missions_all(&self) -> StoreResult<Vec<Mission>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, title, status, priority, created_at, completed_at, due_at, agent_id
             FROM missions ORDER BY id",
        )?;

        let raw: Vec<(i64, String, String, i32, i64, Option<i64>, Option<i64>, i64)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            })?
            .collect::<Result<_, _>>()?;

        raw.into_iter()
            .map(|(id, title, status, priority, created_at, completed_at, due_at, agent_id)| {
                Ok(Mission {
                    id,
                    title,
                    status: MissionStatus::parse(&status).ok_or_else(|| {
                        StoreError::corrupt("missions", format!("unknown status '{}'", status))
                    })?,
                    priority,
                    created_at: decode_millis("missions", created_at)?,
                    completed_at: completed_at.map(|m| decode_millis("missions", m)).transpose()?,
                    due_at: due_at.map(|m| decode_millis("missions", m)).transpose()?,
                    agent_id,
                })
            })
            .collect()
    }

    fn agents_all(&self) -> StoreResult<Vec<Agent>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT id, name, matricule, service, active FROM agents ORDER BY id")?;

        let agents = stmt
            .query_map([], |row| {
                Ok(Agent {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    matricule: row.get(2)?,
                    service: row.get(3)?,
                    active: row.get(4)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(agents)
    }

    fn audit_recent(&self, limit: usize) -> StoreResult<Vec<AuditEvent>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, user, action, target, timestamp FROM audit_log
             ORDER BY rowid DESC LIMIT ?1",
        )?;

        let raw: Vec<(String, Option<String>, String, String, i64)> = stmt
            .query_map(params![limit as i64], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?
            .collect::<Result<_, _>>()?;

        raw.into_iter()
            .map(|(id, user, action, target, timestamp)| {
                Ok(AuditEvent {
                    id: Uuid::parse_str(&id).map_err(|e| {
                        StoreError::corrupt("audit_log", format!("bad id '{}': {}", id, e))
                    })?,
                    user,
                    action: AuditAction::parse(&action).ok_or_else(|| {
                        StoreError::corrupt("audit_log", format!("unknown action '{}'", action))
                    })?,
                    target,
                    timestamp: decode_millis("audit_log", timestamp)?,
                })
            })
            .collect()
    }

    fn record_audit(&self, event: &AuditEvent) -> StoreResult<()> {
        self.conn.lock().execute(
            "INSERT INTO audit_log (id, user, action, target, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.id.to_string(),
                event.user,
                event.action.as_str(),
                event.target,
                event.timestamp.timestamp_millis(),
            ],
        )?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
