//! Serialization support for trained agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::q_learning::agent::{QAgent, QAgentState};

/// Metadata recorded alongside a saved agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Number of self-play games the agent was trained on
    pub games_trained: Option<usize>,
    /// Seed used for the training run, if any
    pub seed: Option<u64>,
    /// Timestamp string supplied by the caller
    pub saved_at: Option<String>,
}

/// Versioned on-disk snapshot of a trained [`QAgent`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQAgent {
    pub version: u32,
    state: QAgentState,
    pub metadata: TrainingMetadata,
}

impl SavedQAgent {
    pub const VERSION: u32 = 1;

    /// Snapshot an agent together with its training metadata
    pub fn from_agent(agent: &QAgent, metadata: TrainingMetadata) -> Self {
        Self {
            version: Self::VERSION,
            state: agent.export_state(),
            metadata,
        }
    }

    /// Rebuild the agent from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot was written by an unsupported
    /// format version.
    pub fn to_agent(&self) -> Result<QAgent> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }
        Ok(QAgent::from_state(self.state.clone()))
    }

    /// Write the snapshot as MessagePack
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    /// Read a snapshot previously written by [`save_to_file`](Self::save_to_file)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}
