//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Cron expression for the monthly rollover job.
    ///
    /// Default: 00:05 on the first day of every month.
    #[serde(default = "default_rollover_cron")]
    pub rollover_cron: String,
    /// Buffer size of the projection event channel between the partition
    /// watchers and the projection worker.
    #[serde(default = "default_projection_buffer")]
    pub projection_buffer_size: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            rollover_cron: default_rollover_cron(),
            projection_buffer_size: default_projection_buffer(),
        }
    }
}

fn default_rollover_cron() -> String {
    "0 5 0 1 * *".to_string()
}

fn default_projection_buffer() -> usize {
    512
}
