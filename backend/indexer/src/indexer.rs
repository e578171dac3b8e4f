//! Long-running background task that polls the Soroban RPC and writes
//! decoded registry events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::rpc::{self, PageRequest};

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Where the next poll resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    ledger: u32,
    cursor: Option<String>,
}

/// Run the indexer loop until `shutdown` is cancelled.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let last_ledger = db::get_last_ledger(&state.pool).await.unwrap_or(0);
    let cursor = db::get_cursor_string(&state.pool).await.unwrap_or(None);

    let mut position = Position {
        ledger: if last_ledger > 0 {
            last_ledger as u32
        } else {
            state.config.start_ledger
        },
        cursor,
    };

    info!("Resuming from ledger {}", position.ledger);

    loop {
        match poll_once(&state, &position).await {
            Ok(next) => position = next,
            Err(e) => error!("Indexer poll error: {e}"),
        }

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Indexer stopping at ledger {}", position.ledger);
                return;
            }
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }
}

/// Perform a single poll iteration and return the position to resume from.
async fn poll_once(state: &IndexerState, position: &Position) -> crate::errors::Result<Position> {
    let page = rpc::fetch_events(
        &state.client,
        &state.config.rpc_url,
        &state.config.contract_id,
        PageRequest {
            start_ledger: position.ledger,
            cursor: position.cursor.as_deref(),
            limit: state.config.events_per_page,
        },
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &state.config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next = next_position(position, page.cursor, page.latest_ledger);
    db::save_cursor(&state.pool, next.ledger as i64, next.cursor.as_deref()).await?;
    Ok(next)
}

/// The ledger never moves backwards; the cursor always follows the RPC.
fn next_position(current: &Position, cursor: Option<String>, latest: Option<u64>) -> Position {
    let ledger = latest
        .map(|l| (l as u32).max(current.ledger))
        .unwrap_or(current.ledger);
    Position { ledger, cursor }
}
