//! Schema migration framework.

use crate::StoreError;
use crate::schema::Network;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut network: Network) -> Result<Network, StoreError> {
    while network.version < LATEST_VERSION {
        network = migrate_one_version(network)?;
    }
    Ok(network)
}

fn migrate_one_version(network: Network) -> Result<Network, StoreError> {
    match network.version {
        0 => migrate_v0_to_v1(network),
        v => Err(StoreError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 documents carried no audit columns; stamp them at load time.
fn migrate_v0_to_v1(mut network: Network) -> Result<Network, StoreError> {
    let now = crate::timestamp_now();
    for line in &mut network.lines {
        if line.created_at.is_empty() {
            line.created_at = now.clone();
        }
        if line.modified_at.is_empty() {
            line.modified_at = line.created_at.clone();
        }
    }
    network.version = 1;
    Ok(network)
}
