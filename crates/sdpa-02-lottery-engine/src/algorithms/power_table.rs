//! # Power Table Construction
//!
//! Turns the day's miner snapshot into the ordered power table.
//!
//! - Switched off: contributes nothing and is not registered
//! - Solo and on: registered individually with power = hardware count
//! - Pooled and on: hardware count is added to the pool

use crate::domain::{Player, PowerTable};
use shared_types::{MinerSnapshot, PoolMode};

/// Build the power table for one draw.
///
/// The snapshot must only contain active participants and is read in order,
/// so solo players keep their registration order.
pub fn build_power_table(snapshot: &[MinerSnapshot], base_pool_power: u64) -> PowerTable {
    let mut table = PowerTable::new(base_pool_power);

    for miner in snapshot.iter().filter(|m| m.power_status.is_on()) {
        match miner.pool_mode {
            PoolMode::Solo => {
                table.register_solo(Player::Solo(miner.participant.clone()), miner.effective_power())
            }
            PoolMode::Pooled => table.add_pool_power(miner.effective_power()),
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ParticipantId, PowerStatus};

    fn miner(name: &str, hw: u32, power: PowerStatus, mode: PoolMode) -> MinerSnapshot {
        MinerSnapshot::new(ParticipantId::new(name), hw, power, mode)
    }

    #[test]
    fn test_empty_snapshot_is_floor_only() {
        let table = build_power_table(&[], 1000);
        assert_eq!(table.entries(), &[(Player::Pool, 1000)]);
        assert!(!table.pool_has_contributors());
    }

    #[test]
    fn test_off_miners_ignored() {
        let snapshot = vec![
            miner("a", 5, PowerStatus::Off, PoolMode::Solo),
            miner("b", 7, PowerStatus::Off, PoolMode::Pooled),
        ];
        let table = build_power_table(&snapshot, 1000);
        assert_eq!(table.entries().len(), 1);
        assert_eq!(table.total_power(), 1000);
    }

    #[test]
    fn test_mixed_snapshot() {
        let snapshot = vec![
            miner("a", 5, PowerStatus::On, PoolMode::Solo),
            miner("b", 7, PowerStatus::On, PoolMode::Pooled),
            miner("c", 3, PowerStatus::On, PoolMode::Solo),
            miner("d", 2, PowerStatus::On, PoolMode::Pooled),
        ];
        let table = build_power_table(&snapshot, 1000);
        let solo = |n: &str| Player::Solo(ParticipantId::new(n));
        assert_eq!(
            table.entries(),
            &[(Player::Pool, 1009), (solo("a"), 5), (solo("c"), 3)]
        );
        assert_eq!(table.total_power(), 1017);
    }
}
