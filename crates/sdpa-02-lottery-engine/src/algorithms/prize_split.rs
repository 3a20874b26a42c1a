//! # Prize Split
//!
//! Solo winners take the whole prize. A pool win is split across every
//! pooled, powered participant as
//! `hardware_count / pool_power * daily_prize`, where `pool_power` includes
//! the base floor. The floor's share is paid to nobody.

use crate::domain::{Player, PowerTable, PrizeAward};
use shared_types::{Coins, MinerSnapshot};

/// Awards for the winner plus the undistributed remainder.
pub fn split_prize(
    winner: &Player,
    table: &PowerTable,
    snapshot: &[MinerSnapshot],
    daily_prize: Coins,
) -> (Vec<PrizeAward>, Coins) {
    match winner {
        Player::Solo(id) => (vec![PrizeAward::new(id.clone(), daily_prize)], 0.0),
        Player::Pool => {
            if !table.pool_has_contributors() {
                return (Vec::new(), daily_prize);
            }
            let pool_power = table.pool_power() as f64;
            let awards: Vec<PrizeAward> = snapshot
                .iter()
                .filter(|miner| miner.is_pool_contributor())
                .map(|miner| {
                    let share = f64::from(miner.hardware_count) / pool_power * daily_prize;
                    PrizeAward::new(miner.participant.clone(), share)
                })
                .collect();
            let awarded: Coins = awards.iter().map(|award| award.amount).sum();
            (awards, daily_prize - awarded)
        }
    }
}
