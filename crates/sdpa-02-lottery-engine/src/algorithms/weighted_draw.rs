//! # Weighted Draw
//!
//! Cumulative distribution over the power table and winner selection.
//!
//! ## Boundary Convention
//!
//! Player `i` owns the half-open interval `(prev_cum, cum_i]`. A draw that
//! lands exactly on `cum_i` is won by player `i`. Zero-power players own an
//! empty interval and never win.

use crate::domain::{LotteryError, Player, PowerTable};

/// Cumulative probability per player, in table order.
pub fn cumulative_distribution(table: &PowerTable) -> Result<Vec<(Player, f64)>, LotteryError> {
    let total = table.total_power();
    if total == 0 {
        return Err(LotteryError::NoActivePower);
    }

    let mut running = 0.0;
    Ok(table
        .entries()
        .iter()
        .map(|(player, power)| {
            running += *power as f64 / total as f64;
            (player.clone(), running)
        })
        .collect())
}

/// Pick the player whose interval `(prev, cum]` contains `r`.
///
/// `r` must lie in the open interval `(0, 1)`. If rounding leaves the last
/// cumulative value just below `r`, the last player with positive power
/// wins.
pub fn select_winner(table: &PowerTable, r: f64) -> Result<Player, LotteryError> {
    if !(r > 0.0 && r < 1.0) {
        return Err(LotteryError::InvalidDraw(r));
    }

    let distribution = cumulative_distribution(table)?;
    let mut prev = 0.0;
    for (player, cum) in &distribution {
        if prev < r && r <= *cum {
            return Ok(player.clone());
        }
        prev = *cum;
    }

    table
        .entries()
        .iter()
        .rev()
        .find(|(_, power)| *power > 0)
        .map(|(player, _)| player.clone())
        .ok_or(LotteryError::NoActivePower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ParticipantId;

    fn solo(name: &str) -> Player {
        Player::Solo(ParticipantId::new(name))
    }

    /// Pool 50, a 25, b 25 -> cumulative 0.5, 0.75, 1.0
    fn quarter_table() -> PowerTable {
        let mut table = PowerTable::new(50);
        table.register_solo(solo("a"), 25);
        table.register_solo(solo("b"), 25);
        table
    }

    #[test]
    fn test_cumulative_distribution() {
        let dist = cumulative_distribution(&quarter_table()).unwrap();
        let cums: Vec<f64> = dist.iter().map(|(_, c)| *c).collect();
        assert_eq!(cums, vec![0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_cumulative_distribution_no_power() {
        assert_eq!(
            cumulative_distribution(&PowerTable::new(0)),
            Err(LotteryError::NoActivePower)
        );
    }

    #[test]
    fn test_select_interior_points() {
        let table = quarter_table();
        assert_eq!(select_winner(&table, 0.1).unwrap(), Player::Pool);
        assert_eq!(select_winner(&table, 0.6).unwrap(), solo("a"));
        assert_eq!(select_winner(&table, 0.9).unwrap(), solo("b"));
    }

    #[test]
    fn test_boundary_belongs_to_closing_player() {
        let table = quarter_table();
        assert_eq!(select_winner(&table, 0.5).unwrap(), Player::Pool);
        assert_eq!(select_winner(&table, 0.75).unwrap(), solo("a"));
    }

    #[test]
    fn test_zero_power_player_never_wins() {
        let mut table = PowerTable::new(50);
        table.register_solo(solo("idle"), 0);
        table.register_solo(solo("b"), 50);
        // Boundary at 0.5 is closed by the pool; idle owns (0.5, 0.5].
        assert_eq!(select_winner(&table, 0.5).unwrap(), Player::Pool);
        assert_eq!(select_winner(&table, 0.500001).unwrap(), solo("b"));
    }

    #[test]
    fn test_draw_outside_unit_interval_rejected() {
        let table = quarter_table();
        assert_eq!(select_winner(&table, 0.0), Err(LotteryError::InvalidDraw(0.0)));
        assert_eq!(select_winner(&table, 1.0), Err(LotteryError::InvalidDraw(1.0)));
        assert!(select_winner(&table, f64::NAN).is_err());
    }

    #[test]
    fn test_floor_only_pool_always_wins() {
        let table = PowerTable::new(1000);
        assert_eq!(select_winner(&table, 0.999_999).unwrap(), Player::Pool);
    }

    #[test]
    fn test_rounding_shortfall_falls_back_to_last_player() {
        // Thirds do not sum exactly to 1.0 in floating point.
        let mut table = PowerTable::new(1);
        table.register_solo(solo("a"), 1);
        table.register_solo(solo("b"), 1);
        let last_cum = cumulative_distribution(&table).unwrap()[2].1;
        let r = if last_cum < 1.0 { (last_cum + 1.0) / 2.0 } else { 0.999_999_999 };
        assert_eq!(select_winner(&table, r).unwrap(), solo("b"));
    }
}
