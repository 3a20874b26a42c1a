//! # Lottery Fairness Over Ledger Snapshots
//!
//! Builds real accounts, snapshots them through the ledger, and checks the
//! lottery against the power shares those accounts register.
//!
//! ## Properties Tested
//!
//! 1. **Win rates**: seeded empirical frequencies converge to `power / total`
//! 2. **Exclusions**: powered-off and bankrupt accounts never win
//! 3. **Conservation**: awards plus the undistributed remainder equal the prize

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use sdpa_01_account_ledger::{Ledger, LedgerApi, LedgerConfig};
    use sdpa_02_lottery_engine::{
        invariant_prize_conserved, LotteryApi, LotteryConfig, LotteryEngine, Player, RngSource,
        ScriptedDraws,
    };
    use shared_types::ParticipantId;

    fn id(name: &str) -> ParticipantId {
        ParticipantId::new(name)
    }

    /// alice: 10 solo on, bob: 20 pooled on, carol: 30 solo off.
    fn mixed_ledger() -> Ledger {
        let mut ledger = Ledger::new(LedgerConfig::default()).unwrap();
        for name in ["alice", "bob", "carol"] {
            ledger.open_account(name).unwrap();
        }
        ledger.purchase_hardware(&id("alice"), 10).unwrap();
        ledger.toggle_power(&id("alice")).unwrap();
        ledger.purchase_hardware(&id("bob"), 10).unwrap();
        ledger.begin_day();
        ledger.purchase_hardware(&id("bob"), 10).unwrap();
        ledger.toggle_power(&id("bob")).unwrap();
        ledger.toggle_pool_mode(&id("bob")).unwrap();
        ledger.purchase_hardware(&id("carol"), 10).unwrap();
        ledger.begin_day();
        ledger.purchase_hardware(&id("carol"), 10).unwrap();
        ledger.begin_day();
        ledger.purchase_hardware(&id("carol"), 10).unwrap();
        ledger
    }

    #[test]
    fn test_win_rates_match_registered_power() {
        let ledger = mixed_ledger();
        let engine = LotteryEngine::new(LotteryConfig::for_testing()).unwrap();
        let snapshot = ledger.miner_snapshot();

        let probabilities = engine.win_probabilities(&snapshot).unwrap();
        // Pool: floor 10 + bob 20; alice solo 10; carol is off.
        assert_eq!(
            probabilities,
            vec![(Player::Pool, 30.0 / 40.0), (Player::Solo(id("alice")), 10.0 / 40.0)]
        );

        let mut source = RngSource::seeded(99);
        let rounds = 20_000;
        let mut wins: HashMap<Player, u32> = HashMap::new();
        for _ in 0..rounds {
            let outcome = engine.draw(&snapshot, &mut source).unwrap();
            *wins.entry(outcome.winner).or_default() += 1;
        }

        assert!(!wins.contains_key(&Player::Solo(id("carol"))));
        for (player, expected) in probabilities {
            let observed = f64::from(wins.get(&player).copied().unwrap_or(0)) / f64::from(rounds);
            assert!(
                (observed - expected).abs() < 0.02,
                "{player}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_pool_split_credited_through_ledger() {
        let mut ledger = mixed_ledger();
        let engine = LotteryEngine::new(LotteryConfig::default()).unwrap();
        let outcome = engine
            .draw(&ledger.miner_snapshot(), &mut ScriptedDraws::new([0.5]))
            .unwrap();
        assert_eq!(outcome.winner, Player::Pool);

        ledger.credit_awards(&outcome.award_pairs()).unwrap();
        let bob = ledger.account(&id("bob")).unwrap().coin_balance();
        assert_eq!(bob, 20.0 / 1020.0 * 100.0);
        assert_eq!(ledger.account(&id("alice")).unwrap().coin_balance(), 0.0);
        assert!(invariant_prize_conserved(&outcome, 100.0).is_ok());
    }

    proptest! {
        #[test]
        fn prize_conserved_for_ledger_snapshots(
            units in prop::collection::vec(0u32..=10, 2..6),
            pooled in prop::collection::vec(any::<bool>(), 6),
            draw in 0.000_001f64..0.999_999,
        ) {
            let mut ledger = Ledger::new(LedgerConfig::default()).unwrap();
            for (i, count) in units.iter().enumerate() {
                let name = format!("miner{i}");
                let who = ledger.open_account(&name).unwrap();
                ledger.purchase_hardware(&who, *count).unwrap();
                if *count > 0 {
                    ledger.toggle_power(&who).unwrap();
                    if pooled[i] {
                        ledger.toggle_pool_mode(&who).unwrap();
                    }
                }
            }

            let engine = LotteryEngine::new(LotteryConfig::default()).unwrap();
            let outcome = engine
                .draw(&ledger.miner_snapshot(), &mut ScriptedDraws::new([draw]))
                .unwrap();
            prop_assert!(invariant_prize_conserved(&outcome, 100.0).is_ok());
            prop_assert!(outcome.undistributed >= -1e-9);
        }
    }
}
