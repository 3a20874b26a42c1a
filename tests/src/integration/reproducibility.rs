//! # Seeded Runs From Environment Configuration
//!
//! Loads configuration the way the binary does, then checks that a seed
//! pins down prices, draws and therefore the whole final report.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use sim_runtime::{
        Action, ConfigError, RuntimeError, ScriptedActions, Simulation, SimulationConfig,
    };

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn script() -> ScriptedActions {
        let mut script = ScriptedActions::new();
        for day in 1..=7 {
            script = script
                .plan("alice", day, [Action::PurchaseHardware(3)])
                .plan("bob", day, [Action::PurchaseHardware(2)]);
        }
        script
            .plan("alice", 1, [Action::TogglePower])
            .plan("bob", 1, [Action::TogglePower, Action::TogglePoolMode])
            .plan("alice", 5, [Action::SellCoins(0.5)])
    }

    fn seeded_config(seed: &str) -> SimulationConfig {
        SimulationConfig::from_lookup(env(&[
            ("SDPA_DAYS", "7"),
            ("SDPA_PARTICIPANTS", "alice,bob"),
            ("SDPA_SEED", seed),
            ("SDPA_POOL_FLOOR", "20"),
        ]))
        .unwrap()
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = seeded_config("1234");
        let days = config.days().unwrap();

        let mut first = Simulation::from_config(&config).unwrap();
        let mut second = Simulation::from_config(&config).unwrap();
        let a = first.run(days, &mut script()).unwrap();
        let b = second.run(days, &mut script()).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.state().activity, second.state().activity);
        assert_eq!(a.days_run, 7);
        assert_eq!(first.state().reports[0].prices.coin_price, 50.0);
    }

    #[test]
    fn test_electricity_prices_within_band() {
        let config = seeded_config("77");
        let mut sim = Simulation::from_config(&config).unwrap();
        sim.run(7, &mut script()).unwrap();
        for report in &sim.state().reports {
            let price = report.prices.electricity_price;
            assert!((1.5..3.5).contains(&price));
        }
    }

    #[test]
    fn test_invalid_environment_rejected_before_run() {
        let config = SimulationConfig::from_lookup(env(&[
            ("SDPA_DAYS", "3"),
            ("SDPA_PARTICIPANTS", "alice,bob"),
        ]))
        .unwrap();
        assert!(matches!(
            Simulation::from_config(&config),
            Err(RuntimeError::Config(ConfigError::TooFewDays { days: 3, min: 7 }))
        ));
    }
}
