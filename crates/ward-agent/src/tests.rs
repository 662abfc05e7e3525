//! Unit tests for ward-agent state types.

use ward_core::{AgentId, SimRng, WardConfig};

use crate::{AgentKind, Patient, Ward};

#[cfg(test)]
mod patient {
    use super::*;

    #[test]
    fn starts_at_baseline_untreated() {
        let p = Patient::new(AgentId(0), 5.0);
        assert_eq!(p.current_pain, 5.0);
        assert!(!p.treated_this_step);
    }

    #[test]
    fn treatment_reduces_pain_and_sets_flag() {
        let mut p = Patient::new(AgentId(0), 8.0);
        p.receive_treatment(3.0);
        assert_eq!(p.current_pain, 5.0);
        assert!(p.treated_this_step);
    }

    #[test]
    fn treatment_floors_at_zero() {
        let mut p = Patient::new(AgentId(0), 2.0);
        p.receive_treatment(5.0);
        assert_eq!(p.current_pain, 0.0);
    }
}

#[cfg(test)]
mod roster {
    use super::*;

    fn ward(n: usize) -> Ward {
        let config = WardConfig { patient_count: n, ..Default::default() };
        let mut rng = SimRng::new(config.seed);
        Ward::from_config(&config, &mut rng).unwrap()
    }

    #[test]
    fn doctor_id_follows_patients() {
        let w = ward(3);
        assert_eq!(w.patient_count(), 3);
        assert_eq!(w.agent_count(), 4);
        assert_eq!(w.doctor.id, AgentId(3));
    }

    #[test]
    fn kind_mapping() {
        let w = ward(2);
        assert_eq!(w.kind(AgentId(0)), AgentKind::Patient);
        assert_eq!(w.kind(AgentId(1)), AgentKind::Patient);
        assert_eq!(w.kind(AgentId(2)), AgentKind::Doctor);
    }

    #[test]
    fn agent_ids_ascending_doctor_last() {
        let w = ward(2);
        let ids: Vec<AgentId> = w.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn base_pain_sampled_within_range() {
        let config = WardConfig {
            patient_count:   50,
            base_pain_range: (3.0, 7.0),
            ..Default::default()
        };
        let mut rng = SimRng::new(1);
        let w = Ward::from_config(&config, &mut rng).unwrap();
        for p in &w.patients {
            assert!((3.0..=7.0).contains(&p.base_pain), "base_pain {}", p.base_pain);
            assert_eq!(p.current_pain, p.base_pain);
        }
    }

    #[test]
    fn degenerate_range_is_exact() {
        let config = WardConfig {
            patient_count:   5,
            base_pain_range: (5.0, 5.0),
            ..Default::default()
        };
        let mut rng = SimRng::new(1);
        let w = Ward::from_config(&config, &mut rng).unwrap();
        assert!(w.patients.iter().all(|p| p.base_pain == 5.0));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = WardConfig { patient_count: 0, ..Default::default() };
        let mut rng = SimRng::new(1);
        assert!(Ward::from_config(&config, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_roster() {
        let config = WardConfig { patient_count: 10, ..Default::default() };
        let w1 = Ward::from_config(&config, &mut SimRng::new(9)).unwrap();
        let w2 = Ward::from_config(&config, &mut SimRng::new(9)).unwrap();
        assert_eq!(w1, w2);
    }

    #[test]
    fn doctor_policy_copied_from_config() {
        let config = WardConfig {
            pain_threshold:      4.5,
            treatment_reduction: 2.0,
            quota_per_step:      3,
            ..Default::default()
        };
        let w = Ward::from_config(&config, &mut SimRng::new(0)).unwrap();
        assert_eq!(w.doctor.pain_threshold, 4.5);
        assert_eq!(w.doctor.treatment_reduction, 2.0);
        assert_eq!(w.doctor.quota_per_step, 3);
        assert_eq!(w.doctor.treatments_given_total, 0);
    }
}
