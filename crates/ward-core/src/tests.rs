//! Unit tests for ward-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn arithmetic() {
        let s = Step(10);
        assert_eq!(s + 5, Step(15));
        assert_eq!(s.offset(3), Step(13));
        assert_eq!(Step(15) - Step(10), 5u64);
        assert_eq!(Step(15).since(Step(10)), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Step(3).to_string(), "S3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_deterministic() {
        let mut r1 = SimRng::new(7);
        let mut r2 = SimRng::new(7);
        let mut a: Vec<u32> = (0..50).collect();
        let mut b: Vec<u32> = (0..50).collect();
        r1.shuffle(&mut a);
        r2.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(0);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(-0.5f64..=0.5);
            assert!((-0.5..=0.5).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{Step, WardConfig};

    #[test]
    fn default_is_valid() {
        assert!(WardConfig::default().validate().is_ok());
    }

    #[test]
    fn end_step() {
        let cfg = WardConfig { total_steps: 20, ..Default::default() };
        assert_eq!(cfg.end_step(), Step(20));
    }

    #[test]
    fn zero_patients_rejected() {
        let cfg = WardConfig { patient_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_quota_rejected() {
        let cfg = WardConfig { quota_per_step: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn threshold_out_of_scale_rejected() {
        let cfg = WardConfig { pain_threshold: 10.5, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = WardConfig { pain_threshold: -0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_reduction_rejected() {
        let cfg = WardConfig { treatment_reduction: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = WardConfig { treatment_reduction: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_base_range_rejected() {
        let cfg = WardConfig { base_pain_range: (7.0, 3.0), ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = WardConfig { base_pain_range: (3.0, 11.0), ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
