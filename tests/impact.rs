mod tests {
    use embassy_time::{Duration, Instant};
    use staff_light_engine::impact::{
        AccelVector, DetectorState, ImpactDetector, ThresholdConfig,
    };

    const CONFIG: ThresholdConfig = ThresholdConfig {
        threshold: 150,
        cooldown: Duration::from_millis(500),
    };

    // x = 2.0 m/s^2 scales to exactly raw 200; x = 0.5 to raw 50.
    fn sample(x: f32) -> Option<AccelVector> {
        Some(AccelVector { x, y: 0.0, z: 0.0 })
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_vector_raw_scaling() {
        let v = AccelVector {
            x: 2.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(v.raw(), 200);

        let huge = AccelVector {
            x: 1000.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(huge.raw(), u16::MAX);
    }

    #[test]
    fn test_single_trigger_with_cooldown() {
        let mut detector = ImpactDetector::new(CONFIG);

        detector.update(sample(0.0), at(0));
        assert!(!detector.take_impact());

        detector.update(sample(2.0), at(10));
        assert_eq!(detector.state(), DetectorState::Cooling);
        assert!(detector.take_impact());
        // Consumed on read: second read without a new event is false.
        assert!(!detector.take_impact());

        detector.update(sample(0.5), at(20));
        detector.update(sample(0.5), at(30));
        // Second spike within the cooldown produces nothing.
        detector.update(sample(2.0), at(40));
        assert!(!detector.take_impact());

        // After the cooldown elapses the detector rearms and fires again.
        detector.update(sample(0.5), at(520));
        assert_eq!(detector.state(), DetectorState::Armed);
        detector.update(sample(2.0), at(530));
        assert!(detector.take_impact());
    }

    #[test]
    fn test_unavailable_sensor_leaves_state_unchanged() {
        let mut detector = ImpactDetector::new(CONFIG);

        detector.update(None, at(0));
        assert_eq!(detector.state(), DetectorState::Armed);
        assert_eq!(detector.last_raw(), None);
        assert!(!detector.take_impact());

        // Recovery on the next tick works as usual.
        detector.update(sample(2.0), at(10));
        assert!(detector.take_impact());

        // A dropout during cooldown does not advance or reset the timer.
        detector.update(None, at(400));
        assert_eq!(detector.state(), DetectorState::Cooling);
    }

    #[test]
    fn test_threshold_must_be_exceeded_not_met() {
        let mut detector = ImpactDetector::new(ThresholdConfig {
            threshold: 200,
            cooldown: Duration::from_millis(500),
        });

        // raw == threshold: no trigger.
        detector.update(sample(2.0), at(0));
        assert!(!detector.take_impact());
    }

    #[test]
    fn test_config_replacement() {
        let mut detector = ImpactDetector::new(CONFIG);
        let new_config = ThresholdConfig {
            threshold: 50,
            cooldown: Duration::from_millis(100),
        };
        detector.set_config(new_config);
        assert_eq!(detector.config(), new_config);

        detector.update(sample(0.6), at(0));
        assert!(detector.take_impact());
    }
}
