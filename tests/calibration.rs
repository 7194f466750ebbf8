mod tests {
    use embassy_time::Instant;
    use staff_light_engine::calibration::{CalibrationStatus, Calibrator};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Run the baseline phase with a constant raw value. Returns the time at
    /// which the session started waiting for the first trial.
    fn run_baseline(calibrator: &mut Calibrator, raw: u16) -> u64 {
        let mut t = 0;
        loop {
            let status = calibrator.step(Some(raw), false, at(t));
            if status == (CalibrationStatus::AwaitingReady { trial: 0 }) {
                return t;
            }
            assert_eq!(status, CalibrationStatus::SamplingBaseline);
            t += 100;
        }
    }

    /// Run one trial: fire the ready trigger, feed the peak once, then quiet
    /// samples until the capture window closes.
    fn run_trial(calibrator: &mut Calibrator, start: u64, peak: u16) -> (u64, CalibrationStatus) {
        let status = calibrator.step(Some(40), true, at(start));
        assert!(matches!(status, CalibrationStatus::Capturing { .. }));

        let mut t = start + 100;
        calibrator.step(Some(peak), false, at(t));
        loop {
            t += 100;
            let status = calibrator.step(Some(40), false, at(t));
            match status {
                CalibrationStatus::Capturing { .. } => {}
                other => return (t, other),
            }
        }
    }

    #[test]
    fn test_threshold_from_worked_example() {
        // Baseline max 50, peaks [200, 300, 250, 400, 350]:
        // lightest 200 -> max(200 * 0.8, 50 * 1.5) = 160.
        let mut calibrator = Calibrator::new(at(0));
        let mut t = run_baseline(&mut calibrator, 50);

        let peaks = [200u16, 300, 250, 400, 350];
        let mut last = CalibrationStatus::SamplingBaseline;
        for (i, peak) in peaks.iter().enumerate() {
            let (next_t, status) = run_trial(&mut calibrator, t + 50, *peak);
            t = next_t;
            if i < peaks.len() - 1 {
                #[allow(clippy::cast_possible_truncation)]
                let trial = (i + 1) as u8;
                assert_eq!(status, CalibrationStatus::AwaitingReady { trial });
            }
            last = status;
        }

        assert_eq!(
            last,
            CalibrationStatus::Complete {
                threshold: Some(160)
            }
        );
        assert_eq!(calibrator.recommendation(), Some(160));
    }

    #[test]
    fn test_noise_floor_dominates_light_hits() {
        // Baseline max 500 -> floor 750 beats 80% of a 600 hit (480).
        let mut calibrator = Calibrator::new(at(0));
        let mut t = run_baseline(&mut calibrator, 500);

        for peak in [600u16, 700, 650, 800, 750] {
            let (next_t, _) = run_trial(&mut calibrator, t + 50, peak);
            t = next_t;
        }

        assert_eq!(calibrator.recommendation(), Some(750));
    }

    #[test]
    fn test_dead_sensor_produces_no_threshold() {
        let mut calibrator = Calibrator::new(at(0));

        // Baseline with no data still times out.
        let mut t = 0;
        loop {
            let status = calibrator.step(None, false, at(t));
            if status == (CalibrationStatus::AwaitingReady { trial: 0 }) {
                break;
            }
            t += 100;
        }

        // A full capture window with no samples aborts the session rather
        // than looping forever; the previous threshold is retained by the
        // caller because no recommendation exists.
        calibrator.step(None, true, at(t));
        let mut status = CalibrationStatus::SamplingBaseline;
        for _ in 0..40 {
            t += 100;
            status = calibrator.step(None, false, at(t));
            if matches!(status, CalibrationStatus::Complete { .. }) {
                break;
            }
        }

        assert_eq!(status, CalibrationStatus::Complete { threshold: None });
        assert_eq!(calibrator.recommendation(), None);
    }

    #[test]
    fn test_sensor_dropout_discards_earlier_trials() {
        let mut calibrator = Calibrator::new(at(0));
        let mut t = run_baseline(&mut calibrator, 50);

        // Two good trials land peaks, then the sensor dies for a whole
        // capture window. The partial peak set must not produce a threshold.
        for peak in [200u16, 300] {
            let (next_t, _) = run_trial(&mut calibrator, t + 50, peak);
            t = next_t;
        }

        calibrator.step(None, true, at(t + 50));
        let mut status = CalibrationStatus::SamplingBaseline;
        for _ in 0..40 {
            t += 100;
            status = calibrator.step(None, false, at(t));
            if matches!(status, CalibrationStatus::Complete { .. }) {
                break;
            }
        }

        assert_eq!(status, CalibrationStatus::Complete { threshold: None });
        assert_eq!(calibrator.recommendation(), None);
    }

    #[test]
    fn test_baseline_statistics() {
        let mut calibrator = Calibrator::new(at(0));
        calibrator.step(Some(30), false, at(0));
        calibrator.step(Some(70), false, at(100));
        calibrator.step(Some(50), false, at(200));

        let baseline = calibrator.baseline();
        assert_eq!(baseline.min, 30);
        assert_eq!(baseline.max, 70);
        assert_eq!(baseline.average(), 50);
    }
}
