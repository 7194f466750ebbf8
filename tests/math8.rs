mod tests {
    use staff_light_engine::math8::{beatsin8, blend8, scale8, scale8_video, sin8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_nonzero() {
        assert_eq!(scale8_video(0, 191), 0);
        assert!(scale8_video(1, 191) > 0);
        assert!(scale8_video(255, 1) > 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sin8_shape() {
        assert_eq!(sin8(0), 128);
        // Peak near a quarter turn, trough near three quarters.
        assert!(sin8(64) > 240);
        assert!(sin8(192) < 16);
        // Antisymmetric around the midline: a half-turn negates the wave.
        for theta in 0..=255u8 {
            let sum = u16::from(sin8(theta)) + u16::from(sin8(theta.wrapping_add(128)));
            assert_eq!(sum, 256, "broken antisymmetry at theta={theta}");
        }
    }

    #[test]
    fn test_beatsin8_stays_in_range() {
        for bpm in [10u8, 20, 30, 40, 50] {
            for t in (0..60_000u64).step_by(137) {
                let v = beatsin8(bpm, 0, 255 / (bpm / 10), t, 0);
                assert!(v <= 255 / (bpm / 10));
            }
        }
    }

    #[test]
    fn test_beatsin8_respects_bounds() {
        for t in (0..10_000u64).step_by(53) {
            let v = beatsin8(60, 40, 200, t, 17);
            assert!((40..=200).contains(&v));
        }
    }
}
