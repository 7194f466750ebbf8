mod tests {
    use embassy_time::Instant;
    use staff_light_engine::Rgb;
    use staff_light_engine::Topology;
    use staff_light_engine::effect::{Effect, PulseEffect};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_wave_count_is_clamped() {
        let mut pulse = PulseEffect::new(200, Topology::Folded);
        let mut leds = [BLACK; 200];

        pulse.set_wave_count(0);
        pulse.render(Instant::from_millis(123), &mut leds);
        pulse.set_wave_count(9);
        pulse.render(Instant::from_millis(456), &mut leds);
    }

    #[test]
    fn test_render_is_deterministic_in_time() {
        let mut a = PulseEffect::new(64, Topology::Folded);
        let mut b = PulseEffect::new(64, Topology::Folded);
        a.set_wave_count(5);
        b.set_wave_count(5);

        let mut frame_a = [BLACK; 64];
        let mut frame_b = [BLACK; 64];
        a.render(Instant::from_millis(777), &mut frame_a);
        b.render(Instant::from_millis(777), &mut frame_b);

        assert_eq!(frame_a, frame_b);
    }

    #[test]
    fn test_hue_drifts_on_wall_clock_not_ticks() {
        let mut pulse = PulseEffect::new(64, Topology::Folded);
        let mut leds = [BLACK; 64];

        pulse.render(Instant::from_millis(0), &mut leds);
        let start_hue = pulse.base_hue();

        // Many ticks inside one 50 ms window: no drift.
        for _ in 0..20 {
            pulse.render(Instant::from_millis(40), &mut leds);
        }
        assert_eq!(pulse.base_hue(), start_hue);

        // 100 ms elapsed: two drift steps at the default step of 1.
        pulse.render(Instant::from_millis(100), &mut leds);
        assert_eq!(pulse.base_hue(), start_hue.wrapping_add(2));
    }

    #[test]
    fn test_disabled_instance_renders_nothing() {
        let mut pulse = PulseEffect::new(0, Topology::Folded);
        assert!(!pulse.is_initialized());

        let sentinel = Rgb { r: 9, g: 9, b: 9 };
        let mut leds = [sentinel; 16];
        pulse.render(Instant::from_millis(50), &mut leds);
        for led in &leds {
            assert_eq!(*led, sentinel);
        }
    }

    #[test]
    fn test_mirrored_brightness_on_folded_strip() {
        // Equal distance from the grip means equal phase, so the two halves
        // of a folded strip light symmetrically.
        let mut pulse = PulseEffect::new(200, Topology::Folded);
        pulse.set_wave_count(3);
        let mut leds = [BLACK; 200];
        pulse.render(Instant::from_millis(4321), &mut leds);

        for i in 0..200 {
            assert_eq!(leds[i], leds[199 - i]);
        }
    }
}
