mod tests {
    use embassy_time::{Duration, Instant};
    use staff_light_engine::command::CommandQueue;
    use staff_light_engine::effect::EffectId;
    use staff_light_engine::engine::{EngineConfig, LightEngine};
    use staff_light_engine::frame_pacer::{DEFAULT_FRAME_DURATION, FramePacer};
    use staff_light_engine::{Rgb, StripDriver, Topology};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Driver that records how many frames it was handed and their length.
    struct RecordingDriver {
        frames: usize,
        last_len: usize,
    }

    impl StripDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last_len = colors.len();
        }
    }

    fn engine(queue: &CommandQueue<4>) -> LightEngine<'_, 64, 4> {
        let config = EngineConfig {
            mode: EffectId::Solid,
            strip_len: 48,
            topology: Topology::Folded,
            reversed: false,
            brightness: 255,
            color_correction: WHITE,
            flash_duration: Duration::from_millis(100),
            rng_seed: 1,
        };
        LightEngine::new(queue.receiver(), &config)
    }

    #[test]
    fn test_tick_writes_the_strip_and_schedules_the_next_frame() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let driver = RecordingDriver {
            frames: 0,
            last_len: 0,
        };
        let mut pacer = FramePacer::new(engine(&queue), driver);

        let result = pacer.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(0) + DEFAULT_FRAME_DURATION);
        assert_eq!(result.sleep_duration, DEFAULT_FRAME_DURATION);
    }

    #[test]
    fn test_on_time_ticks_keep_cadence() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let driver = RecordingDriver {
            frames: 0,
            last_len: 0,
        };
        let mut pacer = FramePacer::with_frame_duration(
            engine(&queue),
            driver,
            Duration::from_millis(10),
        );

        let mut now = Instant::from_millis(0);
        for frame in 1..=5u64 {
            let result = pacer.tick(now);
            assert_eq!(result.next_deadline, Instant::from_millis(frame * 10));
            now = result.next_deadline;
        }
    }

    #[test]
    fn test_stall_skips_the_backlog() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let driver = RecordingDriver {
            frames: 0,
            last_len: 0,
        };
        let mut pacer = FramePacer::with_frame_duration(
            engine(&queue),
            driver,
            Duration::from_millis(10),
        );

        pacer.tick(Instant::from_millis(0));
        // A long stall resets the schedule instead of burst-rendering the
        // missed frames.
        let result = pacer.tick(Instant::from_millis(5000));
        assert_eq!(result.next_deadline, Instant::from_millis(5010));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_frames_are_trimmed_to_strip_length() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let driver = RecordingDriver {
            frames: 0,
            last_len: 0,
        };
        let mut pacer = FramePacer::new(engine(&queue), driver);

        pacer.tick(Instant::from_millis(0));
        pacer.tick(Instant::from_millis(10));
        assert_eq!(pacer.driver().frames, 2);
        // The engine hands out strip_len pixels, not the full capacity.
        assert_eq!(pacer.driver().last_len, 48);
        assert_eq!(pacer.engine().mode(), EffectId::Solid);
    }
}
