mod tests {
    use myrtio_rgbw_light::{
        BLACK, ColorRequest, Duration, FrameScheduler, FULL, Instant, IntensityShaping,
        LightConfig, LightController, OutputDriver, Property, PropertyQueue, PropertyValue,
        PropertyWrite, Rgbw, StripConfig, rgbw,
    };

    const LEDS: usize = 6;
    const QUEUE_SIZE: usize = 8;
    const REFERENCE: Rgbw = rgbw(150, 0, 0, 104);

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgbw>>,
    }

    impl RecordingDriver {
        fn last(&self) -> Option<&Vec<Rgbw>> {
            self.frames.last()
        }
    }

    impl OutputDriver for RecordingDriver {
        fn transmit(&mut self, pixels: &[Rgbw]) {
            self.frames.push(pixels.to_vec());
        }
    }

    fn controller(
        queue: &PropertyQueue<QUEUE_SIZE>,
    ) -> LightController<'_, RecordingDriver, LEDS, QUEUE_SIZE> {
        LightController::new(
            queue.receiver(),
            RecordingDriver::default(),
            &LightConfig::new(LEDS),
        )
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_refresh_sends_initial_state() {
        let queue = PropertyQueue::new();
        let mut light = controller(&queue);
        assert!(light.driver().frames.is_empty());

        light.refresh();
        assert_eq!(light.driver().last(), Some(&vec![BLACK; LEDS]));
        assert_eq!(*light.state(), ColorRequest::DEFAULT);
    }

    #[test]
    fn test_tick_applies_queued_writes() {
        let queue = PropertyQueue::new();
        let sender = queue.sender();
        let mut light = controller(&queue);

        assert!(!light.tick(at(0)));
        assert!(light.driver().frames.is_empty());

        sender.send(PropertyWrite::on(true)).unwrap();
        assert!(light.tick(at(10)));
        assert_eq!(light.color(), REFERENCE);
        assert_eq!(light.driver().last(), Some(&vec![REFERENCE; LEDS]));
        assert!(light.strip().pixels().iter().all(|pixel| *pixel == REFERENCE));

        sender.send(PropertyWrite::saturation(100.0)).unwrap();
        sender.send(PropertyWrite::hue(120.0)).unwrap();
        assert!(light.tick(at(20)));
        assert_eq!(light.color(), rgbw(0, 255, 0, 0));
        assert_eq!(light.driver().frames.len(), 2);
    }

    #[test]
    fn test_dropped_writes_do_not_render() {
        let queue = PropertyQueue::new();
        let sender = queue.sender();
        let mut light = controller(&queue);

        sender
            .send(PropertyWrite::new(Property::Hue, PropertyValue::Int(90)))
            .unwrap();
        sender
            .send(PropertyWrite::new(Property::On, PropertyValue::Float(1.0)))
            .unwrap();
        assert!(!light.tick(at(0)));
        assert!(light.driver().frames.is_empty());
        assert_eq!(*light.state(), ColorRequest::DEFAULT);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_apply_and_power_off() {
        let queue = PropertyQueue::new();
        let mut light = controller(&queue);

        assert!(light.apply(PropertyWrite::on(true)));
        assert_eq!(light.driver().last(), Some(&vec![REFERENCE; LEDS]));

        assert!(light.apply(PropertyWrite::on(false)));
        assert_eq!(light.color(), BLACK);
        assert_eq!(light.driver().last(), Some(&vec![BLACK; LEDS]));

        assert!(!light.apply(PropertyWrite::new(Property::On, PropertyValue::Int(1))));
        assert_eq!(light.driver().frames.len(), 2);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let queue = PropertyQueue::new();
        let mut light = controller(&queue);
        light.apply(PropertyWrite::on(true));

        light.refresh();
        let first = light.driver().last().cloned();
        let color = light.color();
        light.refresh();
        assert_eq!(light.driver().last().cloned(), first);
        assert_eq!(light.color(), color);
    }

    #[test]
    fn test_identify_blinks_and_restores() {
        let queue = PropertyQueue::new();
        let mut light = controller(&queue);
        light.apply(PropertyWrite::on(true));

        light.identify(at(1_000));
        assert!(light.is_identifying());

        assert!(light.tick(at(1_000)));
        assert_eq!(light.driver().last(), Some(&vec![FULL; LEDS]));

        // Same frame is not sent twice
        assert!(!light.tick(at(1_050)));

        assert!(light.tick(at(1_100)));
        assert_eq!(light.driver().last(), Some(&vec![BLACK; LEDS]));

        assert!(light.tick(at(3_000)));
        assert!(!light.is_identifying());
        assert_eq!(light.driver().last(), Some(&vec![REFERENCE; LEDS]));
    }

    #[test]
    fn test_identify_on_empty_strip_sends_each_phase_once() {
        let queue = PropertyQueue::<QUEUE_SIZE>::new();
        let mut config = LightConfig::new(LEDS);
        config.strip = StripConfig::full(0);
        let mut light: LightController<'_, RecordingDriver, LEDS, QUEUE_SIZE> =
            LightController::new(queue.receiver(), RecordingDriver::default(), &config);

        light.identify(at(0));
        assert!(light.tick(at(0)));
        for ms in 1..10 {
            assert!(!light.tick(at(ms)));
        }
        assert_eq!(light.driver().frames, vec![Vec::<Rgbw>::new()]);

        // Next phase goes out once too
        assert!(light.tick(at(100)));
        assert!(!light.tick(at(150)));
        assert_eq!(light.driver().frames.len(), 2);
    }

    #[test]
    fn test_writes_during_identify_are_held() {
        let queue = PropertyQueue::new();
        let sender = queue.sender();
        let mut light = controller(&queue);

        light.identify(at(0));
        light.tick(at(0));

        sender.send(PropertyWrite::on(true)).unwrap();
        light.tick(at(10));
        assert_eq!(light.color(), REFERENCE);
        assert_eq!(light.driver().last(), Some(&vec![FULL; LEDS]));

        light.tick(at(2_000));
        assert_eq!(light.driver().last(), Some(&vec![REFERENCE; LEDS]));
    }

    #[test]
    fn test_config_is_honored() {
        let queue = PropertyQueue::<QUEUE_SIZE>::new();
        let config = LightConfig {
            shaping: IntensityShaping::Perceptual,
            initial: ColorRequest::new(0.0, 59.0, 50.0, true),
            strip: StripConfig {
                len: 2,
                brightness_limit: 128,
            },
        };
        let mut light: LightController<'_, RecordingDriver, LEDS, QUEUE_SIZE> =
            LightController::new(queue.receiver(), RecordingDriver::default(), &config);

        assert_eq!(light.color(), rgbw(53, 0, 0, 36));
        light.refresh();
        assert_eq!(light.driver().last(), Some(&vec![rgbw(26, 0, 0, 18); 2]));
    }

    #[test]
    fn test_scheduler_pacing() {
        let queue = PropertyQueue::new();
        let sender = queue.sender();
        let mut scheduler =
            FrameScheduler::with_frame_duration(controller(&queue), Duration::from_millis(20));

        let result = scheduler.tick(at(0));
        assert!(!result.written);
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        sender.send(PropertyWrite::on(true)).unwrap();
        let result = scheduler.tick(at(25));
        assert!(result.written);
        assert_eq!(result.next_deadline, at(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // Two periods late still keeps the schedule
        let result = scheduler.tick(at(80));
        assert_eq!(result.next_deadline, at(60));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));

        // Fell far behind, schedule restarts from now
        let result = scheduler.tick(at(500));
        assert_eq!(result.next_deadline, at(520));
        assert_eq!(scheduler.controller().color(), REFERENCE);
    }
}
