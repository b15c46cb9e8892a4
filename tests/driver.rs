mod tests {
    use myrtio_rgbw_light::{OutputDriver, Rgbw, SmartLedsDriver, Strip, StripConfig, rgbw};
    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct MockWriter {
        frames: Vec<Vec<Rgbw>>,
        fail: bool,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = Rgbw;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    const TEAL: Rgbw = rgbw(0, 120, 90, 30);

    #[test]
    fn test_strip_through_smart_leds() {
        let mut strip = Strip::<3>::new();
        strip.fill(TEAL);

        let mut driver = SmartLedsDriver::new(MockWriter::default());
        strip.show(&mut driver);

        assert_eq!(driver.writer().frames, vec![vec![TEAL; 3]]);
    }

    #[test]
    fn test_transmit_writes_every_pixel() {
        let mut driver = SmartLedsDriver::new(MockWriter::default());
        driver.transmit(&[TEAL; 2]);
        driver.transmit(&[]);
        assert_eq!(driver.into_inner().frames, vec![vec![TEAL; 2], vec![]]);
    }

    #[test]
    fn test_active_length_reaches_writer() {
        let mut strip = Strip::<8>::with_config(&StripConfig::full(5));
        strip.fill(TEAL);

        let mut driver = SmartLedsDriver::new(MockWriter::default());
        strip.show(&mut driver);

        assert_eq!(driver.writer().frames, vec![vec![TEAL; 5]]);
    }

    #[test]
    fn test_write_failure_is_dropped() {
        let writer = MockWriter {
            fail: true,
            ..MockWriter::default()
        };
        let mut driver = SmartLedsDriver::new(writer);
        driver.transmit(&[TEAL; 2]);
        driver.transmit(&[TEAL; 2]);
        assert!(driver.writer().frames.is_empty());
    }
}
