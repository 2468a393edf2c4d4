mod tests {
    use smart_leds::{RGB8, SmartLedsWrite};
    use ws2812_effects::palette::{BLUE, RED};
    use ws2812_effects::{SmartLedsTransmitter, StripConfig, StripHandle};

    /// `smart_leds` writer that stores what it was given
    #[derive(Default)]
    struct FakeWriter {
        written: Vec<Vec<RGB8>>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.written.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_adapter() {
        let driver = SmartLedsTransmitter::new(FakeWriter::default());
        let mut strip =
            StripHandle::<'_, _, 8>::create(StripConfig::new(3, 2), driver).unwrap();
        strip.led_set_on(BLUE).unwrap();
        strip.tick(embassy_time::Duration::from_millis(20));
        strip.set_led_color(0, RED).unwrap();
        strip.update_led_display();

        let writer = strip.release().into_inner();
        assert_eq!(writer.written, [vec![BLUE; 3], vec![RED, BLUE, BLUE]]);
    }

    #[test]
    fn test_write_errors_are_dropped() {
        let driver = SmartLedsTransmitter::new(FakeWriter {
            fail: true,
            ..FakeWriter::default()
        });
        let mut strip =
            StripHandle::<'_, _, 8>::create(StripConfig::new(3, 2), driver).unwrap();
        strip.tick(embassy_time::Duration::from_millis(20));
        strip.tick(embassy_time::Duration::from_millis(20));
        assert!(strip.release().into_inner().written.is_empty());
    }
}
