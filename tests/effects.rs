mod tests {
    use embassy_time::Duration;
    use ws2812_effects::BreathCurve;
    use ws2812_effects::effect::{
        BlinkEffect, Effect, EffectStatus, RainbowEffect, StaticColorEffect, envelope,
    };
    use ws2812_effects::palette::{BLACK, GREEN, RED};

    const PERIOD: Duration = Duration::from_millis(2000);

    fn levels(curve: BreathCurve, from_ms: u64, to_ms: u64) -> Vec<u8> {
        (from_ms..=to_ms)
            .step_by(10)
            .map(|ms| envelope(curve, Duration::from_millis(ms), PERIOD))
            .collect()
    }

    #[test]
    fn test_envelope_rises_then_falls() {
        for curve in [BreathCurve::Sine, BreathCurve::Triangle] {
            let rising = levels(curve, 0, 1000);
            assert!(rising.windows(2).all(|w| w[0] <= w[1]), "{curve:?} rising");
            assert_eq!(rising[0], 0);
            assert_eq!(*rising.last().unwrap(), 255);

            let falling = levels(curve, 1000, 1990);
            assert!(falling.windows(2).all(|w| w[0] >= w[1]), "{curve:?} falling");
        }
    }

    #[test]
    fn test_rainbow_neighbour_offset() {
        let mut rainbow = RainbowEffect::new(0, 12, Duration::from_millis(5000));
        let mut leds = [BLACK; 40];
        for step in [0, 20, 1250, 3333, 9000] {
            rainbow.render(Duration::from_millis(step), &mut leds);
            for index in 0..leds.len() - 1 {
                let here = rainbow.hue_at(index);
                let next = rainbow.hue_at(index + 1);
                assert_eq!((next + 360 - here) % 360, 12);
            }
        }
    }

    #[test]
    fn test_rainbow_rotation() {
        let mut rainbow = RainbowEffect::new(240, 12, Duration::from_millis(5000));
        let mut leds = [BLACK; 4];
        assert_eq!(rainbow.hue_at(0), 240);

        rainbow.render(Duration::from_millis(1250), &mut leds);
        assert_eq!(rainbow.rotation(), 90);
        assert_eq!(rainbow.hue_at(0), 330);
        assert_eq!(rainbow.hue_at(1), 342);
        assert_eq!(rainbow.hue_at(3), 6);

        // A full cycle brings the wheel back
        rainbow.render(Duration::from_millis(5000), &mut leds);
        assert_eq!(rainbow.rotation(), 90);
    }

    #[test]
    fn test_blink_counts_cycles() {
        let mut blink = BlinkEffect::new(RED, Duration::from_millis(200), 2);
        let mut leds = [BLACK; 3];
        let half = Duration::from_millis(100);

        let mut frames = Vec::new();
        let mut elapsed = Duration::from_millis(0);
        while blink.render(elapsed, &mut leds) == EffectStatus::Running {
            frames.push(leds[0]);
            elapsed = half;
        }
        assert_eq!(frames, [RED, BLACK, RED, BLACK]);
    }

    #[test]
    fn test_blink_finishes_after_long_gap() {
        let mut blink = BlinkEffect::new(RED, Duration::from_millis(200), 3);
        let mut leds = [BLACK; 1];
        assert_eq!(
            blink.render(Duration::from_millis(10_000), &mut leds),
            EffectStatus::Finished
        );
    }

    #[test]
    fn test_sweep_lights_one_led_per_step() {
        let mut sweep = StaticColorEffect::sweep(GREEN, Duration::from_millis(50));
        let mut leds = [RED; 4];

        sweep.render(Duration::from_millis(0), &mut leds);
        assert_eq!(leds, [GREEN, BLACK, BLACK, BLACK]);
        sweep.render(Duration::from_millis(49), &mut leds);
        assert_eq!(leds, [GREEN, BLACK, BLACK, BLACK]);
        sweep.render(Duration::from_millis(1), &mut leds);
        assert_eq!(leds, [GREEN, GREEN, BLACK, BLACK]);
        sweep.render(Duration::from_millis(500), &mut leds);
        assert_eq!(leds, [GREEN; 4]);
        assert!(sweep.is_settled());

        // Settled effects leave the buffer alone
        leds[1] = RED;
        sweep.render(Duration::from_millis(50), &mut leds);
        assert_eq!(leds[1], RED);
    }

    #[test]
    fn test_zero_step_delay_fills_at_once() {
        let mut sweep = StaticColorEffect::sweep(GREEN, Duration::from_millis(0));
        let mut leds = [BLACK; 5];
        sweep.render(Duration::from_millis(0), &mut leds);
        assert_eq!(leds, [GREEN; 5]);
    }
}
