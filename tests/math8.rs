mod tests {
    use embassy_time::Duration;
    use ws2812_effects::math8::{blend8, progress8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(200, 255), 200);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(0, 200, 255), 200);
        assert_eq!(blend8(200, 0, 255), 0);
        assert_eq!(blend8(255, 128, 0), 255);
        assert_eq!(blend8(0, 255, 128), 128);
    }

    #[test]
    fn test_progress8() {
        let second = Duration::from_millis(1000);
        assert_eq!(progress8(Duration::from_millis(0), second), 0);
        assert_eq!(progress8(Duration::from_millis(500), second), 127);
        assert_eq!(progress8(second, second), 255);
        assert_eq!(progress8(Duration::from_millis(5000), second), 255);
        assert_eq!(
            progress8(Duration::from_millis(10), Duration::from_millis(0)),
            255
        );
    }
}
