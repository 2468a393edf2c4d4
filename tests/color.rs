mod tests {
    use ws2812_effects::DescriptorError;
    use ws2812_effects::color::{
        Rgb, blend_colors, checked_rgb, hue_degrees, hue_to_rgb, palette, scale_color,
    };
    use ws2812_effects::error::Channel;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_scale_color() {
        let pink = palette::PINK;
        assert_eq!(scale_color(pink, 255), pink);
        assert_eq!(scale_color(pink, 0), BLACK);
        assert_eq!(
            scale_color(WHITE, 127),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
        for level in 0..=255u8 {
            let scaled = scale_color(pink, level);
            assert!(scaled.r <= pink.r && scaled.g <= pink.g && scaled.b <= pink.b);
        }
    }

    #[test]
    fn test_hue_degrees() {
        assert_eq!(hue_degrees(palette::RED), 0);
        assert_eq!(hue_degrees(palette::YELLOW), 60);
        assert_eq!(hue_degrees(palette::GREEN), 120);
        assert_eq!(hue_degrees(palette::CYAN), 180);
        assert_eq!(hue_degrees(palette::BLUE), 240);
        assert_eq!(hue_degrees(palette::MAGENTA), 300);
        assert_eq!(hue_degrees(palette::GRAY), 0);
    }

    #[test]
    fn test_hue_to_rgb_wraps() {
        assert_eq!(hue_to_rgb(0), hue_to_rgb(360));
        assert_eq!(hue_to_rgb(30), hue_to_rgb(390));
        assert_ne!(hue_to_rgb(0), hue_to_rgb(180));
    }

    #[test]
    fn test_checked_rgb() {
        assert_eq!(checked_rgb(255, 165, 0), Ok(palette::ORANGE));
        assert_eq!(
            checked_rgb(0, 256, 0),
            Err(DescriptorError::ChannelOutOfRange {
                channel: Channel::Green,
                value: 256
            })
        );
        assert_eq!(
            checked_rgb(0, 0, 1000),
            Err(DescriptorError::ChannelOutOfRange {
                channel: Channel::Blue,
                value: 1000
            })
        );
    }

    #[test]
    fn test_palette_aliases() {
        assert_eq!(palette::LIME, palette::GREEN);
        assert_eq!(palette::FUCHSIA, palette::MAGENTA);
        assert_eq!(palette::BROWN, Rgb::new(165, 42, 42));
        assert_eq!(palette::NAVY, Rgb::new(0, 0, 128));
    }
}
