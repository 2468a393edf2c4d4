mod tests {
    use embassy_time::Duration;
    use ws2812_effects::error::Channel;
    use ws2812_effects::palette::{BLACK, GREEN, RED};
    use ws2812_effects::{DescriptorError, EffectDescriptor, EffectKind, LedRange, RawDescriptor};

    const ALL_KINDS: [EffectKind; 7] = [
        EffectKind::Off,
        EffectKind::On,
        EffectKind::Breath,
        EffectKind::FadeIn,
        EffectKind::BlinkSlow,
        EffectKind::BlinkFast,
        EffectKind::Rainbow,
    ];

    #[test]
    fn test_kind_ids() {
        for (id, kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(EffectKind::from_raw(id as u8), Some(*kind));
            assert_eq!(*kind as u8, id as u8);
        }
        assert_eq!(EffectKind::from_raw(7), None);
        assert_eq!(EffectKind::from_raw(255), None);
    }

    #[test]
    fn test_kind_names() {
        for kind in ALL_KINDS {
            assert_eq!(EffectKind::parse_from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(EffectKind::BlinkFast.to_string(), "blink_fast");
        assert_eq!(EffectKind::parse_from_str("Rainbow"), None);
        assert_eq!(EffectKind::parse_from_str(""), None);
    }

    #[test]
    fn test_raw_descriptor() {
        let raw = RawDescriptor {
            kind: 4,
            red: 255,
            green: 0,
            blue: 0,
            count: 3,
        };
        let descriptor = EffectDescriptor::try_from(raw).unwrap();
        assert_eq!(descriptor.kind, EffectKind::BlinkSlow);
        assert_eq!(descriptor.color, RED);
        assert_eq!(descriptor.count, 3);
        assert_eq!(descriptor.range, None);

        assert_eq!(
            EffectDescriptor::try_from(RawDescriptor { kind: 9, ..raw }),
            Err(DescriptorError::UnknownKind(9))
        );
        assert_eq!(
            EffectDescriptor::try_from(RawDescriptor { green: 256, ..raw }),
            Err(DescriptorError::ChannelOutOfRange {
                channel: Channel::Green,
                value: 256
            })
        );
        assert_eq!(
            EffectDescriptor::try_from(RawDescriptor { count: -1, ..raw }),
            Err(DescriptorError::NegativeCount(-1))
        );
    }

    #[test]
    fn test_validate() {
        let on = EffectDescriptor::new(EffectKind::On, GREEN);
        assert_eq!(on.validate(10), Ok(()));
        assert_eq!(on.with_range(LedRange::new(0, 9)).validate(10), Ok(()));
        assert_eq!(
            on.with_range(LedRange::new(10, 3)).validate(10),
            Err(DescriptorError::RangeOutOfBounds { end: 10, len: 10 })
        );

        let sweep = EffectDescriptor::sweep(LedRange::new(7, 2), GREEN, Duration::from_millis(30));
        assert_eq!(sweep.validate(8), Ok(()));
        assert_eq!(sweep.range.map(LedRange::start), Some(2));

        assert_eq!(
            EffectDescriptor::new(EffectKind::Rainbow, GREEN)
                .with_step_delay(Duration::from_millis(30))
                .validate(8),
            Err(DescriptorError::StepDelayUnsupported(EffectKind::Rainbow))
        );
    }

    #[test]
    fn test_default_is_off() {
        let descriptor = EffectDescriptor::default();
        assert_eq!(descriptor.kind, EffectKind::Off);
        assert_eq!(descriptor.color, BLACK);
        assert_eq!(descriptor.count, 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DescriptorError::StepDelayUnsupported(EffectKind::Breath).to_string(),
            "breath does not support a step delay"
        );
        assert_eq!(
            DescriptorError::ChannelOutOfRange {
                channel: Channel::Red,
                value: 300
            }
            .to_string(),
            "red channel value 300 exceeds 255"
        );
    }
}
