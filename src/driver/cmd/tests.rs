mod fixed4 {
    use super::super::Fixed4;

    #[test]
    fn fmt_pads_to_four_decimals() {
        assert_eq!(format!("{}", Fixed4(2.5)), "2.5000");
        assert_eq!(format!("{}", Fixed4(0.1)), "0.1000");
        assert_eq!(format!("{}", Fixed4(12.0)), "12.0000");
    }

    #[test]
    fn fmt_rounds() {
        assert_eq!(format!("{}", Fixed4(1.23456)), "1.2346");
        assert_eq!(format!("{}", Fixed4(-3.00004)), "-3.0000");
    }

    #[test]
    fn fmt_negative() {
        assert_eq!(format!("{}", Fixed4(-7.25)), "-7.2500");
    }

    #[test]
    fn fmt_zero() {
        assert_eq!(format!("{}", Fixed4(0.0)), "0.0000");
        assert_eq!(format!("{}", Fixed4(-0.0)), "0.0000");
    }

    #[test]
    fn fmt_non_finite() {
        assert_eq!(format!("{}", Fixed4(f32::NAN)), "nan");
        assert_eq!(format!("{}", Fixed4(f32::INFINITY)), "inf");
        assert_eq!(format!("{}", Fixed4(f32::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn fmt_large_has_no_exponent() {
        let s = format!("{}", Fixed4(1.0e10));
        assert!(!s.contains('e'));
        assert!(s.ends_with(".0000"));
    }
}

mod axis_state {
    use super::super::AxisState;

    #[test]
    fn from_code() {
        assert_eq!(AxisState::from_code(1), Some(AxisState::Idle));
        assert_eq!(AxisState::from_code(8), Some(AxisState::ClosedLoopControl));
        assert_eq!(AxisState::from_code(13), Some(AxisState::EncoderHallPhaseCalibration));
    }

    #[test]
    fn from_code_unknown() {
        // 5 isn't used by the device anymore
        assert_eq!(AxisState::from_code(5), None);
        assert_eq!(AxisState::from_code(-1), None);
        assert_eq!(AxisState::from_code(14), None);
    }

    #[test]
    fn fmt_as_code() {
        assert_eq!(format!("{}", AxisState::FullCalibrationSequence), "3");
        assert_eq!(AxisState::ClosedLoopControl.code(), 8);
        assert_eq!(i32::from(AxisState::Homing), 11);
    }

    #[test]
    fn is_idle() {
        assert!(AxisState::Idle.is_idle());
        assert!(!AxisState::Undefined.is_idle());
    }
}
