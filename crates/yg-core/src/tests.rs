//! Unit tests for yg-core primitives.

#[cfg(test)]
mod time {
    use crate::{Horizon, HourStamp};

    #[test]
    fn stamp_arithmetic() {
        let h = HourStamp(10);
        assert_eq!(h + 5, HourStamp(15));
        assert_eq!(h.offset(-3), HourStamp(7));
        assert_eq!(h.next(), HourStamp(11));
        assert_eq!(HourStamp(15) - HourStamp(10), 5);
    }

    #[test]
    fn unix_conversion_floors() {
        assert_eq!(HourStamp::from_unix_secs(0), HourStamp(0));
        assert_eq!(HourStamp::from_unix_secs(3_599), HourStamp(0));
        assert_eq!(HourStamp::from_unix_secs(3_600), HourStamp(1));
        // Pre-epoch timestamps floor toward negative infinity.
        assert_eq!(HourStamp::from_unix_secs(-1), HourStamp(-1));
        assert_eq!(HourStamp(2).unix_secs(), 7_200);
    }

    #[test]
    fn horizon_iterates_inclusive() {
        let hz = Horizon::new(HourStamp(3), HourStamp(6));
        let hours: Vec<i64> = hz.hours().map(|h| h.0).collect();
        assert_eq!(hours, vec![3, 4, 5, 6]);
        assert_eq!(hz.len(), 4);
        assert!(!hz.is_empty());
    }

    #[test]
    fn single_hour_horizon() {
        let hz = Horizon::new(HourStamp(5), HourStamp(5));
        assert_eq!(hz.len(), 1);
        assert_eq!(hz.hours().count(), 1);
    }

    #[test]
    fn inverted_horizon_is_empty() {
        let hz = Horizon::new(HourStamp(6), HourStamp(3));
        assert!(hz.is_empty());
        assert_eq!(hz.len(), 0);
        assert_eq!(hz.hours().count(), 0);
    }

    #[test]
    fn contains() {
        let hz = Horizon::new(HourStamp(3), HourStamp(6));
        assert!(hz.contains(HourStamp(3)));
        assert!(hz.contains(HourStamp(6)));
        assert!(!hz.contains(HourStamp(7)));
        assert!(!hz.contains(HourStamp(2)));
    }

    #[test]
    fn display() {
        assert_eq!(HourStamp(42).to_string(), "h42");
        assert_eq!(
            Horizon::new(HourStamp(0), HourStamp(5)).to_string(),
            "[h0, h5]"
        );
    }
}

#[cfg(test)]
mod moves {
    use crate::{Direction, MoveClass};

    #[test]
    fn groups_partition_all_classes() {
        let mut combined: Vec<MoveClass> = MoveClass::INBOUND
            .iter()
            .chain(MoveClass::OUTBOUND.iter())
            .copied()
            .collect();
        combined.sort_by_key(|c| c.index());
        let mut all = MoveClass::ALL.to_vec();
        all.sort_by_key(|c| c.index());
        assert_eq!(combined, all);
    }

    #[test]
    fn directions_match_groups() {
        for c in MoveClass::INBOUND {
            assert_eq!(c.direction(), Direction::Inbound);
        }
        for c in MoveClass::OUTBOUND {
            assert_eq!(c.direction(), Direction::Outbound);
        }
    }

    #[test]
    fn indexes_are_dense_and_unique() {
        let mut seen = [false; MoveClass::COUNT];
        for c in MoveClass::ALL {
            assert!(!seen[c.index()]);
            seen[c.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn label_roundtrip() {
        for c in MoveClass::ALL {
            assert_eq!(c.label().parse::<MoveClass>().unwrap(), c);
        }
    }

    #[test]
    fn invalid_label_errors() {
        assert!("reefer-pickup".parse::<MoveClass>().is_err());
        assert!("".parse::<MoveClass>().is_err());
    }
}

#[cfg(test)]
mod yard {
    use crate::YardBand;

    #[test]
    fn ordered_band() {
        assert!(YardBand::new(0, 1_000, 2_000).is_ordered());
        assert!(YardBand::new(5, 5, 5).is_ordered());
        assert!(!YardBand::new(100, 50, 2_000).is_ordered());
        assert!(!YardBand::new(0, 3_000, 2_000).is_ordered());
    }

    #[test]
    fn display() {
        assert_eq!(YardBand::new(0, 1_000, 2_000).to_string(), "0/1000/2000 TEU");
    }
}
