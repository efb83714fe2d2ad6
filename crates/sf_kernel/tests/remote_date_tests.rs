//! Tests for the remote datetime codec
//!
//! Covers canonical encoding, wall-clock relabelling of zoned values, and
//! the breadth of text accepted by the best-effort decoder.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use sf_kernel::{
    format_remote, from_remote_string, to_remote_string, DateOrder, RemoteDateParser,
};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

mod encoding {
    use super::*;

    #[test]
    fn test_naive_timestamp_is_treated_as_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        assert_eq!(
            to_remote_string(Some(naive)),
            Some("2024-03-05T14:30:00Z".to_string())
        );
    }

    #[test]
    fn test_zoned_timestamp_keeps_wall_clock_numbers() {
        let new_york = chrono_tz::America::New_York
            .with_ymd_and_hms(2024, 3, 5, 9, 15, 45)
            .unwrap();

        assert_eq!(format_remote(&new_york), "2024-03-05T09:15:45Z");
    }

    #[test]
    fn test_fixed_offset_is_relabelled_not_shifted() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let value = offset.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();

        assert_eq!(format_remote(&value), "2023-12-31T23:59:59Z");
    }

    #[test]
    fn test_date_encodes_as_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_remote(&date), "2024-01-09T00:00:00Z");
    }

    #[test]
    fn test_absent_input_is_absent() {
        assert_eq!(to_remote_string::<DateTime<Utc>>(None), None);
    }

    #[test]
    fn test_reference_input_is_accepted() {
        let value = utc(2024, 7, 1, 8, 0, 0);
        assert_eq!(
            to_remote_string(Some(&value)).as_deref(),
            Some("2024-07-01T08:00:00Z")
        );
    }
}

mod decoding {
    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(
            from_remote_string("2024-03-05T14:30:00Z"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_service_response_with_millis_and_offset() {
        assert_eq!(
            from_remote_string("2024-03-05T14:30:00.000+0000"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        assert_eq!(
            from_remote_string("2024-03-05T14:30:00+02:00"),
            Some(utc(2024, 3, 5, 12, 30, 0))
        );
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            from_remote_string("Tue, 05 Mar 2024 14:30:00 GMT"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_space_separated_iso() {
        assert_eq!(
            from_remote_string("2024-03-05 14:30:00"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
        assert_eq!(
            from_remote_string("2024-03-05 14:30"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_utc_designator_suffix() {
        assert_eq!(
            from_remote_string("2024-03-05 14:30:00 UTC"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_month_first_numeric_with_meridiem() {
        assert_eq!(
            from_remote_string("3/5/2024 2:30 PM"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_month_names() {
        assert_eq!(
            from_remote_string("March 5, 2024"),
            Some(utc(2024, 3, 5, 0, 0, 0))
        );
        assert_eq!(
            from_remote_string("5 Mar 2024 14:30"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_date_only_is_midnight() {
        assert_eq!(from_remote_string("2024-03-05"), Some(utc(2024, 3, 5, 0, 0, 0)));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(from_remote_string("3/5/24"), Some(utc(2024, 3, 5, 0, 0, 0)));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            from_remote_string("  2024-03-05T14:30:00Z \n"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_unparseable_text_is_absent() {
        assert_eq!(from_remote_string("not a date"), None);
        assert_eq!(from_remote_string("2024-13-45"), None);
        assert_eq!(from_remote_string("25:99"), None);
    }

    #[test]
    fn test_month_name_with_time_and_no_comma() {
        assert_eq!(
            from_remote_string("March 5 2024 14:30"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
        assert_eq!(
            from_remote_string("March 5 2024 2:30:15 PM"),
            Some(utc(2024, 3, 5, 14, 30, 15))
        );
    }

    #[test]
    fn test_abbreviated_month_with_gmt_suffix() {
        assert_eq!(
            from_remote_string("Mar 5 2024 14:30 GMT"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_two_digit_year_with_time() {
        assert_eq!(
            from_remote_string("3/5/24 2:30 PM"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
        assert_eq!(
            from_remote_string("3/5/24 14:30"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_long_date_with_weekday() {
        assert_eq!(
            from_remote_string("Tuesday, March 5, 2024"),
            Some(utc(2024, 3, 5, 0, 0, 0))
        );
        assert_eq!(
            from_remote_string("Tuesday, March 5, 2024 2:30:00 PM"),
            Some(utc(2024, 3, 5, 14, 30, 0))
        );
    }

    #[test]
    fn test_year_month_is_first_of_month() {
        assert_eq!(from_remote_string("March 2024"), Some(utc(2024, 3, 1, 0, 0, 0)));
        assert_eq!(from_remote_string("2024-03"), Some(utc(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn test_time_only_reads_as_today() {
        let before = Utc::now().date_naive();
        let parsed = from_remote_string("14:30").unwrap();
        let after = Utc::now().date_naive();

        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (14, 30, 0));
        assert!(parsed.date_naive() == before || parsed.date_naive() == after);

        let meridiem = from_remote_string("2:30 PM").unwrap();
        assert_eq!(meridiem.hour(), 14);
        assert!(meridiem - parsed < Duration::days(2));
    }
}

mod parser_locale {
    use super::*;

    #[test]
    fn test_day_first_order() {
        let parser = RemoteDateParser::new(chrono_tz::UTC, DateOrder::DayFirst);
        assert_eq!(parser.parse("05/03/2024"), Some(utc(2024, 3, 5, 0, 0, 0)));
        assert_eq!(parser.parse("05.03.2024 14:30:00"), Some(utc(2024, 3, 5, 14, 30, 0)));
    }

    #[test]
    fn test_day_first_two_digit_year_with_time() {
        let parser = RemoteDateParser::new(chrono_tz::UTC, DateOrder::DayFirst);
        assert_eq!(parser.parse("05/03/24 14:30"), Some(utc(2024, 3, 5, 14, 30, 0)));
    }

    #[test]
    fn test_month_first_rejects_day_above_twelve_in_month_slot() {
        let parser = RemoteDateParser::default();
        assert_eq!(parser.parse("13/05/2024"), None);
    }

    #[test]
    fn test_assumed_zone_applies_to_zoneless_text_only() {
        let parser = RemoteDateParser::new(chrono_tz::America::New_York, DateOrder::MonthFirst);

        // EST is UTC-5 in early March
        assert_eq!(parser.parse("2024-03-05 09:30:00"), Some(utc(2024, 3, 5, 14, 30, 0)));
        assert_eq!(parser.parse("2024-03-05T09:30:00Z"), Some(utc(2024, 3, 5, 9, 30, 0)));
    }

    #[test]
    fn test_nonexistent_local_time_is_absent() {
        // 02:30 does not exist in New York on the spring-forward date
        let parser = RemoteDateParser::new(chrono_tz::America::New_York, DateOrder::MonthFirst);
        assert_eq!(parser.parse("2024-03-10 02:30:00"), None);
    }
}

proptest! {
    #[test]
    fn prop_decoder_accepts_every_encoder_output(secs in 0i64..4_102_444_800i64) {
        let value = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        let encoded = format_remote(&value);

        prop_assert_eq!(encoded.len(), 20);
        let decoded: Option<NaiveDateTime> = from_remote_string(&encoded).map(|d| d.naive_utc());
        prop_assert_eq!(decoded, Some(value));
    }
}
