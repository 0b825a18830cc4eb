use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const SECONDS_PER_DAY: i64 = 86_400;

/// Number of billable nights for a stay. Partial days round up: a guest who
/// checks out at any point past a day boundary is billed for that night.
/// Callers must have established `check_out > check_in`.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Total price of a stay in exact decimal arithmetic. The result is fixed at
/// booking time; later room repricing never touches existing bookings.
pub fn total_price(nightly_rate: Decimal, nights: i64) -> Decimal {
    nightly_rate * Decimal::from(nights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn partial_day_bills_a_full_night() {
        // 1 day 21 hours -> 2 nights
        let check_in = utc("2024-03-01T14:00:00Z");
        let check_out = utc("2024-03-03T11:00:00Z");
        assert_eq!(nights_between(check_in, check_out), 2);

        let rate = Decimal::from_str("249.00").unwrap();
        assert_eq!(
            total_price(rate, 2),
            Decimal::from_str("498.00").unwrap()
        );
    }

    #[test]
    fn exact_day_bills_one_night() {
        let check_in = utc("2024-03-01T00:00:00Z");
        let check_out = utc("2024-03-02T00:00:00Z");
        assert_eq!(nights_between(check_in, check_out), 1);
    }

    #[test]
    fn one_second_over_a_boundary_adds_a_night() {
        let check_in = utc("2024-03-01T00:00:00Z");
        let check_out = utc("2024-03-02T00:00:01Z");
        assert_eq!(nights_between(check_in, check_out), 2);
    }

    #[test]
    fn sub_day_stay_bills_one_night() {
        let check_in = utc("2024-03-01T14:00:00Z");
        let check_out = utc("2024-03-01T18:00:00Z");
        assert_eq!(nights_between(check_in, check_out), 1);
    }

    #[test]
    fn price_arithmetic_is_exact() {
        // 0.1 is inexact in binary floats; Decimal keeps the minor unit.
        let rate = Decimal::from_str("99.10").unwrap();
        assert_eq!(
            total_price(rate, 3),
            Decimal::from_str("297.30").unwrap()
        );

        let week = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 7, 8, 12, 0, 0).unwrap();
        assert_eq!(nights_between(week, later), 7);
    }
}
