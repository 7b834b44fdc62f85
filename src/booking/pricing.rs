//! Rental-day count and price computation.

use chrono::NaiveDate;

use crate::domain::Car;

/// Flat daily rate applied when no specific car drives pricing.
pub const FALLBACK_DAILY_RATE: f64 = 50.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of billable days between two `YYYY-MM-DD` dates.
///
/// Uses the absolute difference in whole days, rounded up and floored at 1:
/// a same-day rental, a reversed range, or unparseable input all bill at
/// least one day.
pub fn calculate_days(pickup_date: &str, return_date: &str) -> u32 {
    match (parse_date(pickup_date), parse_date(return_date)) {
        (Some(pickup), Some(ret)) => days_between(pickup, ret),
        _ => 1,
    }
}

/// Same policy as [`calculate_days`] for already-parsed dates.
pub fn days_between(pickup: NaiveDate, ret: NaiveDate) -> u32 {
    let diff = (ret - pickup).num_days().unsigned_abs();
    u32::try_from(diff).unwrap_or(u32::MAX).max(1)
}

pub fn calculate_total(days: u32, rate_per_day: f64) -> f64 {
    f64::from(days) * rate_per_day
}

/// Renders an amount with two decimals behind a currency symbol, e.g. `€255.00`.
pub fn format_price(currency_symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Price breakdown for a rental period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub days: u32,
    pub rate_per_day: f64,
    pub total: f64,
    pub used_fallback_rate: bool,
}

impl Quote {
    /// Prices the period with the car's rate, or `fallback_rate` when no car resolves.
    pub fn for_period(
        pickup_date: &str,
        return_date: &str,
        car: Option<&Car>,
        fallback_rate: f64,
    ) -> Self {
        let days = calculate_days(pickup_date, return_date);
        let (rate_per_day, used_fallback_rate) = match car {
            Some(car) => (car.price_per_day, false),
            None => (fallback_rate, true),
        };
        Self {
            days,
            rate_per_day,
            total: calculate_total(days, rate_per_day),
            used_fallback_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_day_return_is_one_day() {
        assert_eq!(calculate_days("2026-01-27", "2026-01-28"), 1);
    }

    #[test]
    fn three_day_rental() {
        assert_eq!(calculate_days("2026-01-27", "2026-01-30"), 3);
    }

    #[test]
    fn same_day_rental_bills_one_day() {
        assert_eq!(calculate_days("2026-03-01", "2026-03-01"), 1);
    }

    #[test]
    fn reversed_range_is_symmetric() {
        assert_eq!(
            calculate_days("2026-01-30", "2026-01-27"),
            calculate_days("2026-01-27", "2026-01-30")
        );
    }

    #[test]
    fn unparseable_dates_bill_one_day() {
        assert_eq!(calculate_days("", "2026-01-30"), 1);
        assert_eq!(calculate_days("tomorrow", "later"), 1);
    }

    #[test]
    fn spans_month_and_leap_day() {
        assert_eq!(calculate_days("2028-02-28", "2028-03-01"), 2);
    }

    #[test]
    fn fallback_rate_total() {
        let total = calculate_total(3, FALLBACK_DAILY_RATE);
        assert_eq!(total, 150.0);
        assert_eq!(format_price("€", total), "€150.00");
    }

    #[test]
    fn quote_without_car_uses_fallback() {
        let quote = Quote::for_period("2026-01-27", "2026-01-30", None, FALLBACK_DAILY_RATE);
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, 150.0);
        assert!(quote.used_fallback_rate);
    }
}
