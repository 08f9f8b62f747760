#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        models::{AnnualDividend, DividendEvent},
        services::calc::{annual_dividends, dividend_yield, market_change, round2},
        test::scripted_provider::date,
    };

    fn set_sample_dividends() -> Vec<DividendEvent> {
        vec![
            DividendEvent::new(date(2012, 5, 10), dec!(0.90)),
            DividendEvent::new(date(2014, 5, 9), dec!(1.10)),
            DividendEvent::new(date(2022, 5, 13), dec!(1.95)),
            DividendEvent::new(date(2023, 5, 12), dec!(1.025)),
            DividendEvent::new(date(2023, 11, 10), dec!(1.025)),
            DividendEvent::new(date(2024, 5, 17), dec!(2.20)),
        ]
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round2(dec!(120.454)), dec!(120.45));
    }

    #[test]
    fn market_change_against_previous_close() {
        let (change, percent) = market_change(Some(dec!(110)), Some(dec!(100)));

        assert_eq!(change, Some(dec!(10)));
        assert_eq!(percent, Some(dec!(10)));
    }

    #[test]
    fn market_change_needs_non_zero_previous_close() {
        assert_eq!(market_change(Some(dec!(5)), Some(Decimal::ZERO)), (None, None));
        assert_eq!(market_change(Some(dec!(5)), None), (None, None));
        assert_eq!(market_change(None, Some(dec!(5))), (None, None));
    }

    #[test]
    fn annual_dividends_sum_per_year_newest_first() {
        let result = annual_dividends(&set_sample_dividends(), date(2024, 6, 15), 10);

        assert_eq!(
            result,
            vec![
                AnnualDividend::new(2024, dec!(2.20)),
                AnnualDividend::new(2023, dec!(2.05)),
                AnnualDividend::new(2022, dec!(1.95)),
                AnnualDividend::new(2014, dec!(1.10)),
            ]
        );
    }

    #[test]
    fn annual_dividends_respect_lookback() {
        let result = annual_dividends(&set_sample_dividends(), date(2024, 6, 15), 1);

        let years: Vec<i32> = result.iter().map(|d| *d.year()).collect();
        assert_eq!(years, vec![2024, 2023]);
    }

    #[test]
    fn official_yield_wins() {
        let annual = vec![AnnualDividend::new(2023, dec!(5))];
        let result = dividend_yield(Some(dec!(100)), Some(dec!(0.0215)), &annual, date(2024, 3, 1));

        assert_eq!(result, dec!(2.15));
    }

    #[test]
    fn yield_from_last_full_year() {
        let annual = vec![
            AnnualDividend::new(2024, dec!(1.20)),
            AnnualDividend::new(2023, dec!(1.00)),
        ];

        let spring = dividend_yield(Some(dec!(50)), None, &annual, date(2024, 6, 1));
        assert_eq!(spring, dec!(2.00));

        // From November on the running year counts as complete.
        let late = dividend_yield(Some(dec!(50)), None, &annual, date(2024, 11, 20));
        assert_eq!(late, dec!(2.40));
    }

    #[test]
    fn yield_is_zero_without_usable_inputs() {
        let annual = vec![AnnualDividend::new(2020, dec!(1.00))];

        assert_eq!(
            dividend_yield(Some(dec!(50)), None, &annual, date(2024, 6, 1)),
            Decimal::ZERO
        );
        assert_eq!(
            dividend_yield(Some(Decimal::ZERO), Some(dec!(0.03)), &annual, date(2024, 6, 1)),
            Decimal::ZERO
        );
        assert_eq!(
            dividend_yield(None, Some(dec!(0.03)), &annual, date(2024, 6, 1)),
            Decimal::ZERO
        );
    }
}
