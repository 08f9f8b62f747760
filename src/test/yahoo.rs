#[cfg(test)]
mod tests {
    use crate::{
        api::yahoo::chart_url,
        models::{HistoryRange, Interval},
    };

    const BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

    #[test]
    fn full_history_uses_explicit_window() {
        let url = chart_url(BASE, "SAP.DE", HistoryRange::Max, Interval::OneDay, 1_709_251_200);

        assert_eq!(
            url,
            "https://query1.finance.yahoo.com/v8/finance/chart/SAP.DE?period1=0&period2=1709251200&interval=1d&events=div"
        );
    }

    #[test]
    fn short_ranges_use_range_parameter() {
        let url = chart_url(BASE, "^GDAXI", HistoryRange::OneDay, Interval::OneMinute, 1_709_251_200);

        assert_eq!(
            url,
            "https://query1.finance.yahoo.com/v8/finance/chart/%5EGDAXI?range=1d&interval=1m&events=div"
        );
    }
}
