#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        api::{
            ProviderError,
            yahoo_dto::{ChartResponseDto, SearchResponseDto},
        },
        services::calc::round2,
        test::scripted_provider::date,
    };

    fn set_sample_chart() -> ChartResponseDto {
        let chart = json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "AAPL",
                        "longName": "Apple Inc.",
                        "shortName": "Apple",
                        "regularMarketPrice": 185.64,
                        "chartPreviousClose": 192.53,
                        "gmtoffset": -18000
                    },
                    "timestamp": [1704205800, 1704292200, 1704378600],
                    "events": {
                        "dividends": {
                            "1699626600": { "amount": 0.24, "date": 1699626600 },
                            "1691760600": { "amount": 0.24, "date": 1691760600 }
                        }
                    },
                    "indicators": {
                        "quote": [{
                            "open": [187.15, null, 182.15],
                            "high": [188.44, 185.88, 183.09],
                            "low": [183.89, 183.43, 180.88],
                            "close": [185.64, 184.25, 181.91],
                            "volume": [82488700, 58414500, null]
                        }]
                    }
                }],
                "error": null
            }
        });
        serde_json::from_value(chart).unwrap()
    }

    #[test]
    fn chart_meta_becomes_quote() {
        let result = set_sample_chart().into_result("AAPL").unwrap();
        let quote = result.to_quote();

        assert_eq!(quote.symbol(), "AAPL");
        assert_eq!(quote.long_name().as_deref(), Some("Apple Inc."));
        assert_eq!(quote.currency().as_deref(), Some("USD"));
        assert_eq!(quote.current_price().map(round2), Some(dec!(185.64)));
        assert_eq!(quote.previous_close().map(round2), Some(dec!(192.53)));
        assert_eq!(*quote.dividend_yield(), None);
    }

    #[test]
    fn chart_columns_become_bars() {
        let bars = set_sample_chart().into_result("AAPL").unwrap().to_price_bars();

        assert_eq!(bars.len(), 3);
        assert_eq!(*bars[0].date(), date(2024, 1, 2));
        assert_eq!(*bars[1].open(), None);
        assert_eq!(bars[1].close().map(round2), Some(dec!(184.25)));
        assert_eq!(*bars[0].volume(), Some(82_488_700));
        assert_eq!(*bars[2].volume(), None);
    }

    #[test]
    fn dividend_events_are_sorted_by_date() {
        let events = set_sample_chart()
            .into_result("AAPL")
            .unwrap()
            .to_dividend_events();

        let dates: Vec<_> = events.iter().map(|e| *e.date()).collect();
        assert_eq!(dates, vec![date(2023, 8, 11), date(2023, 11, 10)]);
        assert_eq!(round2(*events[0].amount()), dec!(0.24));
    }

    #[test]
    fn chart_error_is_classified() {
        let chart: ChartResponseDto = serde_json::from_value(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        }))
        .unwrap();

        let err = chart.into_result("XXXX").unwrap_err();
        let provider_err = err.downcast_ref::<ProviderError>().unwrap();
        assert!(provider_err.is_not_found());
    }

    #[test]
    fn empty_chart_result_is_not_found() {
        let chart: ChartResponseDto =
            serde_json::from_value(json!({ "chart": { "result": [], "error": null } })).unwrap();

        let err = chart.into_result("XXXX").unwrap_err();
        assert!(err.downcast_ref::<ProviderError>().unwrap().is_not_found());
    }

    #[test]
    fn search_quotes_become_hits() {
        let search: SearchResponseDto = serde_json::from_value(json!({
            "quotes": [
                { "symbol": "SAP.DE", "shortname": "SAP", "longname": "SAP SE", "exchange": "GER", "quoteType": "EQUITY" },
                { "symbol": "SAP", "shortname": "SAP SE ADR", "exchange": "NYQ", "quoteType": "EQUITY" },
                { "shortname": "no symbol" }
            ],
            "news": []
        }))
        .unwrap();

        let hits = search.to_search_hits();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name(), "SAP SE");
        assert_eq!(hits[1].name(), "SAP SE ADR");
        assert!(hits[0].is_tradable());
    }
}
