use chrono::{DateTime, TimeZone, Utc};
use zen_core::{Stock, ZodiacMatchedStocks};

struct DemoStock {
    ticker: &'static str,
    company_name: &'static str,
    current_price: f64,
    previous_close: f64,
    description: &'static str,
    founded: (i32, u32, u32),
    zodiac_sign: &'static str,
    match_type: &'static str,
    compatibility_score: u8,
    is_same_sign: bool,
    element: &'static str,
}

const DEMO_STOCKS: [DemoStock; 6] = [
    DemoStock {
        ticker: "AAPL",
        company_name: "Apple Inc.",
        current_price: 189.25,
        previous_close: 186.8,
        description: "Apple Inc. designs, manufactures, and markets smartphones, personal computers, tablets, wearables, and accessories worldwide.",
        founded: (1976, 4, 1),
        zodiac_sign: "Virgo",
        match_type: "positive",
        compatibility_score: 4,
        is_same_sign: true,
        element: "Earth",
    },
    DemoStock {
        ticker: "MSFT",
        company_name: "Microsoft Corporation",
        current_price: 378.85,
        previous_close: 380.05,
        description: "Microsoft Corporation develops, licenses, and supports software, services, devices, and solutions worldwide.",
        founded: (1975, 4, 4),
        zodiac_sign: "Taurus",
        match_type: "positive",
        compatibility_score: 3,
        is_same_sign: false,
        element: "Earth",
    },
    DemoStock {
        ticker: "GOOGL",
        company_name: "Alphabet Inc.",
        current_price: 142.56,
        previous_close: 138.78,
        description: "Alphabet Inc. provides various products and platforms in the United States, Europe, the Middle East, Africa, the Asia-Pacific, Canada, and Latin America.",
        founded: (1998, 9, 4),
        zodiac_sign: "Virgo",
        match_type: "positive",
        compatibility_score: 4,
        is_same_sign: true,
        element: "Earth",
    },
    DemoStock {
        ticker: "NVDA",
        company_name: "NVIDIA Corporation",
        current_price: 875.3,
        previous_close: 859.7,
        description: "NVIDIA Corporation provides graphics, and compute and networking solutions in the United States, Taiwan, China, and internationally.",
        founded: (1993, 1, 1),
        zodiac_sign: "Capricorn",
        match_type: "positive",
        compatibility_score: 3,
        is_same_sign: false,
        element: "Earth",
    },
    DemoStock {
        ticker: "TSLA",
        company_name: "Tesla, Inc.",
        current_price: 248.42,
        previous_close: 252.75,
        description: "Tesla, Inc. designs, develops, manufactures, leases, and sells electric vehicles, and energy generation and storage systems in the United States, China, and internationally.",
        founded: (2003, 7, 1),
        zodiac_sign: "Cancer",
        match_type: "neutral",
        compatibility_score: 2,
        is_same_sign: false,
        element: "Water",
    },
    DemoStock {
        ticker: "META",
        company_name: "Meta Platforms, Inc.",
        current_price: 484.2,
        previous_close: 475.3,
        description: "Meta Platforms, Inc. engages in the development of products that enable people to connect and share with friends and family through mobile devices, personal computers, virtual reality headsets, and wearables worldwide.",
        founded: (2004, 2, 4),
        zodiac_sign: "Aquarius",
        match_type: "neutral",
        compatibility_score: 2,
        is_same_sign: false,
        element: "Air",
    },
];

/// Fixed zodiac matches served while in demo mode (a Virgo user)
pub(crate) fn demo_matched_stocks(now: DateTime<Utc>) -> ZodiacMatchedStocks {
    let matched_stocks: Vec<Stock> = DEMO_STOCKS
        .iter()
        .zip(1..)
        .map(|(stock, id)| {
            let (year, month, day) = stock.founded;
            Stock {
                id,
                ticker: stock.ticker.to_string(),
                company_name: stock.company_name.to_string(),
                current_price: Some(stock.current_price),
                previous_close: Some(stock.previous_close),
                market_state: Some("REGULAR".to_string()),
                last_updated: now,
                description: stock.description.to_string(),
                date_founded: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single(),
                zodiac_sign: Some(stock.zodiac_sign.to_string()),
                match_type: Some(stock.match_type.to_string()),
                compatibility_score: Some(stock.compatibility_score),
                is_same_sign: Some(stock.is_same_sign),
                element: Some(stock.element.to_string()),
            }
        })
        .collect();

    ZodiacMatchedStocks {
        user_sign: "Virgo".to_string(),
        user_element: "Earth".to_string(),
        total_matches: matched_stocks.len(),
        matched_stocks,
    }
}
