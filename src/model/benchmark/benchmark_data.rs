use crate::model::chart::chart_color::*;

/* order book operation latency (ns); the first four are writes, the rest reads */
pub const ORDERBOOK_OPERATIONS: [&str; 8] = [
    "Insert\nBid",
    "Insert\nAsk",
    "Remove\nBid",
    "Remove\nAsk",
    "Best\nBid",
    "Best\nAsk",
    "Mid\nPrice",
    "Spread",
];
pub const ORDERBOOK_LATENCY_NS: [f64; 8] = [850.0, 820.0, 780.0, 760.0, 45.0, 42.0, 38.0, 35.0];
pub const ORDERBOOK_WRITE_OPERATIONS: usize = 4;
pub const WRITE_OPERATION_COLOR: ChartColor = ChartColor(52, 152, 219);
pub const READ_OPERATION_COLOR: ChartColor = ChartColor(46, 204, 113);

/* technical indicator update latency (ns) and throughput (ops/sec) */
pub const INDICATORS: [&str; 5] = ["SMA", "EMA", "RSI", "MACD", "Bollinger\nBands"];
pub const INDICATOR_UPDATE_NS: [f64; 5] = [120.0, 145.0, 180.0, 220.0, 250.0];
pub const INDICATOR_THROUGHPUT_OPS: [f64; 5] = [8.3e6, 6.9e6, 5.6e6, 4.5e6, 4.0e6];

/* order book throughput per implementation language (million ops/sec) */
pub const LANGUAGES: [&str; 5] = [
    "Rust\n(This Library)",
    "C++\n(Optimized)",
    "Go",
    "Java",
    "Python\n(NumPy)",
];
pub const LANGUAGE_THROUGHPUT_MOPS: [f64; 5] = [22.5, 18.2, 8.5, 6.3, 0.85];
pub const LANGUAGE_BASELINE: &str = "Rust\n(This Library)";
pub const LANGUAGE_COLORS: [ChartColor; 5] = [
    ChartColor(231, 76, 60),
    ChartColor(149, 165, 166),
    ChartColor(52, 152, 219),
    ChartColor(243, 156, 18),
    ChartColor(46, 204, 113),
];

/* memory footprint (KB) per number of order book levels */
pub const BOOK_LEVELS: [f64; 5] = [1e3, 1e4, 1e5, 1e6, 1e7];
pub const BOOK_MEMORY_KB: [f64; 5] = [0.5, 2.1, 18.5, 165.0, 1580.0];
pub const MEMORY_LINE_COLOR: ChartColor = ChartColor(231, 76, 60);
