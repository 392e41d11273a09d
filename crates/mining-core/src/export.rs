//! Plain-text report formatting for collected coins.
//!
//! Pure formatting over a coin slice and a caller-supplied locale
//! timestamp; the download itself (Blob and anchor dance) happens in
//! the page.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::coin::Coin;

/// Build the downloadable coin report.
///
/// A two-line header (timestamp banner, total count), a blank line,
/// then one line per coin in discovery order.
pub fn report(coins: &[Coin], timestamp: &str) -> String {
    let mut lines = Vec::with_capacity(coins.len() + 3);
    lines.push(format!(
        "{}에 happy mining!에서 채굴된 코인입니다.",
        timestamp
    ));
    lines.push(format!("채굴한 코인 개수: {}", coins.len()));
    lines.push(String::new());
    for coin in coins {
        lines.push(format!(
            "HEX값: {}, Count: {}, level: {}",
            coin.hash, coin.count, coin.level
        ));
    }
    lines.join("\n")
}

/// File name for the downloaded report.
pub fn report_file_name(timestamp: &str) -> String {
    format!("{} COINS.txt", timestamp)
}
