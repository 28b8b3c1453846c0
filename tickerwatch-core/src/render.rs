//! Screen text
//!
//! Builds the strings shown on the 16x2 LCD. Number formatting matches the
//! deployed device character for character:
//!
//! - price: `$<thousands>,<remainder:03>` from the truncated integer price
//! - change: explicit sign, two decimals, `%`
//! - threshold: `$` then the value left-aligned in 7 cells, so a shorter
//!   value overwrites the digits of a longer one without a clear

use core::fmt::Write;

use heapless::String;

use tickerwatch_protocol::Quote;

/// Row 0 while showing a quote
pub const PRICE_HEADER: &str = "BTC Price:";

/// Row 0 while no valid quote is available
pub const LOADING_TEXT: &str = "Loading...";

/// Row 1 while the alarm is active
pub const ALARM_PROMPT: &str = "BUY NOW";

/// Row 0 during threshold selection
pub const SELECT_PROMPT: &str = "Set min val:";

/// Shown after the threshold is committed
pub const SAVED_TEXT: &str = "Threshold Saved";

/// Split a price into its thousands and remainder parts
///
/// The price is truncated toward zero first; both parts carry the sign of
/// a negative price.
pub fn split_price(price: f32) -> (i32, i32) {
    let whole = price as i32;
    (whole / 1000, whole % 1000)
}

/// Price as `$67,890`
pub fn format_price(price: f32) -> String<24> {
    let (thousands, remainder) = split_price(price);
    let mut out = String::new();
    // Capacity covers the widest i32 pair
    let _ = write!(out, "${},{:03}", thousands, remainder);
    out
}

/// Second row of the quote screen: `$67,890  +3.14%`
pub fn format_quote_line(quote: &Quote) -> String<64> {
    let (thousands, remainder) = split_price(quote.price);
    let mut out = String::new();
    // Capacity covers the widest i32 pair plus f32::MAX at two decimals
    let _ = write!(
        out,
        "${},{:03}  {:+.2}%",
        thousands, remainder, quote.change_percent
    );
    out
}

/// Threshold candidate as `$50000  `
pub fn format_threshold(threshold: u32) -> String<16> {
    let mut out = String::new();
    let _ = write!(out, "${:<7}", threshold);
    out
}
