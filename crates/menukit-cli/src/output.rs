//! Output formatting utilities.

use menukit_core::Item;
use menukit_index::CategorySummary;
use serde::Serialize;

use crate::error::CliError;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints the category table header.
#[allow(clippy::print_literal)]
pub fn print_category_header() {
    println!("  {:<28} {:<24} {:>5}  {}", "ID", "NAME", "ITEMS", "PARENT");
    println!("{}", "-".repeat(72));
}

/// Formats a category as a table row; `*` marks the default category.
pub fn format_category_row(summary: &CategorySummary, is_default: bool) -> String {
    format!(
        "{} {:<28} {:<24} {:>5}  {}",
        if is_default { '*' } else { ' ' },
        truncate(summary.id.as_str(), 28),
        truncate(&summary.name, 24),
        summary.item_count,
        summary.parent.as_deref().unwrap_or("-")
    )
}

/// Prints the item table header.
#[allow(clippy::print_literal)]
pub fn print_item_header() {
    println!("{:<16} {:<32} {:>10} {}", "ID", "NAME", "PRICE", "DIET");
    println!("{}", "-".repeat(68));
}

/// Formats an item as a table row.
pub fn format_item_row(item: &Item) -> String {
    format!(
        "{:<16} {:<32} {:>10} {}",
        truncate(item.id.as_str(), 16),
        truncate(&item.name, 32),
        format_price(item.price),
        item.diet_type.map(|d| d.as_str()).unwrap_or("-")
    )
}

/// Two-decimal price, or `-` when unknown.
pub fn format_price(price: f64) -> String {
    if price > 0.0 {
        format!("{price:.2}")
    } else {
        "-".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Greek", 8), "Greek");
        assert_eq!(truncate("Paneer Tikka Masala", 10), "Paneer ...");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn unknown_price_renders_dash() {
        assert_eq!(format_price(0.0), "-");
        assert_eq!(format_price(4.5), "4.50");
    }
}
