//! Receipt numbers of the form `KD-YYYYMMDD-XXXXXX`.

use chrono::NaiveDate;
use rand::Rng;

/// Uppercase letters and digits without the easily confused `0`, `1`, `I` and `O`.
pub const RECEIPT_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const RECEIPT_SUFFIX_LEN: usize = 6;

/// Generates a receipt number for a visit on `visit_date`
pub fn generate_receipt_number(visit_date: NaiveDate) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..RECEIPT_SUFFIX_LEN)
        .map(|_| RECEIPT_ALPHABET[rng.random_range(0..RECEIPT_ALPHABET.len())] as char)
        .collect();

    format!("KD-{}-{}", visit_date.format("%Y%m%d"), suffix)
}
