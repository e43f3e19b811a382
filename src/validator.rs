use crate::deriver::ClaimPair;

/// True when the identifier has no `a`-`f` letters and could pass for a number.
pub fn is_all_decimal(claim_id: &str) -> bool {
    claim_id.chars().all(|c| c.is_ascii_digit())
}

pub fn find_problematic_pairs(pairs: &[ClaimPair]) -> Vec<&ClaimPair> {
    pairs
        .iter()
        .filter(|pair| is_all_decimal(&pair.claim_id))
        .collect()
}

/// Logs every all-decimal pair for manual review. Advisory only.
pub fn report_problematic_pairs(pairs: &[ClaimPair]) -> usize {
    tracing::info!("Checking for problematic pairs");

    let problematic = find_problematic_pairs(pairs);
    for pair in &problematic {
        tracing::warn!(
            "Found a problematic pair: ({}, {})",
            pair.address,
            pair.claim_id
        );
    }

    problematic.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_only() -> String {
        "0123456789".repeat(7)[..64].to_string()
    }

    #[test]
    fn test_all_decimal_is_flagged() {
        assert!(is_all_decimal(&digits_only()));
    }

    #[test]
    fn test_hex_letter_is_not_flagged() {
        let mut claim_id = digits_only();
        claim_id.replace_range(63..64, "f");
        assert!(!is_all_decimal(&claim_id));
        assert!(!is_all_decimal(
            "b4bc136e1fb4ea0b3340d06b158277c4a8537a13202f518e5b8c423273b9d7a0"
        ));
    }

    #[test]
    fn test_find_problematic_pairs() {
        let pairs = vec![
            ClaimPair::new("0xAA", "a".repeat(64)),
            ClaimPair::new("0xBB", digits_only()),
            ClaimPair::new("0xCC", format!("{}e", &digits_only()[..63])),
        ];

        let problematic = find_problematic_pairs(&pairs);
        assert_eq!(problematic, vec![&pairs[1]]);
        assert_eq!(report_problematic_pairs(&pairs), 1);
    }

    #[test]
    fn test_report_leaves_pairs_untouched() {
        let pairs = vec![ClaimPair::new("0xBB", digits_only())];
        let before = pairs.clone();
        report_problematic_pairs(&pairs);
        assert_eq!(pairs, before);
    }
}
