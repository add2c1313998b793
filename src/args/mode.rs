//! Mode resolver — cross-flag implications for check mode.

/// Final check-only mode.
///
/// `--json` and `--convert` both force check mode; nothing can turn it
/// back off once asserted.
pub fn resolve_check_mode(explicit_check: bool, json_mode: bool, convert_set: bool) -> bool {
    explicit_check || json_mode || convert_set
}

#[cfg(test)]
mod tests {
    use super::resolve_check_mode;

    #[test]
    fn default_is_full_server() {
        assert!(!resolve_check_mode(false, false, false));
    }

    #[test]
    fn any_implication_forces_check_mode() {
        for bits in 1..8u8 {
            let (check, json, convert) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert!(resolve_check_mode(check, json, convert), "bits={bits:03b}");
        }
    }
}
