//! Tests for document cleaning, validation, and formatting.

#[cfg(test)]
mod tests {
    use crate::documents::{clean, format, is_valid, validate_cnpj, validate_cpf, DocumentKind};

    // ==================== clean ====================

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(clean("111.444.777-35"), "11144477735");
        assert_eq!(clean("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn test_clean_empty_input_yields_empty_output() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("abc-./"), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("111.444.777-35");
        assert_eq!(clean(&once), once);
    }

    // ==================== CPF ====================

    #[test]
    fn test_valid_cpf() {
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("52998224725"));
    }

    #[test]
    fn test_cpf_with_mutated_last_digit_fails() {
        assert!(!validate_cpf("11144477736"));
    }

    #[test]
    fn test_cpf_with_mutated_first_check_digit_fails() {
        assert!(!validate_cpf("11144477745"));
    }

    #[test]
    fn test_repeated_digit_cpf_fails() {
        assert!(!validate_cpf("00000000000"));
        assert!(!validate_cpf("11111111111"));
        assert!(!validate_cpf("99999999999"));
    }

    #[test]
    fn test_cpf_wrong_length_fails() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("1114447773"));
        assert!(!validate_cpf("111444777355"));
    }

    #[test]
    fn test_cpf_with_non_digit_characters_fails() {
        // validation expects cleaned input; formatting characters fail it
        assert!(!validate_cpf("111.444.777-35"));
    }

    // ==================== CNPJ ====================

    #[test]
    fn test_valid_cnpj() {
        assert!(validate_cnpj("11222333000181"));
    }

    #[test]
    fn test_cnpj_with_mutated_last_digit_fails() {
        assert!(!validate_cnpj("11222333000182"));
    }

    #[test]
    fn test_cnpj_with_mutated_first_check_digit_fails() {
        assert!(!validate_cnpj("11222333000191"));
    }

    #[test]
    fn test_repeated_digit_cnpj_fails() {
        assert!(!validate_cnpj("00000000000000"));
        assert!(!validate_cnpj("11111111111111"));
    }

    #[test]
    fn test_cnpj_wrong_length_fails() {
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001811"));
    }

    #[test]
    fn test_is_valid_dispatches_by_kind() {
        assert!(is_valid("11144477735", DocumentKind::Cpf));
        assert!(!is_valid("11144477735", DocumentKind::Cnpj));
        assert!(is_valid("11222333000181", DocumentKind::Cnpj));
        assert!(!is_valid("11222333000181", DocumentKind::Cpf));
    }

    // ==================== format ====================

    #[test]
    fn test_format_cpf() {
        assert_eq!(format("11144477735", DocumentKind::Cpf), "111.444.777-35");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(
            format("11222333000181", DocumentKind::Cnpj),
            "11.222.333/0001-81"
        );
    }

    #[test]
    fn test_format_wrong_length_returns_input_unchanged() {
        assert_eq!(format("123", DocumentKind::Cpf), "123");
        assert_eq!(format("123", DocumentKind::Cnpj), "123");
    }

    #[test]
    fn test_format_then_clean_round_trips() {
        let digits = "11144477735";
        assert_eq!(clean(&format(digits, DocumentKind::Cpf)), digits);

        let digits = "11222333000181";
        assert_eq!(clean(&format(digits, DocumentKind::Cnpj)), digits);
    }

    #[test]
    fn test_format_does_not_signal_validity() {
        // an invalid but correctly sized number still formats
        assert_eq!(format("11111111111", DocumentKind::Cpf), "111.111.111-11");
    }
}
