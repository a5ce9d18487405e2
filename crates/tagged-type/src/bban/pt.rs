//! Portugal BBAN (NIB).

use super::*;

country_bban! {
    /// Portuguese BBAN, 21 digits: `bank(4) branch(4) account(11) check(2)`.
    pub struct BbanPt;
    country = "PT";
    name = "bban_pt";
    layout = [
        BankCode(BANK_CODE_LENGTH = 4),
        BranchCode(BRANCH_CODE_LENGTH = 4),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 11),
        NationalCheckDigit(NATIONAL_CHECK_DIGIT_LENGTH = 2),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_from() {
        let parts = BbanPt::parse("000201231234567890154").unwrap();
        assert_eq!(parts.bank_code, "0002");
        assert_eq!(parts.branch_code.as_deref(), Some("0123"));
        assert_eq!(parts.account_number, "12345678901");
        assert_eq!(parts.national_check_digit.as_deref(), Some("54"));
        assert_eq!(BbanPt::from_components(&parts).unwrap(), "000201231234567890154");
    }

    #[test]
    fn to_bban() {
        let bban = BbanPt::cast("000201231234567890154").unwrap().to_bban();
        assert_eq!(bban, "000201231234567890154");
    }
}
