//! France BBAN (RIB).

use super::*;

country_bban! {
    /// French BBAN, 23 digits: `bank(5) branch(5) account(11) check(2)`.
    ///
    /// Only all-digit account numbers are supported.
    pub struct BbanFr;
    country = "FR";
    name = "bban_fr";
    layout = [
        BankCode(BANK_CODE_LENGTH = 5),
        BranchCode(BRANCH_CODE_LENGTH = 5),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 11),
        NationalCheckDigit(NATIONAL_CHECK_DIGIT_LENGTH = 2),
    ];
}
