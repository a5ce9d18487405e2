//! Hungary BBAN.

use super::*;

country_bban! {
    /// Hungarian BBAN, 24 digits: `bank(3) branch(4) account(16) check(1)`.
    pub struct BbanHu;
    country = "HU";
    name = "bban_hu";
    layout = [
        BankCode(BANK_CODE_LENGTH = 3),
        BranchCode(BRANCH_CODE_LENGTH = 4),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 16),
        NationalCheckDigit(NATIONAL_CHECK_DIGIT_LENGTH = 1),
    ];
}
