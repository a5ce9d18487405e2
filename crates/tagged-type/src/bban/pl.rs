//! Poland BBAN.

use super::*;

country_bban! {
    /// Polish BBAN, 24 digits: `bank(3) branch(4) check(1) account(16)`.
    pub struct BbanPl;
    country = "PL";
    name = "bban_pl";
    layout = [
        BankCode(BANK_CODE_LENGTH = 3),
        BranchCode(BRANCH_CODE_LENGTH = 4),
        NationalCheckDigit(NATIONAL_CHECK_DIGIT_LENGTH = 1),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 16),
    ];
}
