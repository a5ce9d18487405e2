//! Spain BBAN (código cuenta cliente).

use super::*;

country_bban! {
    /// Spanish BBAN, 20 digits: `bank(4) branch(4) check(2) account(10)`.
    pub struct BbanEs;
    country = "ES";
    name = "bban_es";
    layout = [
        BankCode(BANK_CODE_LENGTH = 4),
        BranchCode(BRANCH_CODE_LENGTH = 4),
        NationalCheckDigit(NATIONAL_CHECK_DIGIT_LENGTH = 2),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 10),
    ];
}
