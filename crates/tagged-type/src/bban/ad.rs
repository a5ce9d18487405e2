//! Andorra BBAN.

use super::*;

country_bban! {
    /// Andorran BBAN, 20 digits: `bank(4) branch(4) account(12)`.
    pub struct BbanAd;
    country = "AD";
    name = "bban_ad";
    layout = [
        BankCode(BANK_CODE_LENGTH = 4),
        BranchCode(BRANCH_CODE_LENGTH = 4),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 12),
    ];
}
