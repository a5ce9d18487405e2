//! Slovakia BBAN.

use super::*;

country_bban! {
    /// Slovak BBAN, 20 digits: `bank(4) account(16)`.
    ///
    /// The account part holds the prefix and number as one field.
    pub struct BbanSk;
    country = "SK";
    name = "bban_sk";
    layout = [
        BankCode(BANK_CODE_LENGTH = 4),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 16),
    ];
}
