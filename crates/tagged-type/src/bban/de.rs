//! Germany BBAN: Bankleitzahl and account number.

use super::*;

country_bban! {
    /// German BBAN, 18 digits: `bank(8) account(10)`.
    pub struct BbanDe;
    country = "DE";
    name = "bban_de";
    layout = [
        BankCode(BANK_CODE_LENGTH = 8),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 10),
    ];
}
