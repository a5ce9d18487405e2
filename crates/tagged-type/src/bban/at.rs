//! Austria BBAN.

use super::*;

country_bban! {
    /// Austrian BBAN, 16 digits: `bank(5) account(11)`.
    pub struct BbanAt;
    country = "AT";
    name = "bban_at";
    layout = [
        BankCode(BANK_CODE_LENGTH = 5),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 11),
    ];
}
