//! Czech Republic BBAN: bank code, account prefix, account number.

use super::*;

country_bban! {
    /// Czech BBAN, 20 digits: `bank(4) prefix(6) account(10)`.
    ///
    /// The prefix and account number are often written without leading
    /// zeros (`19-2000145399/0800`); [`CountryBban::from_components`] pads
    /// them back.
    pub struct BbanCz;
    country = "CZ";
    name = "bban_cz";
    layout = [
        BankCode(BANK_CODE_LENGTH = 4),
        AccountPrefix(ACCOUNT_PREFIX_LENGTH = 6),
        AccountNumber(ACCOUNT_NUMBER_LENGTH = 10),
    ];
}
