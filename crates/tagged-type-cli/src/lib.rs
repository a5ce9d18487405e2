//! # tagged-type-cli: Command-Line Interface
//!
//! The `tagged` binary: validate identifiers and decompose composite ones
//! from the shell or CI scripts.
//!
//! ## Subcommands
//!
//! - `tagged check <kind> <input>`: sanitize and validate; exit 0 / 1.
//! - `tagged parse <bic|bban|iban> <input>`: print the components.
//! - `tagged countries`: list registered BBAN countries.
//!
//! ```bash
//! tagged check country-code cz
//! tagged --output json parse iban "DE89 3704 0044 0532 0130 00"
//! tagged --config tagged.yaml countries
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed
//!   arguments and the resolved [`config::Settings`].
//! - Validation and decomposition are delegated to `tagged-type`.

pub mod check;
pub mod config;
pub mod countries;
pub mod kind;
pub mod parse;
