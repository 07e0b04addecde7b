//! Solana RPC Response Types
//!
//! Wire shapes for `getAccountInfo` with `jsonParsed` encoding, reduced to
//! the fields the mint parser needs.

use serde::Deserialize;

/// Top-level JSON-RPC envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfoResponse {
    pub result: Option<AccountInfoResult>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfoResult {
    /// None when no account exists at the queried address
    pub value: Option<AccountInfoValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfoValue {
    pub data: AccountData,
    pub owner: String,
}

/// `jsonParsed` encoding falls back to a raw `[data, encoding]` pair when the
/// owner program is not recognized.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountData {
    Parsed(ParsedAccountData),
    Raw(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedAccountData {
    pub parsed: ParsedInfo,
    pub program: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedInfo {
    pub info: MintInfo,
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Mint account fields from the SPL Token program.
#[derive(Debug, Clone, Deserialize)]
pub struct MintInfo {
    #[serde(rename = "mintAuthority")]
    pub mint_authority: Option<String>,
    #[serde(rename = "freezeAuthority")]
    pub freeze_authority: Option<String>,
    /// Decimal string; supplies can exceed u64 so it is never parsed to an int
    pub supply: String,
    pub decimals: u8,
    #[serde(rename = "isInitialized")]
    pub is_initialized: bool,
}
