//! Solana RPC Mint Client
//!
//! Reads mint account state via `getAccountInfo` with `jsonParsed` encoding
//! at confirmed commitment. The client owns its HTTP connection pool; callers
//! construct it once and reuse it across aggregation requests.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::OnChainData;
use crate::ports::chain::{ChainError, ChainMetadataSource};

use super::types::{AccountData, AccountInfoResponse};

/// Configuration for the RPC mint client.
#[derive(Debug, Clone)]
pub struct SolanaRpcConfig {
    /// Solana RPC endpoint URL
    pub rpc_url: String,
    /// Commitment level passed to getAccountInfo
    pub commitment: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SolanaRpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SolanaRpcConfig {
    /// Create config with a custom RPC URL
    pub fn with_rpc_url(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Default::default()
        }
    }
}

/// Client for fetching mint metadata from a Solana RPC endpoint.
#[derive(Debug, Clone)]
pub struct SolanaRpcClient {
    config: SolanaRpcConfig,
    http: reqwest::Client,
}

impl SolanaRpcClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self, ChainError> {
        Self::with_config(SolanaRpcConfig::default())
    }

    /// Create a client against a custom RPC URL.
    pub fn with_rpc_url(rpc_url: impl Into<String>) -> Result<Self, ChainError> {
        Self::with_config(SolanaRpcConfig::with_rpc_url(rpc_url))
    }

    /// Create a client with full custom configuration.
    pub fn with_config(config: SolanaRpcConfig) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Get the configured RPC URL
    pub fn rpc_url(&self) -> &str {
        &self.config.rpc_url
    }

    async fn get_account_info(&self, address: &str) -> Result<AccountInfoResponse, ChainError> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getAccountInfo",
            "params": [
                address,
                {
                    "encoding": "jsonParsed",
                    "commitment": self.config.commitment,
                }
            ]
        });

        let response = self
            .http
            .post(&self.config.rpc_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Rpc(format!("HTTP {}", status)));
        }

        response
            .json::<AccountInfoResponse>()
            .await
            .map_err(|e| ChainError::Parse(e.to_string()))
    }

    /// Turn an RPC response into the mint state for `address`.
    fn parse_mint_account(
        address: &str,
        response: AccountInfoResponse,
    ) -> Result<OnChainData, ChainError> {
        if let Some(error) = response.error {
            return Err(ChainError::Rpc(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }

        let result = response
            .result
            .ok_or_else(|| ChainError::Parse("no result in response".to_string()))?;

        // Fail fast when no account exists: skip the mint parse entirely
        let value = result
            .value
            .ok_or_else(|| ChainError::NotFound(address.to_string()))?;

        let parsed = match value.data {
            AccountData::Parsed(parsed) => parsed,
            AccountData::Raw(_) => return Err(ChainError::NotMint(address.to_string())),
        };

        if parsed.parsed.account_type != "mint" {
            return Err(ChainError::NotMint(address.to_string()));
        }

        let info = parsed.parsed.info;
        if !info.is_initialized {
            return Err(ChainError::NotMint(address.to_string()));
        }

        Ok(OnChainData {
            supply: info.supply,
            decimals: info.decimals,
            mint_authority: info.mint_authority,
            freeze_authority: info.freeze_authority,
            is_initialized: info.is_initialized,
        })
    }
}

#[async_trait]
impl ChainMetadataSource for SolanaRpcClient {
    async fn fetch_mint(&self, address: &str) -> Result<OnChainData, ChainError> {
        tracing::debug!(address, rpc = %self.config.rpc_url, "fetching mint account");
        let response = self.get_account_info(address).await?;
        Self::parse_mint_account(address, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::solana::types::{
        AccountInfoResult, AccountInfoValue, MintInfo, ParsedAccountData, ParsedInfo,
    };

    fn mint_response(info: MintInfo, account_type: &str) -> AccountInfoResponse {
        AccountInfoResponse {
            result: Some(AccountInfoResult {
                value: Some(AccountInfoValue {
                    data: AccountData::Parsed(ParsedAccountData {
                        parsed: ParsedInfo {
                            info,
                            account_type: account_type.to_string(),
                        },
                        program: "spl-token".to_string(),
                    }),
                    owner: "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA".to_string(),
                }),
            }),
            error: None,
        }
    }

    #[test]
    fn test_config_default() {
        let config = SolanaRpcConfig::default();
        assert_eq!(config.rpc_url, "https://api.mainnet-beta.solana.com");
        assert_eq!(config.commitment, "confirmed");
    }

    #[test]
    fn test_client_with_rpc_url() {
        let client = SolanaRpcClient::with_rpc_url("https://rpc.example.com").unwrap();
        assert_eq!(client.rpc_url(), "https://rpc.example.com");
    }

    #[test]
    fn test_parse_mint_account_success() {
        let response = mint_response(
            MintInfo {
                mint_authority: None,
                freeze_authority: None,
                supply: "45000000000000000".to_string(),
                decimals: 6,
                is_initialized: true,
            },
            "mint",
        );

        let data = SolanaRpcClient::parse_mint_account("TestMint", response).unwrap();
        assert_eq!(data.supply, "45000000000000000");
        assert_eq!(data.decimals, 6);
        assert!(data.is_initialized);
        assert!(data.authorities_revoked());
    }

    #[test]
    fn test_parse_mint_account_keeps_supply_beyond_u64() {
        // 10^21 base units does not fit in a u64
        let response = mint_response(
            MintInfo {
                mint_authority: None,
                freeze_authority: None,
                supply: "1000000000000000000000".to_string(),
                decimals: 9,
                is_initialized: true,
            },
            "mint",
        );

        let data = SolanaRpcClient::parse_mint_account("BigMint", response).unwrap();
        assert_eq!(data.supply, "1000000000000000000000");
    }

    #[test]
    fn test_parse_mint_account_not_found() {
        let response = AccountInfoResponse {
            result: Some(AccountInfoResult { value: None }),
            error: None,
        };
        let result = SolanaRpcClient::parse_mint_account("Missing", response);
        assert!(matches!(result, Err(ChainError::NotFound(_))));
    }

    #[test]
    fn test_parse_mint_account_wrong_type() {
        let response = mint_response(
            MintInfo {
                mint_authority: None,
                freeze_authority: None,
                supply: "0".to_string(),
                decimals: 0,
                is_initialized: true,
            },
            "account",
        );
        let result = SolanaRpcClient::parse_mint_account("TokenAccount", response);
        assert!(matches!(result, Err(ChainError::NotMint(_))));
    }

    #[test]
    fn test_parse_mint_account_uninitialized() {
        let response = mint_response(
            MintInfo {
                mint_authority: Some("Auth".to_string()),
                freeze_authority: None,
                supply: "0".to_string(),
                decimals: 9,
                is_initialized: false,
            },
            "mint",
        );
        let result = SolanaRpcClient::parse_mint_account("Uninit", response);
        assert!(matches!(result, Err(ChainError::NotMint(_))));
    }

    #[test]
    fn test_parse_mint_account_rpc_error() {
        let response = AccountInfoResponse {
            result: None,
            error: Some(crate::adapters::solana::types::RpcErrorObject {
                code: -32602,
                message: "Invalid param".to_string(),
            }),
        };
        let result = SolanaRpcClient::parse_mint_account("Bad", response);
        assert!(matches!(result, Err(ChainError::Rpc(_))));
    }

    #[test]
    fn test_parse_mint_account_with_authorities() {
        let response = mint_response(
            MintInfo {
                mint_authority: Some("MintAuth123".to_string()),
                freeze_authority: Some("FreezeAuth456".to_string()),
                supply: "500000000".to_string(),
                decimals: 6,
                is_initialized: true,
            },
            "mint",
        );

        let data = SolanaRpcClient::parse_mint_account("Mint", response).unwrap();
        assert!(!data.authorities_revoked());
        assert_eq!(data.mint_authority.as_deref(), Some("MintAuth123"));
        assert_eq!(data.freeze_authority.as_deref(), Some("FreezeAuth456"));
    }
}
