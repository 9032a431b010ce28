//! RiskSignal contract writer.
//!
//! Holds the signer and provider for the lifetime of the process; one
//! `setTier` transaction per successful publish, with the configured gas
//! limit, confirmed by receipt.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_provider::network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;

use crate::config::{Config, UPDATER_KEY_ENV};
use crate::domain::{Classification, Tier};
use crate::error::{ConfigError, PublishError, Result};
use crate::port::{EffectiveTier, PublishResult, TierPublisher, TierRecord};

sol! {
    #[sol(rpc)]
    contract RiskSignal {
        function setTier(uint8 tier, uint16 confidence) external;
        function getEffectiveTier() external view returns (uint8 tier, bool isStale);
        function getTier() external view returns (uint8 tier, uint64 updatedAt, uint16 confidence);
    }
}

/// Publisher for the RiskSignal contract.
///
/// The signer/provider handle is constructed once and reused read-only
/// across cycles; it is never reconfigured.
pub struct RiskSignalPublisher {
    provider: DynProvider,
    contract: Address,
    gas_limit: u64,
    updater: Address,
}

impl RiskSignalPublisher {
    /// Create a publisher from config.
    ///
    /// Requires the `UPDATER_PRIVATE_KEY` env var (merged into config at
    /// load time); fails fast at startup otherwise.
    pub fn new(config: &Config) -> Result<Self> {
        let private_key =
            config
                .chain
                .updater_key
                .as_ref()
                .ok_or(ConfigError::MissingField {
                    field: UPDATER_KEY_ENV,
                })?;

        let signer = PrivateKeySigner::from_str(private_key)
            .map_err(|e| PublishError::InvalidKey(e.to_string()))?
            .with_chain_id(Some(config.chain.chain_id));
        let updater = signer.address();

        let contract = Address::from_str(&config.chain.contract_address).map_err(|e| {
            ConfigError::InvalidValue {
                field: "contract_address",
                reason: e.to_string(),
            }
        })?;

        let rpc_url: url::Url = config.chain.rpc_url.parse()?;
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();

        Ok(Self {
            provider,
            contract,
            gas_limit: config.chain.gas_limit,
            updater,
        })
    }

    /// Address the updater signs with.
    pub fn updater_address(&self) -> Address {
        self.updater
    }

    fn instance(&self) -> RiskSignal::RiskSignalInstance<DynProvider> {
        RiskSignal::new(self.contract, self.provider.clone())
    }
}

#[async_trait]
impl TierPublisher for RiskSignalPublisher {
    async fn publish(&self, classification: &Classification) -> Result<PublishResult> {
        let instance = self.instance();
        debug!(
            tier = %classification.tier,
            confidence = classification.confidence,
            contract = %self.contract,
            "Submitting setTier"
        );

        let pending = instance
            .setTier(classification.tier.as_u8(), classification.confidence)
            .gas(self.gas_limit)
            .send()
            .await
            .map_err(|e| PublishError::Submission(e.to_string()))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| PublishError::Confirmation(e.to_string()))?;

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        if !receipt.status() {
            return Err(PublishError::Reverted { tx_hash }.into());
        }

        Ok(PublishResult {
            tx_hash,
            gas_used: receipt.gas_used,
        })
    }

    async fn read_effective_tier(&self) -> Result<EffectiveTier> {
        let ret = self
            .instance()
            .getEffectiveTier()
            .call()
            .await
            .map_err(|e| PublishError::Confirmation(e.to_string()))?;

        let tier = Tier::from_u8(ret.tier).ok_or_else(|| {
            PublishError::Confirmation(format!("unknown tier value {}", ret.tier))
        })?;

        Ok(EffectiveTier {
            tier,
            is_stale: ret.isStale,
        })
    }

    async fn read_tier(&self) -> Result<TierRecord> {
        let ret = self
            .instance()
            .getTier()
            .call()
            .await
            .map_err(|e| PublishError::Confirmation(e.to_string()))?;

        let tier = Tier::from_u8(ret.tier).ok_or_else(|| {
            PublishError::Confirmation(format!("unknown tier value {}", ret.tier))
        })?;

        Ok(TierRecord {
            tier,
            updated_at: ret.updatedAt,
            confidence: ret.confidence,
        })
    }
}
