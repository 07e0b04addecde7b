//! Call-recording mocks for the port traits.
//!
//! Used by unit and integration tests to script responses and assert on the
//! number and order of calls (for example, that an invalid address issues
//! zero network calls). All tests stay deterministic - no real I/O.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Candle, OnChainData};

use super::chain::{ChainError, ChainMetadataSource};
use super::logo::{LogoProbe, LogoProbeError, ProbeResponse};
use super::market::{MarketDataSource, MarketError, MarketSnapshot};

/// Scripted behavior for [`MockChainSource`].
#[derive(Debug, Clone)]
enum ChainScript {
    Mint(OnChainData),
    NotFound,
    NotMint,
    Fail(String),
}

/// Mock chain source that records fetched addresses.
#[derive(Clone)]
pub struct MockChainSource {
    calls: Arc<Mutex<Vec<String>>>,
    script: Arc<Mutex<ChainScript>>,
}

impl MockChainSource {
    /// Always resolve to the given mint state.
    pub fn with_mint(data: OnChainData) -> Self {
        Self::scripted(ChainScript::Mint(data))
    }

    /// Always report that no account exists.
    pub fn not_found() -> Self {
        Self::scripted(ChainScript::NotFound)
    }

    /// Always report an account that is not an initialized mint.
    pub fn not_mint() -> Self {
        Self::scripted(ChainScript::NotMint)
    }

    /// Always fail with an RPC error.
    pub fn failing(message: &str) -> Self {
        Self::scripted(ChainScript::Fail(message.to_string()))
    }

    fn scripted(script: ChainScript) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(script)),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainMetadataSource for MockChainSource {
    async fn fetch_mint(&self, address: &str) -> Result<OnChainData, ChainError> {
        self.calls.lock().unwrap().push(address.to_string());
        match &*self.script.lock().unwrap() {
            ChainScript::Mint(data) => Ok(data.clone()),
            ChainScript::NotFound => Err(ChainError::NotFound(address.to_string())),
            ChainScript::NotMint => Err(ChainError::NotMint(address.to_string())),
            ChainScript::Fail(msg) => Err(ChainError::Rpc(msg.clone())),
        }
    }
}

/// Scripted behavior for the primary market fetch.
#[derive(Debug, Clone)]
enum MarketScript {
    Snapshot(MarketSnapshot),
    ProviderStatus(u16),
    Fail(String),
}

/// Scripted behavior for the history fetch.
#[derive(Debug, Clone)]
enum HistoryScript {
    Candles(Vec<Candle>),
    Absent,
    Fail(String),
}

/// Mock market source with independent scripts for market and history calls.
#[derive(Clone)]
pub struct MockMarketSource {
    market_calls: Arc<Mutex<Vec<String>>>,
    history_calls: Arc<Mutex<Vec<String>>>,
    market: Arc<Mutex<MarketScript>>,
    history: Arc<Mutex<HistoryScript>>,
}

impl MockMarketSource {
    /// Snapshot response with absent history.
    pub fn with_snapshot(snapshot: MarketSnapshot) -> Self {
        Self {
            market_calls: Arc::new(Mutex::new(Vec::new())),
            history_calls: Arc::new(Mutex::new(Vec::new())),
            market: Arc::new(Mutex::new(MarketScript::Snapshot(snapshot))),
            history: Arc::new(Mutex::new(HistoryScript::Absent)),
        }
    }

    /// Primary fetch fails with the given upstream HTTP status.
    pub fn with_provider_status(status: u16) -> Self {
        let mock = Self::with_snapshot(MarketSnapshot::default());
        *mock.market.lock().unwrap() = MarketScript::ProviderStatus(status);
        mock
    }

    /// Primary fetch fails with a parse error.
    pub fn failing(message: &str) -> Self {
        let mock = Self::with_snapshot(MarketSnapshot::default());
        *mock.market.lock().unwrap() = MarketScript::Fail(message.to_string());
        mock
    }

    /// Script the history call to return candles.
    pub fn with_history(self, candles: Vec<Candle>) -> Self {
        *self.history.lock().unwrap() = HistoryScript::Candles(candles);
        self
    }

    /// Script the history call to fail (the aggregator must absorb this).
    pub fn with_failing_history(self, message: &str) -> Self {
        *self.history.lock().unwrap() = HistoryScript::Fail(message.to_string());
        self
    }

    pub fn market_calls(&self) -> Vec<String> {
        self.market_calls.lock().unwrap().clone()
    }

    pub fn history_calls(&self) -> Vec<String> {
        self.history_calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.market_calls.lock().unwrap().len() + self.history_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MarketDataSource for MockMarketSource {
    async fn fetch_market(&self, address: &str) -> Result<MarketSnapshot, MarketError> {
        self.market_calls.lock().unwrap().push(address.to_string());
        match &*self.market.lock().unwrap() {
            MarketScript::Snapshot(snapshot) => Ok(snapshot.clone()),
            MarketScript::ProviderStatus(status) => Err(MarketError::Provider { status: *status }),
            MarketScript::Fail(msg) => Err(MarketError::Parse(msg.clone())),
        }
    }

    async fn fetch_history(&self, address: &str) -> Result<Option<Vec<Candle>>, MarketError> {
        self.history_calls.lock().unwrap().push(address.to_string());
        match &*self.history.lock().unwrap() {
            HistoryScript::Candles(candles) => Ok(Some(candles.clone())),
            HistoryScript::Absent => Ok(None),
            HistoryScript::Fail(msg) => Err(MarketError::Parse(msg.clone())),
        }
    }
}

/// Mock logo probe that consumes a queue of scripted outcomes, optionally
/// sleeping before each response to simulate slow upstreams under the
/// paused clock.
#[derive(Clone)]
pub struct MockLogoProbe {
    calls: Arc<Mutex<Vec<String>>>,
    outcomes: Arc<Mutex<VecDeque<Result<ProbeResponse, LogoProbeError>>>>,
    delay: Option<Duration>,
}

impl MockLogoProbe {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            delay: None,
        }
    }

    /// Queue a successful probe response.
    pub fn with_response(self, status: u16, content_type: Option<&str>) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(ProbeResponse {
            status,
            content_type: content_type.map(str::to_string),
        }));
        self
    }

    /// Queue a timeout.
    pub fn with_timeout(self) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(LogoProbeError::Timeout));
        self
    }

    /// Queue a transport error.
    pub fn with_transport_error(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(LogoProbeError::Transport(message.to_string())));
        self
    }

    /// Sleep this long before every response (virtual time in paused tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockLogoProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogoProbe for MockLogoProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, LogoProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LogoProbeError::Transport("no scripted outcome".to_string())))
    }
}
