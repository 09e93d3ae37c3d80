//! Typed values for well-known exchange parameters.
//!
//! All of these convert into [`ParamValue`] so they slot directly into a
//! [`Params`](super::Params) map; untyped strings work just as well for
//! parameters not covered here.

use serde::{Deserialize, Serialize};

use super::params::ParamValue;

/// Side of an order or trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }
}

impl From<OrderType> for ParamValue {
    fn from(value: OrderType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Minimum trust level of a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Bronze,
    Silver,
    Gold,
    Platin,
}

impl TrustLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrustLevel::Bronze => "bronze",
            TrustLevel::Silver => "silver",
            TrustLevel::Gold => "gold",
            TrustLevel::Platin => "platin",
        }
    }
}

impl From<TrustLevel> for ParamValue {
    fn from(value: TrustLevel) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Traded currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingPair {
    BtcEur,
    BchEur,
}

impl TradingPair {
    pub fn as_str(self) -> &'static str {
        match self {
            TradingPair::BtcEur => "btceur",
            TradingPair::BchEur => "bcheur",
        }
    }
}

impl From<TradingPair> for ParamValue {
    fn from(value: TradingPair) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Order lifecycle state, as used by the `state` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    Expired,
    Cancelled,
    Pending,
}

impl OrderState {
    pub fn as_i64(self) -> i64 {
        match self {
            OrderState::Expired => -2,
            OrderState::Cancelled => -1,
            OrderState::Pending => 0,
        }
    }
}

impl From<OrderState> for ParamValue {
    fn from(value: OrderState) -> Self {
        ParamValue::Int(value.as_i64())
    }
}

/// Trade lifecycle state, as used by the `state` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeState {
    Cancelled,
    Pending,
    Successful,
}

impl TradeState {
    pub fn as_i64(self) -> i64 {
        match self {
            TradeState::Cancelled => -1,
            TradeState::Pending => 0,
            TradeState::Successful => 1,
        }
    }
}

impl From<TradeState> for ParamValue {
    fn from(value: TradeState) -> Self {
        ParamValue::Int(value.as_i64())
    }
}

/// Payment options accepted when creating an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOption {
    OnlyExpress,
    OnlySepa,
    ExpressOrSepa,
}

impl PaymentOption {
    pub fn as_i64(self) -> i64 {
        match self {
            PaymentOption::OnlyExpress => 1,
            PaymentOption::OnlySepa => 2,
            PaymentOption::ExpressOrSepa => 3,
        }
    }
}

impl From<PaymentOption> for ParamValue {
    fn from(value: PaymentOption) -> Self {
        ParamValue::Int(value.as_i64())
    }
}

/// Account ledger entry type, as used by the `type` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerType {
    All,
    Buy,
    Sell,
    Inpayment,
    Payout,
    Affiliate,
    BuyYubikey,
    BuyGoldshop,
    BuyDiamondshop,
    Kickback,
}

impl LedgerType {
    pub fn as_str(self) -> &'static str {
        match self {
            LedgerType::All => "all",
            LedgerType::Buy => "buy",
            LedgerType::Sell => "sell",
            LedgerType::Inpayment => "inpayment",
            LedgerType::Payout => "payout",
            LedgerType::Affiliate => "affiliate",
            LedgerType::BuyYubikey => "buy_yubikey",
            LedgerType::BuyGoldshop => "buy_goldshop",
            LedgerType::BuyDiamondshop => "buy_diamondshop",
            LedgerType::Kickback => "kickback",
        }
    }
}

impl From<LedgerType> for ParamValue {
    fn from(value: LedgerType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}
