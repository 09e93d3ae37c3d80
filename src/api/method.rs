//! Method registry for the Trading API.
//!
//! Each supported call maps to exactly one static [`MethodSpec`] describing
//! its HTTP verb, resource path segments and mandatory parameters. The enum
//! keeps the table exhaustive at compile time.

use std::fmt;

/// HTTP verb of an API method, as it appears in the signature payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Delete,
}

impl HttpVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor for one API method.
///
/// `id_param` names a caller parameter whose value is appended to the URI
/// path (and removed from the parameter set) rather than sent as a body or
/// query parameter.
#[derive(Debug, Clone, Copy)]
pub struct MethodSpec {
    pub verb: HttpVerb,
    pub entity: &'static str,
    pub subentity: Option<&'static str>,
    pub id_param: Option<&'static str>,
    pub mandatory: &'static [&'static str],
}

/// Every call supported by Trading API v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    ShowOrderbook,
    CreateOrder,
    DeleteOrder,
    ShowMyOrders,
    ShowMyOrderDetails,
    ExecuteTrade,
    ShowMyTrades,
    ShowMyTradeDetails,
    ShowAccountInfo,
    ShowAccountLedger,
    // Legacy API methods
    ShowPublicTradeHistory,
    ShowOrderbookCompact,
    ShowRates,
}

impl ApiMethod {
    pub const ALL: [ApiMethod; 13] = [
        ApiMethod::ShowOrderbook,
        ApiMethod::CreateOrder,
        ApiMethod::DeleteOrder,
        ApiMethod::ShowMyOrders,
        ApiMethod::ShowMyOrderDetails,
        ApiMethod::ExecuteTrade,
        ApiMethod::ShowMyTrades,
        ApiMethod::ShowMyTradeDetails,
        ApiMethod::ShowAccountInfo,
        ApiMethod::ShowAccountLedger,
        ApiMethod::ShowPublicTradeHistory,
        ApiMethod::ShowOrderbookCompact,
        ApiMethod::ShowRates,
    ];

    /// Wire name of the method, e.g. `showOrderbook`.
    pub fn name(self) -> &'static str {
        match self {
            ApiMethod::ShowOrderbook => "showOrderbook",
            ApiMethod::CreateOrder => "createOrder",
            ApiMethod::DeleteOrder => "deleteOrder",
            ApiMethod::ShowMyOrders => "showMyOrders",
            ApiMethod::ShowMyOrderDetails => "showMyOrderDetails",
            ApiMethod::ExecuteTrade => "executeTrade",
            ApiMethod::ShowMyTrades => "showMyTrades",
            ApiMethod::ShowMyTradeDetails => "showMyTradeDetails",
            ApiMethod::ShowAccountInfo => "showAccountInfo",
            ApiMethod::ShowAccountLedger => "showAccountLedger",
            ApiMethod::ShowPublicTradeHistory => "showPublicTradeHistory",
            ApiMethod::ShowOrderbookCompact => "showOrderbookCompact",
            ApiMethod::ShowRates => "showRates",
        }
    }

    /// Resolve a wire name to a method.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// Static descriptor for this method.
    pub const fn spec(self) -> MethodSpec {
        match self {
            ApiMethod::ShowOrderbook => MethodSpec {
                verb: HttpVerb::Get,
                entity: "orders",
                subentity: None,
                id_param: None,
                mandatory: &["type"],
            },
            ApiMethod::CreateOrder => MethodSpec {
                verb: HttpVerb::Post,
                entity: "orders",
                subentity: None,
                id_param: None,
                mandatory: &["type", "price", "max_amount"],
            },
            ApiMethod::DeleteOrder => MethodSpec {
                verb: HttpVerb::Delete,
                entity: "orders",
                subentity: None,
                id_param: Some("order_id"),
                mandatory: &[],
            },
            ApiMethod::ShowMyOrders => MethodSpec {
                verb: HttpVerb::Get,
                entity: "orders",
                subentity: Some("my_own"),
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowMyOrderDetails => MethodSpec {
                verb: HttpVerb::Get,
                entity: "orders",
                subentity: None,
                id_param: Some("order_id"),
                mandatory: &[],
            },
            ApiMethod::ExecuteTrade => MethodSpec {
                verb: HttpVerb::Post,
                entity: "trades",
                subentity: None,
                id_param: Some("order_id"),
                mandatory: &["type", "amount"],
            },
            ApiMethod::ShowMyTrades => MethodSpec {
                verb: HttpVerb::Get,
                entity: "trades",
                subentity: None,
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowMyTradeDetails => MethodSpec {
                verb: HttpVerb::Get,
                entity: "trades",
                subentity: None,
                id_param: Some("trade_id"),
                mandatory: &[],
            },
            ApiMethod::ShowAccountInfo => MethodSpec {
                verb: HttpVerb::Get,
                entity: "account",
                subentity: None,
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowAccountLedger => MethodSpec {
                verb: HttpVerb::Get,
                entity: "account",
                subentity: Some("ledger"),
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowPublicTradeHistory => MethodSpec {
                verb: HttpVerb::Get,
                entity: "trades",
                subentity: Some("history"),
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowOrderbookCompact => MethodSpec {
                verb: HttpVerb::Get,
                entity: "orders",
                subentity: Some("compact"),
                id_param: None,
                mandatory: &[],
            },
            ApiMethod::ShowRates => MethodSpec {
                verb: HttpVerb::Get,
                entity: "rates",
                subentity: None,
                id_param: None,
                mandatory: &[],
            },
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
