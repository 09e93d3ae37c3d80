//! Application error codes returned by the exchange inside JSON bodies.
//!
//! The client never interprets these; failed calls still decode to plain
//! JSON and the caller matches on the `code` fields found there.

// Request
pub const MISSING_HEADER: u32 = 1;
pub const INACTIVE_API_KEY: u32 = 2;
pub const INVALID_API_KEY: u32 = 3;
pub const INVALID_NONCE: u32 = 4;
pub const INVALID_SIGNATURE: u32 = 5;
pub const INSUFFICIENT_CREDITS: u32 = 6;
pub const INVALID_ROUTE: u32 = 7;
pub const UNKNOWN_API_ACTION: u32 = 8;
pub const ADDITIONAL_AGREEMENT_NOT_ACCEPTED: u32 = 9;
pub const NO_2_FACTOR_AUTHENTICATION: u32 = 10;
pub const NO_BETA_GROUP_USER: u32 = 11;
pub const TECHNICAL_REASON: u32 = 12;
pub const TRADING_API_CURRENTLY_UNAVAILABLE: u32 = 13;
pub const NO_ACTION_PERMISSION_FOR_API_KEY: u32 = 14;
pub const MISSING_POST_PARAMETER: u32 = 15;
pub const MISSING_GET_PARAMETER: u32 = 16;
pub const INVALID_NUMBER: u32 = 17;
pub const NUMBER_TOO_LOW: u32 = 18;
pub const NUMBER_TOO_BIG: u32 = 19;
pub const TOO_MANY_DECIMAL_PLACES: u32 = 20;
pub const INVALID_BOOLEAN_VALUE: u32 = 21;
pub const FORBIDDEN_PARAMETER_VALUE: u32 = 22;
pub const INVALID_MIN_AMOUNT: u32 = 23;
pub const INVALID_DATETIME_FORMAT: u32 = 24;
pub const DATE_LOWER_THAN_MIN_DATE: u32 = 25;
pub const INVALID_VALUE: u32 = 26;
pub const FORBIDDEN_VALUE_FOR_GET_PARAMETER: u32 = 27;
pub const FORBIDDEN_VALUE_FOR_POST_PARAMETER: u32 = 28;
pub const EXPRESS_TRADE_TEMPORARILY_NOT_AVAILABLE: u32 = 29;
pub const END_DATETIME_YOUNGER_THAN_START_DATETIME: u32 = 30;
pub const PAGE_GREATER_THAN_LAST_PAGE: u32 = 31;
pub const API_KEY_BANNED: u32 = 32;
pub const IP_BANNED: u32 = 33;
pub const INVALID_TRADING_PAIR: u32 = 34;
pub const NO_KYC_FULL: u32 = 44;

// Order
pub const ORDER_NOT_FOUND: u32 = 50;
pub const ORDER_NOT_POSSIBLE: u32 = 51;
pub const INVALID_ORDER_TYPE: u32 = 52;
pub const PAYMENT_OPTION_NOT_ALLOWED_FOR_TYPE_BUY: u32 = 53;
pub const CANCELLATION_NOT_ALLOWED: u32 = 54;
pub const TRADING_SUSPENDED: u32 = 55;
pub const EXPRESS_TRADE_NOT_POSSIBLE: u32 = 56;
pub const NO_BANK_ACCOUNT: u32 = 57;

// Trade
pub const NO_ACTIVE_RESERVATION: u32 = 70;
pub const EXPRESS_TRADE_NOT_ALLOWED: u32 = 71;
pub const EXPRESS_TRADE_FAILURE_TEMPORARY: u32 = 72;
pub const EXPRESS_TRADE_FAILURE: u32 = 73;
pub const INVALID_TRADE_STATE: u32 = 74;
pub const TRADE_NOT_FOUND: u32 = 75;
pub const RESERVATION_AMOUNT_INSUFFICIENT: u32 = 76;
