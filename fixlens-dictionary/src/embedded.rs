/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Built-in tag dictionary.
//!
//! A compiled-in table of the field tags and message types a trading log
//! most commonly carries, derived from the public FIX 4.x specifications.
//! Lookups never touch the network and never fail; tags outside the table
//! simply miss.

use crate::schema::{FieldDef, FieldType, Version};
use fixlens_core::DictionaryError;

/// One row of the field table: tag, name, type.
type FieldRow = (u32, &'static str, FieldType);

/// Field table shared by the supported versions, sorted by tag.
const FIELDS: &[FieldRow] = &[
    (1, "Account", FieldType::String),
    (6, "AvgPx", FieldType::Price),
    (8, "BeginString", FieldType::String),
    (9, "BodyLength", FieldType::Length),
    (10, "CheckSum", FieldType::String),
    (11, "ClOrdID", FieldType::String),
    (14, "CumQty", FieldType::Qty),
    (15, "Currency", FieldType::Currency),
    (17, "ExecID", FieldType::String),
    (20, "ExecTransType", FieldType::Char),
    (21, "HandlInst", FieldType::Char),
    (22, "SecurityIDSource", FieldType::String),
    (30, "LastMkt", FieldType::Exchange),
    (31, "LastPx", FieldType::Price),
    (32, "LastQty", FieldType::Qty),
    (34, "MsgSeqNum", FieldType::SeqNum),
    (35, "MsgType", FieldType::String),
    (37, "OrderID", FieldType::String),
    (38, "OrderQty", FieldType::Qty),
    (39, "OrdStatus", FieldType::Char),
    (40, "OrdType", FieldType::Char),
    (41, "OrigClOrdID", FieldType::String),
    (44, "Price", FieldType::Price),
    (48, "SecurityID", FieldType::String),
    (49, "SenderCompID", FieldType::String),
    (52, "SendingTime", FieldType::UtcTimestamp),
    (54, "Side", FieldType::Char),
    (55, "Symbol", FieldType::String),
    (56, "TargetCompID", FieldType::String),
    (58, "Text", FieldType::String),
    (59, "TimeInForce", FieldType::Char),
    (60, "TransactTime", FieldType::UtcTimestamp),
    (75, "TradeDate", FieldType::LocalMktDate),
    (98, "EncryptMethod", FieldType::Int),
    (99, "StopPx", FieldType::Price),
    (100, "ExDestination", FieldType::Exchange),
    (102, "CxlRejReason", FieldType::Int),
    (103, "OrdRejReason", FieldType::Int),
    (108, "HeartBtInt", FieldType::Int),
    (112, "TestReqID", FieldType::String),
    (115, "OnBehalfOfCompID", FieldType::String),
    (122, "OrigSendingTime", FieldType::UtcTimestamp),
    (141, "ResetSeqNumFlag", FieldType::Boolean),
    (150, "ExecType", FieldType::Char),
    (151, "LeavesQty", FieldType::Qty),
    (167, "SecurityType", FieldType::String),
    (207, "SecurityExchange", FieldType::Exchange),
    (262, "MDReqID", FieldType::String),
    (268, "NoMDEntries", FieldType::NumInGroup),
    (269, "MDEntryType", FieldType::Char),
    (270, "MDEntryPx", FieldType::Price),
    (271, "MDEntrySize", FieldType::Qty),
    (272, "MDEntryDate", FieldType::UtcDateOnly),
    (273, "MDEntryTime", FieldType::UtcTimeOnly),
    (434, "CxlRejResponseTo", FieldType::Char),
    (447, "PartyIDSource", FieldType::Char),
    (448, "PartyID", FieldType::String),
    (452, "PartyRole", FieldType::Int),
    (453, "NoPartyIDs", FieldType::NumInGroup),
];

/// Message-type names keyed by MsgType (tag 35) value, sorted by key.
const MSG_TYPES: &[(&str, &str)] = &[
    ("0", "Heartbeat"),
    ("1", "TestRequest"),
    ("2", "ResendRequest"),
    ("3", "Reject"),
    ("4", "SequenceReset"),
    ("5", "Logout"),
    ("6", "IndicationOfInterest"),
    ("7", "Advertisement"),
    ("8", "ExecutionReport"),
    ("9", "OrderCancelReject"),
    ("A", "Logon"),
    ("B", "News"),
    ("C", "Email"),
    ("D", "NewOrderSingle"),
    ("E", "NewOrderList"),
    ("F", "OrderCancelRequest"),
    ("G", "OrderCancelReplaceRequest"),
    ("H", "OrderStatusRequest"),
    ("J", "AllocationInstruction"),
    ("K", "ListCancelRequest"),
    ("L", "ListExecute"),
    ("M", "ListStatusRequest"),
    ("N", "ListStatus"),
    ("P", "AllocationInstructionAck"),
    ("Q", "DontKnowTrade"),
    ("R", "QuoteRequest"),
    ("S", "Quote"),
    ("T", "SettlementInstructions"),
    ("V", "MarketDataRequest"),
    ("W", "MarketDataSnapshotFullRefresh"),
    ("X", "MarketDataIncrementalRefresh"),
    ("Y", "MarketDataRequestReject"),
    ("Z", "QuoteCancel"),
    ("a", "QuoteStatusRequest"),
    ("b", "MassQuoteAcknowledgement"),
    ("c", "SecurityDefinitionRequest"),
    ("d", "SecurityDefinition"),
    ("e", "SecurityStatusRequest"),
    ("f", "SecurityStatus"),
    ("g", "TradingSessionStatusRequest"),
    ("h", "TradingSessionStatus"),
    ("i", "MassQuote"),
    ("j", "BusinessMessageReject"),
    ("k", "BidRequest"),
    ("l", "BidResponse"),
    ("m", "ListStrikePrice"),
    ("n", "XmlMessage"),
    ("o", "RegistrationInstructions"),
    ("p", "RegistrationInstructionsResponse"),
    ("q", "OrderMassCancelRequest"),
    ("r", "OrderMassCancelReport"),
    ("s", "NewOrderCross"),
    ("t", "CrossOrderCancelReplaceRequest"),
    ("u", "CrossOrderCancelRequest"),
    ("v", "SecurityTypeRequest"),
    ("w", "SecurityTypes"),
    ("x", "SecurityListRequest"),
    ("y", "SecurityList"),
    ("z", "DerivativeSecurityListRequest"),
];

/// Built-in dictionary over the compiled tag and message-type tables.
///
/// All supported versions share one table of common tags; the resolved
/// version is carried for display and logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedDictionary {
    /// The version this instance was resolved for.
    version: Version,
}

impl EmbeddedDictionary {
    /// Creates a dictionary for FIX 4.4.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: Version::Fix44,
        }
    }

    /// Resolves a dictionary for a BeginString value (tag 8).
    ///
    /// # Arguments
    /// * `begin_string` - The BeginString text as it appears on the wire
    ///
    /// # Errors
    /// Returns [`DictionaryError::UnsupportedVersion`] for a BeginString
    /// outside the supported set.
    pub fn for_begin_string(begin_string: &str) -> Result<Self, DictionaryError> {
        Version::from_begin_string(begin_string)
            .map(|version| Self { version })
            .ok_or_else(|| DictionaryError::UnsupportedVersion {
                begin_string: begin_string.to_string(),
            })
    }

    /// Returns the version this dictionary was resolved for.
    #[inline]
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Looks up a field definition by tag number.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    ///
    /// # Returns
    /// The field definition, or `None` for tags outside the table.
    #[must_use]
    pub fn field_by_tag(&self, tag: u32) -> Option<FieldDef> {
        FIELDS
            .binary_search_by_key(&tag, |row| row.0)
            .ok()
            .map(|index| {
                let (tag, name, field_type) = FIELDS[index];
                FieldDef::new(tag, name, field_type)
            })
    }

    /// Looks up the name of a message type (tag 35 value).
    ///
    /// # Arguments
    /// * `msg_type` - The MsgType value as it appears on the wire
    ///
    /// # Returns
    /// The message name, or `None` for unknown types.
    #[must_use]
    pub fn message_name(&self, msg_type: &str) -> Option<&'static str> {
        MSG_TYPES
            .binary_search_by(|row| row.0.cmp(msg_type))
            .ok()
            .map(|index| MSG_TYPES[index].1)
    }

    /// Returns the number of fields in the table.
    #[inline]
    #[must_use]
    pub const fn field_count(&self) -> usize {
        FIELDS.len()
    }
}

impl Default for EmbeddedDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_sorted_by_tag() {
        // Binary search relies on strictly ascending tags.
        for pair in FIELDS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "tags {} and {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_msg_type_table_sorted_by_key() {
        for pair in MSG_TYPES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "keys {} and {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_field_by_tag_known() {
        let dict = EmbeddedDictionary::new();

        let msg_type = dict.field_by_tag(35).unwrap();
        assert_eq!(msg_type.name, "MsgType");
        assert_eq!(msg_type.field_type, FieldType::String);

        let price = dict.field_by_tag(44).unwrap();
        assert_eq!(price.name, "Price");
        assert!(price.field_type.is_numeric());

        let sending_time = dict.field_by_tag(52).unwrap();
        assert_eq!(sending_time.name, "SendingTime");
        assert!(sending_time.field_type.is_timestamp());
    }

    #[test]
    fn test_field_by_tag_unknown() {
        let dict = EmbeddedDictionary::new();
        assert!(dict.field_by_tag(0).is_none());
        assert!(dict.field_by_tag(99999).is_none());
    }

    #[test]
    fn test_message_name() {
        let dict = EmbeddedDictionary::new();
        assert_eq!(dict.message_name("0"), Some("Heartbeat"));
        assert_eq!(dict.message_name("D"), Some("NewOrderSingle"));
        assert_eq!(dict.message_name("8"), Some("ExecutionReport"));
        assert_eq!(dict.message_name("j"), Some("BusinessMessageReject"));
        assert_eq!(dict.message_name("ZZ"), None);
        assert_eq!(dict.message_name(""), None);
    }

    #[test]
    fn test_for_begin_string() {
        let dict = EmbeddedDictionary::for_begin_string("FIX.4.2").unwrap();
        assert_eq!(dict.version(), Version::Fix42);

        let err = EmbeddedDictionary::for_begin_string("FIX.9.9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported begin string: FIX.9.9"
        );
    }

    #[test]
    fn test_default_version() {
        assert_eq!(EmbeddedDictionary::default().version(), Version::Fix44);
        assert!(EmbeddedDictionary::new().field_count() > 50);
    }
}
