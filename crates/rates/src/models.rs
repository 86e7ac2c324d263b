use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::RateError;

/// Calendar date format used for routing, cache keys and the historical
/// endpoint's `day` parameter.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A resolved blue-dollar quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueRate {
    /// Selling rate in ARS per USD.
    pub value_sell: Decimal,
    /// ISO-8601 calendar date for historical quotes; the provider's own
    /// update timestamp for the latest quote.
    pub date: String,
}

/// Which fetch path a requested date resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateQuery {
    /// The intraday rate, refreshed on a short window.
    Latest,
    /// The closing rate of a past calendar day.
    Historical(NaiveDate),
}

impl RateQuery {
    /// Classify a raw `date` parameter against the given calendar date.
    ///
    /// Both the literal `"today"` and today's own ISO date resolve to the
    /// latest path: a historical lookup for the current day would sit in
    /// the 24h cache while the intraday rate keeps moving.
    pub fn classify(input: &str, today: NaiveDate) -> Result<Self, RateError> {
        if input == "today" {
            return Ok(RateQuery::Latest);
        }
        let day = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
            .map_err(|_| RateError::InvalidDate(input.to_string()))?;
        if day == today {
            Ok(RateQuery::Latest)
        } else {
            Ok(RateQuery::Historical(day))
        }
    }

    /// Classify against the server's current UTC date. UTC is the single
    /// timezone policy for "today" equivalence, so behavior near midnight
    /// does not depend on the host's local offset.
    pub fn for_input(input: &str) -> Result<Self, RateError> {
        Self::classify(input, Utc::now().date_naive())
    }
}
