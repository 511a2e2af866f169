//! Patent application endpoints.
//!
//! File wrapper retrieval, the narrower per-slice lookups (meta-data,
//! adjustment, assignment, attorney, continuity, foreign priority,
//! transactions, associated documents), and application search.

use crate::client::UsptoClient;
use crate::constants::PATENT_APPLICATIONS_PATH;
use crate::error::{Result, UsptoError};
use crate::types::applications::{PatentDataResponse, PatentFileWrapperResponse};
use crate::types::enums::SortOrder;
use crate::types::search::{Pagination, SearchFilter, SearchParams, SearchRequest, SortField};

/// A PCT application number decomposed into its parts.
///
/// Accepted input (after the `PCT` prefix): an optional receiving-office
/// code (`US`, `IB`, or `AU`; `US` assumed when absent), an optional `20`
/// century prefix, a two-digit year, and the serial digits. Examples:
/// `PCTUS2004027676`, `PCTIB0501234`, `PCT0427676`.
#[derive(Debug, PartialEq, Eq)]
struct PctApplicationNumber {
    country: &'static str,
    year: String,
    number: String,
}

impl PctApplicationNumber {
    /// Parse the part of a PCT application number after the `PCT` prefix.
    fn parse(rest: &str) -> Option<Self> {
        let (country, digits) = match rest.get(..2) {
            Some("US") => ("US", &rest[2..]),
            Some("IB") => ("IB", &rest[2..]),
            Some("AU") => ("AU", &rest[2..]),
            _ => ("US", rest),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Consume the optional "20" century prefix only when a two-digit
        // year and at least one serial digit remain after it.
        let digits = if digits.starts_with("20") && digits.len() >= 5 {
            &digits[2..]
        } else {
            digits
        };
        if digits.len() < 3 {
            return None;
        }
        Some(Self {
            country,
            year: digits[..2].to_owned(),
            number: digits[2..].to_owned(),
        })
    }

    fn standardized(&self) -> String {
        format!("PCT{}{}{}", self.country, self.year, self.number)
    }

    fn has_leading_zero(&self) -> bool {
        self.number.starts_with('0')
    }

    /// The standardized form with leading zeros stripped from the serial
    /// digits.
    fn without_leading_zeros(&self) -> String {
        let trimmed = self.number.trim_start_matches('0');
        let number = if trimmed.is_empty() { "0" } else { trimmed };
        format!("PCT{}{}{}", self.country, self.year, number)
    }
}

impl UsptoClient {
    /// Retrieve a patent application's file wrapper.
    ///
    /// The serial number is normalized first: a leading `US` on non-PCT
    /// numbers is stripped (`US0506853` → `0506853`), and PCT numbers are
    /// standardized to `PCT{country}{yy}{digits}`. When a standardized PCT
    /// lookup returns 404 and the serial digits carry leading zeros, the
    /// lookup is retried once without them.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}`
    pub async fn get_patent_wrapper(
        &self,
        serial_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        let serial = serial_number.strip_prefix("US").unwrap_or(serial_number);

        let Some(rest) = serial.strip_prefix("PCT") else {
            return self
                .get(&format!("{PATENT_APPLICATIONS_PATH}/{serial}"))
                .await;
        };

        let pct = PctApplicationNumber::parse(rest).ok_or_else(|| {
            UsptoError::InvalidArgument(format!(
                "invalid PCT application number format: {serial}"
            ))
        })?;

        let first = self
            .get(&format!(
                "{PATENT_APPLICATIONS_PATH}/{}",
                pct.standardized()
            ))
            .await;

        match first {
            Err(UsptoError::Api(ref err)) if err.code() == 404 && pct.has_leading_zero() => {
                self.get(&format!(
                    "{PATENT_APPLICATIONS_PATH}/{}",
                    pct.without_leading_zeros()
                ))
                .await
            }
            other => other,
        }
    }

    /// Retrieve application metadata.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/meta-data`
    pub async fn get_app_metadata(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/meta-data"
        ))
        .await
    }

    /// Retrieve patent term adjustment data.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/adjustment`
    pub async fn get_adjustment(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/adjustment"
        ))
        .await
    }

    /// Retrieve recorded assignments.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/assignment`
    pub async fn get_patent_assignments(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/assignment"
        ))
        .await
    }

    /// Retrieve attorney/agent of record data.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/attorney`
    pub async fn get_attorney(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/attorney"
        ))
        .await
    }

    /// Retrieve parent/child continuity data.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/continuity`
    pub async fn get_continuity(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/continuity"
        ))
        .await
    }

    /// Retrieve foreign priority claims.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/foreign-priority`
    pub async fn get_foreign_priority(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/foreign-priority"
        ))
        .await
    }

    /// Retrieve the transaction history.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/transactions`
    pub async fn get_patent_transactions(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/transactions"
        ))
        .await
    }

    /// Retrieve associated-document (pre-grant publication and grant)
    /// metadata.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/associated-documents`
    pub async fn get_associated_documents(
        &self,
        application_number: &str,
    ) -> Result<PatentFileWrapperResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{application_number}/associated-documents"
        ))
        .await
    }

    /// Search patent applications with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/patent/applications/search`
    pub async fn search_patent_applications(
        &self,
        req: &SearchRequest,
    ) -> Result<PatentFileWrapperResponse> {
        self.post(&format!("{PATENT_APPLICATIONS_PATH}/search"), req)
            .await
    }

    /// Search patent applications with query parameters.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/search`
    pub async fn search_patent_applications_get(
        &self,
        params: &SearchParams,
    ) -> Result<PatentFileWrapperResponse> {
        self.get_query(&format!("{PATENT_APPLICATIONS_PATH}/search"), params)
            .await
    }

    /// Download application search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/patent/applications/search/download`
    pub async fn search_patent_applications_download(
        &self,
        req: &SearchRequest,
    ) -> Result<PatentDataResponse> {
        self.post(&format!("{PATENT_APPLICATIONS_PATH}/search/download"), req)
            .await
    }

    /// Download application search results with query parameters.
    ///
    /// Supports `format=json|csv` via
    /// [`SearchParams::format`](crate::types::search::SearchParams); the
    /// CSV variant returns a `downloadUrl` instead of an inline bag.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/search/download`
    pub async fn search_patent_applications_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<PatentDataResponse> {
        self.get_query(&format!("{PATENT_APPLICATIONS_PATH}/search/download"), params)
            .await
    }

    /// Look up the application metadata behind a patent number.
    ///
    /// Convenience chain for callers who hold a patent number rather than
    /// an application number: the patent number is sanitized to its digits
    /// (`US9,022,434` → `9022434`), a search constrained to granted
    /// utility patents resolves the application number, and the metadata
    /// endpoint is then fetched for it. Returns `Ok(None)` when the search
    /// yields no application. Exactly two HTTP calls, in that order.
    pub async fn get_app_metadata_from_patent_number(
        &self,
        patent_number: &str,
    ) -> Result<Option<PatentFileWrapperResponse>> {
        let sanitized: String = patent_number.chars().filter(char::is_ascii_digit).collect();

        let req = SearchRequest {
            q: Some(format!("applicationMetaData.patentNumber:{sanitized}")),
            filters: Some(vec![
                SearchFilter::new("applicationMetaData.applicationTypeLabelName", "Utility"),
                SearchFilter::new("applicationMetaData.publicationCategoryBag", "Granted/Issued"),
            ]),
            sort: Some(vec![SortField {
                field: "applicationMetaData.filingDate".into(),
                order: SortOrder::Desc,
            }]),
            pagination: Some(Pagination { offset: 0, limit: 25 }),
            fields: Some(vec![
                "applicationNumberText".into(),
                "applicationMetaData".into(),
            ]),
            facets: Some(vec!["applicationMetaData.applicationTypeLabelName".into()]),
            ..Default::default()
        };

        let search = self.search_patent_applications(&req).await?;
        if search.count == 0 {
            return Ok(None);
        }

        let Some(application_number) = search
            .first()
            .and_then(|w| w.application_number_text.as_deref())
        else {
            return Ok(None);
        };

        self.get_app_metadata(application_number).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_parse_with_country_and_century() {
        let pct = PctApplicationNumber::parse("US2004027676").unwrap();
        assert_eq!(pct.country, "US");
        assert_eq!(pct.year, "04");
        assert_eq!(pct.number, "027676");
        assert_eq!(pct.standardized(), "PCTUS04027676");
        assert!(pct.has_leading_zero());
        assert_eq!(pct.without_leading_zeros(), "PCTUS0427676");
    }

    #[test]
    fn pct_parse_defaults_to_us() {
        let pct = PctApplicationNumber::parse("0427676").unwrap();
        assert_eq!(pct.country, "US");
        assert_eq!(pct.year, "04");
        assert_eq!(pct.number, "27676");
    }

    #[test]
    fn pct_parse_other_offices() {
        assert_eq!(PctApplicationNumber::parse("IB0501234").unwrap().country, "IB");
        assert_eq!(PctApplicationNumber::parse("AU0501234").unwrap().country, "AU");
    }

    #[test]
    fn pct_parse_keeps_twenty_as_year_when_too_short() {
        // "2041" cannot spare a century prefix: year 20, serial 41.
        let pct = PctApplicationNumber::parse("2041").unwrap();
        assert_eq!(pct.year, "20");
        assert_eq!(pct.number, "41");
        // "20412" can: year 41, serial 2.
        let pct = PctApplicationNumber::parse("20412").unwrap();
        assert_eq!(pct.year, "41");
        assert_eq!(pct.number, "2");
    }

    #[test]
    fn pct_parse_rejects_non_digits_and_short_input() {
        assert!(PctApplicationNumber::parse("US20abc").is_none());
        assert!(PctApplicationNumber::parse("04").is_none());
        assert!(PctApplicationNumber::parse("").is_none());
    }
}
