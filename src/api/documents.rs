//! Application document endpoints — listing and binary downloads.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::client::UsptoClient;
use crate::constants::PATENT_APPLICATIONS_PATH;
use crate::error::{Result, UsptoError};
use crate::types::documents::{Document, DocumentsResponse, DownloadOption};
use crate::types::enums::DocumentFormat;

/// Resolve the download option matching the requested format.
fn download_option(document: &Document, format: DocumentFormat) -> Result<&DownloadOption> {
    document
        .download_option_bag
        .iter()
        .find(|opt| opt.mime_type_identifier == format.as_str())
        .ok_or_else(|| {
            let available: Vec<&str> = document
                .download_option_bag
                .iter()
                .map(|opt| opt.mime_type_identifier.as_str())
                .collect();
            UsptoError::InvalidArgument(format!(
                "format '{format}' not available for document {}; available: {}",
                document.document_identifier,
                available.join(", ")
            ))
        })
}

/// Default filename for a saved document:
/// `{applicationNumber}_{documentCode}_{documentIdentifier}.{ext}`.
fn default_filename(document: &Document, format: DocumentFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        document.application_number_text,
        document.document_code,
        document.document_identifier,
        format.extension()
    )
}

impl UsptoClient {
    /// Retrieve all documents in an application's image file wrapper.
    ///
    /// **Endpoint:** `GET /v1/patent/applications/{applicationNumberText}/documents`
    pub async fn get_patent_documents(&self, serial_number: &str) -> Result<DocumentsResponse> {
        self.get(&format!(
            "{PATENT_APPLICATIONS_PATH}/{serial_number}/documents"
        ))
        .await
    }

    /// Download one document rendition and return its raw bytes.
    ///
    /// The download URL comes from the document's `downloadOptionBag`;
    /// requesting a format the document does not offer is an
    /// [`UsptoError::InvalidArgument`] naming the available formats.
    pub async fn download_document(
        &self,
        document: &Document,
        format: DocumentFormat,
    ) -> Result<Bytes> {
        let option = download_option(document, format)?;
        let resp = self.get_raw(&option.download_url).await?;
        Ok(resp.bytes().await?)
    }

    /// Download one document rendition, streaming it to a file in `dir`.
    ///
    /// When `filename` is `None`, the file is named
    /// `{applicationNumber}_{documentCode}_{documentIdentifier}.{ext}`.
    /// Returns the full path of the written file.
    pub async fn download_document_to_dir(
        &self,
        document: &Document,
        dir: impl AsRef<Path>,
        filename: Option<&str>,
        format: DocumentFormat,
    ) -> Result<PathBuf> {
        let option = download_option(document, format)?;
        let filename = filename
            .map(str::to_owned)
            .unwrap_or_else(|| default_filename(document, format));
        let path = dir.as_ref().join(filename);

        let resp = self.get_raw(&option.download_url).await?;
        let mut file = tokio::fs::File::create(&path).await?;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        tracing::info!(
            document = %document.document_identifier,
            %format,
            path = %path.display(),
            "downloaded document"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        serde_json::from_value(serde_json::json!({
            "applicationNumberText": "16123456",
            "officialDate": "2020-01-15T00:00:00Z",
            "documentIdentifier": "KB7F9PXDPP",
            "documentCode": "CTNF",
            "documentCodeDescriptionText": "Non-Final Rejection",
            "directionCategory": "OUTGOING",
            "downloadOptionBag": [
                {"mimeTypeIdentifier": "PDF", "downloadUrl": "https://example.com/doc.pdf"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn default_filename_embeds_identifiers_and_extension() {
        let doc = sample_document();
        assert_eq!(
            default_filename(&doc, DocumentFormat::PDF),
            "16123456_CTNF_KB7F9PXDPP.pdf"
        );
        assert_eq!(
            default_filename(&doc, DocumentFormat::MS_WORD),
            "16123456_CTNF_KB7F9PXDPP.doc"
        );
    }

    #[test]
    fn unavailable_format_lists_alternatives() {
        let doc = sample_document();
        let err = download_option(&doc, DocumentFormat::XML).unwrap_err();
        match err {
            UsptoError::InvalidArgument(msg) => {
                assert!(msg.contains("XML"));
                assert!(msg.contains("available: PDF"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
