//! Bulk dataset product endpoints.

use crate::client::UsptoClient;
use crate::constants::DATASET_PRODUCTS_PATH;
use crate::error::Result;
use crate::types::bulk_data::{DatasetFileResponse, DatasetProductsResponse};
use crate::types::search::{DatasetProductParams, SearchParams};

impl UsptoClient {
    /// Search bulk dataset products.
    ///
    /// **Endpoint:** `GET /v1/datasets/products/search`
    pub async fn search_dataset_products_get(
        &self,
        params: &SearchParams,
    ) -> Result<DatasetProductsResponse> {
        self.get_query(&format!("{DATASET_PRODUCTS_PATH}/search"), params)
            .await
    }

    /// Retrieve one dataset product, optionally restricting its file
    /// listing by date range or to the latest file.
    ///
    /// **Endpoint:** `GET /v1/datasets/products/{productIdentifier}`
    pub async fn get_dataset_product(
        &self,
        product_identifier: &str,
        params: &DatasetProductParams,
    ) -> Result<DatasetProductsResponse> {
        self.get_query(
            &format!("{DATASET_PRODUCTS_PATH}/{product_identifier}"),
            params,
        )
        .await
    }

    /// Retrieve the metadata of one dataset file, including its download
    /// URL.
    ///
    /// **Endpoint:** `GET /v1/datasets/products/{productIdentifier}/files/{fileName}`
    pub async fn get_dataset_file(
        &self,
        product_identifier: &str,
        file_name: &str,
    ) -> Result<DatasetFileResponse> {
        self.get(&format!(
            "{DATASET_PRODUCTS_PATH}/{product_identifier}/files/{file_name}"
        ))
        .await
    }
}
