//! BloodHound APIクライアント
//!
//! BHE署名方式で認証したHTTPリクエストを発行する。呼び出し側は
//! ステータスコード（429かどうか）だけを区別すればよい。

use crate::config::{Credentials, HttpConfig};
use crate::error::{BhqError, Result};
use crate::query::Query;
use crate::signing;
use crate::submit::SavedQueryApi;
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// saved-queries エンドポイント
const SAVED_QUERIES_URI: &str = "/api/v2/saved-queries";

/// saved-query 作成リクエストボディ
#[derive(Debug, Serialize)]
struct SavedQueryRequest<'a> {
    name: &'a str,
    query: &'a str,
    description: &'a str,
}

/// 署名付きAPIクライアント
pub struct BloodHoundClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl BloodHoundClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials, config: &HttpConfig) -> Self {
        let base_url: String = base_url.into();

        Self {
            client: config.build_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// 署名付きPOST
    async fn post_signed(&self, uri: &str, body: Vec<u8>) -> Result<reqwest::Response> {
        let request_date = signing::request_date_now();
        let signature = signing::sign(
            &self.credentials.token_key,
            "POST",
            uri,
            &request_date,
            Some(&body),
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, uri))
            .header(
                "Authorization",
                format!("bhesignature {}", self.credentials.token_id),
            )
            .header("RequestDate", request_date)
            .header("Signature", signature)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response)
    }

    /// カスタムクエリを1件作成する
    pub async fn create_saved_query(&self, query: &Query) -> Result<()> {
        let body = serde_json::to_vec(&SavedQueryRequest {
            name: &query.name,
            query: &query.cypher,
            description: query.description.as_deref().unwrap_or(""),
        })?;

        let response = self.post_signed(SAVED_QUERIES_URI, body).await?;
        let status = response.status().as_u16();

        if response.status().is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(BhqError::Api { status, message })
    }
}

impl SavedQueryApi for BloodHoundClient {
    fn create_query<'a>(
        &'a self,
        query: &'a Query,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.create_saved_query(query))
    }
}
