//! BloodHound APIリクエスト署名
//!
//! BHE署名方式: HMAC-SHA256 を 操作キー（メソッド+URI）→ 日付キー →
//! ボディ の順に連鎖させ、最終ダイジェストを base64 で Signature
//! ヘッダに載せる。日付キーは RFC3339 日時の先頭13文字（時まで）。

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// 日付キーの長さ（"YYYY-MM-DDTHH"）
const DATE_KEY_LEN: usize = 13;

fn keyed(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length")
}

/// リクエスト署名を生成する
pub fn sign(
    token_key: &str,
    method: &str,
    uri: &str,
    request_date: &str,
    body: Option<&[u8]>,
) -> String {
    let mut mac = keyed(token_key.as_bytes());
    mac.update(method.as_bytes());
    mac.update(uri.as_bytes());
    let operation_key = mac.finalize().into_bytes();

    let date_bytes = request_date.as_bytes();
    let mut mac = keyed(operation_key.as_slice());
    mac.update(&date_bytes[..date_bytes.len().min(DATE_KEY_LEN)]);
    let date_key = mac.finalize().into_bytes();

    let mut mac = keyed(date_key.as_slice());
    if let Some(body) = body {
        mac.update(body);
    }

    STANDARD.encode(mac.finalize().into_bytes())
}

/// RequestDate ヘッダ用の現在時刻（ローカルタイムゾーンのRFC3339）
pub fn request_date_now() -> String {
    chrono::Local::now().to_rfc3339()
}
