use crate::types::Timestamp;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC time, used to stamp reviews
pub fn now_utc() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
