//! プロバイダごとの呼び出し間隔制御
//!
//! 1回の検索の間だけ生きる。最初の呼び出しでは待たない。
//! 間隔は前回の呼び出しが「終わって」から数える。

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

pub struct RateLimiter {
    last_finished: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_finished: Mutex::new(None),
            min_interval,
        }
    }

    /// 前回の呼び出しの完了から `min_interval` 経つまで待つ
    pub async fn wait(&self) {
        let last = *self.last_finished.lock().await;

        if let Some(last_time) = last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }
    }

    /// 呼び出しの完了を記録する
    pub async fn mark(&self) {
        *self.last_finished.lock().await = Some(Instant::now());
    }
}
