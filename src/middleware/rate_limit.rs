use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Fixed one-second window counter shared by every request on a route group.
#[derive(Debug)]
struct Window {
    opened_at: Instant,
    admitted: u32,
}

#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    fn new(rps: u32) -> Self {
        Self {
            rps: rps.max(1),
            window: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                admitted: 0,
            })),
        }
    }

    fn try_admit(&self) -> bool {
        let mut window = self.window.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.opened_at) >= Duration::from_secs(1) {
            window.opened_at = now;
            window.admitted = 0;
        }
        if window.admitted >= self.rps {
            return false;
        }
        window.admitted += 1;
        true
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_admit() {
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_rps_within_one_window() {
        let limiter = RateLimiter::new(3);
        assert!(limiter.try_admit());
        assert!(limiter.try_admit());
        assert!(limiter.try_admit());
        assert!(!limiter.try_admit());
    }

    #[test]
    fn zero_rps_still_admits_one() {
        let limiter = RateLimiter::new(0);
        assert!(limiter.try_admit());
        assert!(!limiter.try_admit());
    }
}
