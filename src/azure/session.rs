//! Scoped subscription sessions.

/// An authenticated session scoped to one subscription.
///
/// Dropping the guard releases the session, so teardown runs on every exit
/// path out of a collection pass: normal return, `?` propagation, or a
/// panic unwinding through the caller.
#[derive(Debug)]
pub struct SubscriptionSession {
    subscription_id: String,
}

impl SubscriptionSession {
    /// Wrap an established session for `subscription_id`.
    pub fn new(subscription_id: &str) -> SubscriptionSession {
        log::debug!("Opened session for subscription {subscription_id}");
        SubscriptionSession {
            subscription_id: subscription_id.to_string(),
        }
    }

    /// The subscription this session is scoped to.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}

impl Drop for SubscriptionSession {
    fn drop(&mut self) {
        log::info!("Released session for subscription {}", self.subscription_id);
    }
}
