// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by `App::update`.
//!
//! The application state is synchronous. Anything that has to wait is
//! described as an [`Effect`] and carried out by the [`Runtime`], which
//! reports back with a [`Message`].
//!
//! [`Runtime`]: super::Runtime
//! [`Message`]: super::Message

use crate::application::port::RankingRequest;
use crate::notifications::ScheduledExpiry;

/// Identity of one search submission. Only the latest ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Work to perform after a message has been handled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Send `NotificationExpired(token)` after the delay.
    ExpireNotification(ScheduledExpiry),
    /// Rank the request and send `SearchCompleted`.
    Rank {
        ticket: SearchTicket,
        request: RankingRequest,
    },
}

impl Effect {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// The notification expiry this effect schedules, if any.
    #[must_use]
    pub fn expiry(&self) -> Option<ScheduledExpiry> {
        match self {
            Effect::ExpireNotification(expiry) => Some(*expiry),
            Effect::None | Effect::Rank { .. } => None,
        }
    }
}
