use crate::core::constants::CANCEL_CHECK_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Counts processed work units and polls the token once every
/// [`CANCEL_CHECK_INTERVAL`] units.
pub(crate) struct CancelPoll<'a, C: CancelToken + ?Sized> {
    token: &'a C,
    processed: usize,
}

impl<'a, C: CancelToken + ?Sized> CancelPoll<'a, C> {
    pub(crate) fn new(token: &'a C) -> Self {
        Self {
            token,
            processed: 0,
        }
    }

    #[inline]
    pub(crate) fn advance(&mut self, units: usize) -> Result<(), Cancelled> {
        self.processed += units;

        if self.processed >= CANCEL_CHECK_INTERVAL {
            self.processed = 0;
            if self.token.is_cancelled() {
                return Err(Cancelled);
            }
        }

        Ok(())
    }
}
