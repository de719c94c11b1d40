use log::info;

/// Load phase of the page content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the content retriever to report back.
    #[default]
    Loading,
    /// Content is in place, live or bundled.
    Ready,
}

impl Phase {
    /// Content arrived (fetch failures are masked by fallbacks, so this
    /// is the only transition out of `Loading`).
    pub fn resolve(&mut self, live: bool) {
        if *self == Phase::Loading {
            info!("phase Loading -> Ready (live content: {live})");
            *self = Phase::Ready;
        }
    }

    pub fn is_ready(self) -> bool {
        self == Phase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_idempotent() {
        let mut phase = Phase::default();
        assert!(!phase.is_ready());
        phase.resolve(false);
        assert!(phase.is_ready());
        phase.resolve(true);
        assert!(phase.is_ready());
    }
}
