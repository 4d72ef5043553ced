//! Animation-frame request coalescing.

/// A pending "run on the next frame" request.
///
/// Any number of `request` calls between two frames collapse into a single
/// callback, which is how bursts of pointer events are throttled to one
/// recomputation per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequest {
    requested: bool,
    /// Frames actually delivered, for diagnostics.
    delivered: u64,
}

impl FrameRequest {
    /// No frame requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame. Returns `true` if this call created the request.
    pub fn request(&mut self) -> bool {
        let fresh = !self.requested;
        self.requested = true;
        fresh
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) {
        self.requested = false;
    }

    /// Whether a frame is pending.
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consume the request at a frame boundary. Returns whether work is due.
    pub fn take(&mut self) -> bool {
        if self.requested {
            self.requested = false;
            self.delivered += 1;
            true
        } else {
            false
        }
    }

    /// Number of frames consumed so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_requests_coalesces_into_one_frame() {
        let mut frame = FrameRequest::new();
        assert!(frame.request());
        assert!(!frame.request());
        assert!(!frame.request());

        assert!(frame.take());
        assert!(!frame.take());
        assert_eq!(frame.delivered(), 1);
    }

    #[test]
    fn cancelled_request_is_not_delivered() {
        let mut frame = FrameRequest::new();
        frame.request();
        frame.cancel();

        assert!(!frame.take());
        assert_eq!(frame.delivered(), 0);
    }
}
