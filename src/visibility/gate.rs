use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Fraction of a region that must be on screen before it counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObserveError {
    #[error("Viewport observation is not supported: {0}")]
    Unsupported(String),
    #[error("Observed region is not mounted")]
    MissingTarget,
}

/// What a listener wants from its source after handling one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

/// One-shot latch: flips to visible on the first ratio at or above the
/// threshold and stays there.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection ratio. Returns `true` only on the transition.
    pub fn record(&mut self, ratio: f64) -> bool {
        if self.visible || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Handle on a live observation. Cancelling runs the teardown once; dropping
/// the handle cancels it.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to release.
    #[cfg(test)]
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

pub type IntersectionListener = Box<dyn FnMut(f64) -> Observation>;

/// Delivers one batch of `(is_intersecting, ratio)` entries to a listener.
///
/// Entries that are not intersecting are skipped: an element that starts off
/// screen is first reported with ratio 0, which would satisfy a zero
/// threshold. Delivery ends at the first `Stop`.
pub fn forward<I>(entries: I, listener: &mut IntersectionListener) -> Observation
where
    I: IntoIterator<Item = (bool, f64)>,
{
    for (intersecting, ratio) in entries {
        if !intersecting {
            continue;
        }
        if listener(ratio) == Observation::Stop {
            return Observation::Stop;
        }
    }
    Observation::Continue
}

/// Something that reports how much of one region is inside the viewport.
///
/// Implementations must stop calling the listener once it answers
/// [`Observation::Stop`], and must stop for good when the returned
/// [`Subscription`] is cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait IntersectionSource {
    fn subscribe(
        &self,
        threshold: f64,
        listener: IntersectionListener,
    ) -> Result<Subscription, ObserveError>;
}

/// A [`VisibilityLatch`] wired to an [`IntersectionSource`] for the lifetime
/// of the gate.
pub struct VisibilityGate {
    visible: Rc<Cell<bool>>,
    subscription: RefCell<Option<Subscription>>,
}

impl VisibilityGate {
    pub fn attach<S, F>(source: &S, threshold: f64, on_visible: F) -> Result<Self, ObserveError>
    where
        S: IntersectionSource + ?Sized,
        F: FnOnce() + 'static,
    {
        let visible = Rc::new(Cell::new(false));
        let mut latch = VisibilityLatch::new(threshold);
        let threshold = latch.threshold();
        let mut on_visible = Some(on_visible);

        let listener: IntersectionListener = {
            let visible = visible.clone();
            Box::new(move |ratio| {
                if latch.is_visible() {
                    return Observation::Stop;
                }
                if !latch.record(ratio) {
                    return Observation::Continue;
                }
                visible.set(true);
                if let Some(notify) = on_visible.take() {
                    notify();
                }
                Observation::Stop
            })
        };

        let subscription = source.subscribe(threshold, listener)?;
        Ok(Self {
            visible,
            subscription: RefCell::new(Some(subscription)),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.subscription
            .borrow()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    pub fn detach(&self) {
        if let Some(mut subscription) = self.subscription.borrow_mut().take() {
            subscription.cancel();
        }
    }
}

impl Drop for VisibilityGate {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands the listener back to the test so samples can be pushed by hand.
    #[derive(Default)]
    struct ManualSource {
        listener: Rc<RefCell<Option<IntersectionListener>>>,
        stopped: Rc<Cell<bool>>,
        cancelled: Rc<Cell<u32>>,
    }

    impl ManualSource {
        fn push(&self, ratio: f64) {
            if self.stopped.get() || self.cancelled.get() > 0 {
                return;
            }
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                if listener(ratio) == Observation::Stop {
                    self.stopped.set(true);
                }
            }
        }
    }

    impl ManualSource {
        fn push_batch(&self, entries: &[(bool, f64)]) {
            if self.stopped.get() || self.cancelled.get() > 0 {
                return;
            }
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                if forward(entries.iter().copied(), listener) == Observation::Stop {
                    self.stopped.set(true);
                }
            }
        }
    }

    impl IntersectionSource for ManualSource {
        fn subscribe(
            &self,
            _threshold: f64,
            listener: IntersectionListener,
        ) -> Result<Subscription, ObserveError> {
            *self.listener.borrow_mut() = Some(listener);
            let cancelled = self.cancelled.clone();
            Ok(Subscription::new(move || cancelled.set(cancelled.get() + 1)))
        }
    }

    #[test]
    fn test_latch_is_monotone() {
        let mut latch = VisibilityLatch::new(0.5);
        let samples = [0.0, 0.2, 0.7, 0.1, 0.0, 0.9, 0.3];
        let mut seen = Vec::new();
        for ratio in samples {
            latch.record(ratio);
            seen.push(latch.is_visible());
        }
        assert_eq!(seen, vec![false, false, true, true, true, true, true]);
    }

    #[test]
    fn test_latch_reports_only_first_crossing() {
        let mut latch = VisibilityLatch::new(0.2);
        assert!(!latch.record(0.1));
        assert!(latch.record(0.2));
        assert!(!latch.record(0.8));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_threshold_is_clamped() {
        assert_eq!(VisibilityLatch::new(1.7).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-0.3).threshold(), 0.0);
        assert_eq!(VisibilityLatch::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_latch_ignores_nan_ratio() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.record(f64::NAN));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_subscription_cancel_is_idempotent() {
        let count = Rc::new(Cell::new(0));
        let mut subscription = {
            let count = count.clone();
            Subscription::new(move || count.set(count.get() + 1))
        };
        assert!(subscription.is_active());
        subscription.cancel();
        subscription.cancel();
        drop(subscription);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_gate_latches_once_and_stops_source() {
        let source = ManualSource::default();
        let fired = Rc::new(Cell::new(0));
        let gate = {
            let fired = fired.clone();
            VisibilityGate::attach(&source, 0.2, move || fired.set(fired.get() + 1)).unwrap()
        };

        source.push(0.05);
        source.push(0.15);
        assert!(!gate.is_visible());

        source.push(0.25);
        assert!(gate.is_visible());
        assert!(source.stopped.get());

        source.push(0.0);
        assert!(gate.is_visible());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_detach_before_threshold_keeps_output_false() {
        let source = ManualSource::default();
        let gate = VisibilityGate::attach(&source, 0.5, || {}).unwrap();
        source.push(0.3);
        gate.detach();
        gate.detach();
        source.push(0.9);
        assert!(!gate.is_visible());
        assert!(!gate.is_attached());
        assert_eq!(source.cancelled.get(), 1);
    }

    #[test]
    fn test_dropping_gate_releases_subscription() {
        let source = ManualSource::default();
        let gate = VisibilityGate::attach(&source, 0.5, || {}).unwrap();
        drop(gate);
        assert_eq!(source.cancelled.get(), 1);
    }

    #[test]
    fn test_gate_passes_clamped_threshold_to_source() {
        let mut source = MockIntersectionSource::new();
        source
            .expect_subscribe()
            .withf(|threshold, _| *threshold == 1.0)
            .times(1)
            .returning(|_, _| Ok(Subscription::noop()));
        let gate = VisibilityGate::attach(&source, 3.0, || {}).unwrap();
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_unsupported_source_is_reported() {
        let mut source = MockIntersectionSource::new();
        source
            .expect_subscribe()
            .returning(|_, _| Err(ObserveError::Unsupported("no IntersectionObserver".into())));
        let result = VisibilityGate::attach(&source, 0.2, || {});
        assert!(matches!(result, Err(ObserveError::Unsupported(_))));
    }

    #[test]
    fn test_off_screen_report_does_not_trip_zero_threshold() {
        let source = ManualSource::default();
        let gate = VisibilityGate::attach(&source, 0.0, || {}).unwrap();
        source.push_batch(&[(false, 0.0)]);
        assert!(!gate.is_visible());
        assert!(!source.stopped.get());

        source.push_batch(&[(true, 0.0)]);
        assert!(gate.is_visible());
        assert!(source.stopped.get());
    }

    #[test]
    fn test_forward_stops_at_first_stop() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listener: IntersectionListener = {
            let seen = seen.clone();
            Box::new(move |ratio| {
                seen.borrow_mut().push(ratio);
                if ratio >= 0.5 {
                    Observation::Stop
                } else {
                    Observation::Continue
                }
            })
        };

        let result = forward(
            [(true, 0.2), (false, 0.7), (true, 0.6), (true, 0.9)],
            &mut listener,
        );
        assert_eq!(result, Observation::Stop);
        assert_eq!(*seen.borrow(), vec![0.2, 0.6]);
    }

    #[test]
    fn test_forward_continues_when_nothing_qualifies() {
        let mut listener: IntersectionListener = Box::new(|_| Observation::Continue);
        assert_eq!(forward([(true, 0.1), (false, 1.0)], &mut listener), Observation::Continue);
        assert_eq!(forward(std::iter::empty(), &mut listener), Observation::Continue);
    }
}
