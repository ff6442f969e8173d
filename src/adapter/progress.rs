//! Progress reporting delegated to a closure

use super::traits::ReportProgress;

/// Forwards every reported value to the captured closure, verbatim.
pub struct DelegatingProgress<F> {
    delegate: F,
}

impl<F> DelegatingProgress<F> {
    pub(crate) fn new(delegate: F) -> Self {
        Self { delegate }
    }
}

impl<T, F> ReportProgress<T> for DelegatingProgress<F>
where
    F: Fn(T),
{
    fn report(&self, value: T) {
        (self.delegate)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn report_forwards_the_value() {
        let seen = Rc::new(RefCell::new(None));
        let reporter = DelegatingProgress::new({
            let seen = seen.clone();
            move |v: &str| *seen.borrow_mut() = Some(v.to_string())
        });
        reporter.report("done");
        assert_eq!(seen.borrow().as_deref(), Some("done"));
    }

    #[test]
    fn report_forwards_every_call_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reporter = DelegatingProgress::new({
            let seen = seen.clone();
            move |percent: u8| seen.borrow_mut().push(percent)
        });
        for percent in [10, 50, 100] {
            reporter.report(percent);
        }
        assert_eq!(*seen.borrow(), [10, 50, 100]);
    }
}
