use sortviz_orst::orst::StepObserver;

/// One call to [`StepObserver::on_step`]: the array right after the step and the boundary hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub values: Vec<T>,
    pub boundary: usize,
}

/// Records every step of a sort. With [`StepRecorder::cancel_after`] it also reports a
/// cancellation as soon as the given number of steps has been observed.
#[derive(Debug, Clone)]
pub struct StepRecorder<T> {
    steps: Vec<Step<T>>,
    cancel_after: Option<usize>,
}

impl<T> StepRecorder<T> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            cancel_after: None,
        }
    }

    pub fn cancel_after(steps: usize) -> Self {
        Self {
            steps: Vec::new(),
            cancel_after: Some(steps),
        }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }
}

impl<T> Default for StepRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> StepObserver<T> for StepRecorder<T> {
    fn on_step(&mut self, values: &[T], boundary: usize) {
        self.steps.push(Step {
            values: values.to_vec(),
            boundary,
        });
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_after
            .is_some_and(|limit| self.steps.len() >= limit)
    }
}

/// Counts steps without keeping them, for large inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepCounter {
    pub steps: usize,
}

impl<T> StepObserver<T> for StepCounter {
    fn on_step(&mut self, _values: &[T], _boundary: usize) {
        self.steps += 1;
    }

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// The values of `values` in ascending order.
pub fn sorted_copy<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}
