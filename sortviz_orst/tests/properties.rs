use proptest::prelude::*;
use sortviz_orst::orst::{self, Algorithm, TerminationReason};
use sortviz_orst::ArrayModel;
use utilities::orst::{sorted_copy, StepCounter, StepRecorder};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Bubble),
        Just(Algorithm::Selection),
        Just(Algorithm::Insertion),
        Just(Algorithm::Quick),
    ]
}

proptest! {
    #[test]
    fn completed_runs_are_sorted_permutations(
        values in prop::collection::vec(any::<i32>(), 1..80),
        algorithm in algorithm(),
    ) {
        let expected = sorted_copy(&values);
        let mut array = ArrayModel::from_vec(values).unwrap();
        let mut counter = StepCounter::default();

        let reason = orst::run(&mut array, algorithm, &mut counter).unwrap();

        prop_assert_eq!(reason, TerminationReason::Completed);
        prop_assert!(array.is_sorted());
        prop_assert_eq!(array.into_vec(), expected);
    }

    #[test]
    fn step_traces_are_deterministic(
        values in prop::collection::vec(1u32..=100, 1..40),
        algorithm in algorithm(),
    ) {
        let mut first = StepRecorder::new();
        let mut a = ArrayModel::from_vec(values.clone()).unwrap();
        orst::run(&mut a, algorithm, &mut first).unwrap();

        let mut second = StepRecorder::new();
        let mut b = ArrayModel::from_vec(values).unwrap();
        orst::run(&mut b, algorithm, &mut second).unwrap();

        prop_assert_eq!(first.steps(), second.steps());
    }

    #[test]
    fn boundary_hints_stay_within_the_array(
        values in prop::collection::vec(1u32..=100, 1..40),
        algorithm in algorithm(),
    ) {
        let len = values.len();
        let mut recorder = StepRecorder::new();
        let mut array = ArrayModel::from_vec(values).unwrap();
        orst::run(&mut array, algorithm, &mut recorder).unwrap();

        for step in recorder.steps() {
            prop_assert!(step.boundary <= len);
            prop_assert_eq!(step.values.len(), len);
        }
    }

    #[test]
    fn swap_based_sorts_keep_a_permutation_at_every_step(
        values in prop::collection::vec(1u32..=100, 1..40),
        algorithm in prop_oneof![
            Just(Algorithm::Bubble),
            Just(Algorithm::Selection),
            Just(Algorithm::Quick),
        ],
    ) {
        let expected = sorted_copy(&values);
        let mut recorder = StepRecorder::new();
        let mut array = ArrayModel::from_vec(values).unwrap();
        orst::run(&mut array, algorithm, &mut recorder).unwrap();

        for step in recorder.steps() {
            prop_assert_eq!(sorted_copy(&step.values), expected.clone());
        }
    }
}
