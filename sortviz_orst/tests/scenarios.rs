use sortviz_orst::orst::{self, Algorithm, TerminationReason};
use sortviz_orst::{ArrayModel, Error};
use utilities::orst::{Step, StepRecorder};

fn trace(values: Vec<i32>, algorithm: Algorithm) -> (Vec<i32>, StepRecorder<i32>) {
    let mut array = ArrayModel::from_vec(values).unwrap();
    let mut recorder = StepRecorder::new();
    let reason = orst::run(&mut array, algorithm, &mut recorder).unwrap();
    assert_eq!(reason, TerminationReason::Completed);
    (array.into_vec(), recorder)
}

fn values(recorder: &StepRecorder<i32>) -> Vec<Vec<i32>> {
    recorder.steps().iter().map(|s| s.values.clone()).collect()
}

mod bubble {
    use super::*;

    #[test]
    fn five_three_eight_one() {
        let (sorted, recorder) = trace(vec![5, 3, 8, 1], Algorithm::Bubble);

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(
            values(&recorder),
            vec![
                vec![3, 5, 8, 1],
                vec![3, 5, 1, 8],
                vec![3, 1, 5, 8],
                vec![1, 3, 5, 8],
            ]
        );
    }
}

mod selection {
    use super::*;

    #[test]
    fn five_three_eight_one() {
        let (sorted, recorder) = trace(vec![5, 3, 8, 1], Algorithm::Selection);

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(
            recorder.steps(),
            &[
                Step {
                    values: vec![1, 3, 8, 5],
                    boundary: 0
                },
                Step {
                    values: vec![1, 3, 8, 5],
                    boundary: 1
                },
                Step {
                    values: vec![1, 3, 5, 8],
                    boundary: 2
                },
            ]
        );
    }
}

mod insertion {
    use super::*;

    #[test]
    fn every_position_ends_with_a_placement() {
        let (sorted, recorder) = trace(vec![4, 1, 3, 2], Algorithm::Insertion);

        assert_eq!(sorted, vec![1, 2, 3, 4]);
        // i=1: one shift + place, i=2: one shift + place, i=3: two shifts + place
        assert_eq!(recorder.len(), 7);
        let boundaries: Vec<_> = recorder.steps().iter().map(|s| s.boundary).collect();
        assert_eq!(boundaries, vec![1, 1, 2, 2, 3, 3, 3]);
    }
}

mod quick {
    use super::*;

    #[test]
    fn finishes_with_the_whole_array_settled() {
        let (sorted, recorder) = trace(vec![9, 2, 7, 4, 5], Algorithm::Quick);

        assert_eq!(sorted, vec![2, 4, 5, 7, 9]);
        let last = recorder.last().unwrap();
        assert_eq!(last.boundary, 5);
        assert_eq!(last.values, sorted);
    }

    #[test]
    fn pivot_placement_is_always_reported() {
        // already sorted: everything left of the pivot is smaller, so each partition is a chain
        // of self-swaps followed by the pivot swapping with itself
        let (_, recorder) = trace(vec![1, 2, 3], Algorithm::Quick);
        let boundaries: Vec<_> = recorder.steps().iter().map(|s| s.boundary).collect();
        assert_eq!(boundaries, vec![0, 1, 2, 0, 1, 3]);
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn empty_array_is_rejected() {
        assert_eq!(ArrayModel::generate(0), Err(Error::InvalidSize(0)));
    }

    #[test]
    fn single_element_completes_without_steps() {
        for algorithm in Algorithm::ALL {
            let (sorted, recorder) = trace(vec![42], algorithm);
            assert_eq!(sorted, vec![42]);
            assert!(recorder.is_empty(), "{algorithm} reported a step");
        }
    }

    #[test]
    fn generated_arrays_stay_in_range() {
        for _ in 0..20 {
            let a = ArrayModel::generate(64).unwrap();
            assert_eq!(a.len(), 64);
            assert!(a.iter().all(|v| (1..=100).contains(v)));
        }
    }
}
