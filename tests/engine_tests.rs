use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use sorting_visualizer::{
    buffer::{ArrayBuffer, BufferError, Value, ValueRange},
    engine::{
        quick::Partition, Algorithm, BubbleCursor, Cursor, Highlight, InsertionCursor, QuickCursor,
        SelectionCursor, Step, StepEngine,
    },
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn random_values(size: usize, seed: u64) -> Vec<Value> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(50..=780)).collect()
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

/// Steps until done, returning every non-terminal step.
fn run_to_completion(engine: &mut dyn StepEngine, buffer: &mut ArrayBuffer) -> Vec<Step> {
    let limit = buffer.len() * buffer.len() * 4 + 16;
    let mut steps = Vec::new();

    loop {
        let step = engine.step(buffer).unwrap();

        if step.done {
            assert_eq!(step.highlight, None);
            return steps;
        }

        steps.push(step);
        assert!(steps.len() <= limit, "engine did not terminate");
    }
}

#[test]
fn test_all_algorithms_sort_random_input() {
    for algorithm in Algorithm::ALL {
        for (size, seed) in [(2, 1), (10, 2), (100, TEST_SEED), (257, 7)] {
            let values = random_values(size, seed);
            let mut buffer = ArrayBuffer::from(values.clone());
            let mut cursor = Cursor::new(algorithm, size);

            run_to_completion(&mut cursor, &mut buffer);

            assert!(buffer.is_sorted(), "{} left {:?}", algorithm, buffer.as_slice());
            assert_eq!(buffer.as_slice(), sorted_copy(&values).as_slice());
        }
    }
}

#[test]
fn test_all_algorithms_handle_duplicates() {
    let values = vec![5, 1, 5, 3, 1, 5, 3, 3, 1, 5];

    for algorithm in Algorithm::ALL {
        let mut buffer = ArrayBuffer::from(values.clone());
        let mut cursor = Cursor::new(algorithm, values.len());

        run_to_completion(&mut cursor, &mut buffer);

        assert_eq!(buffer.as_slice(), sorted_copy(&values).as_slice(), "{}", algorithm);
    }
}

#[test]
fn test_highlights_stay_in_bounds() {
    let values = random_values(64, TEST_SEED);

    for algorithm in Algorithm::ALL {
        let mut buffer = ArrayBuffer::from(values.clone());
        let mut cursor = Cursor::new(algorithm, values.len());

        for step in run_to_completion(&mut cursor, &mut buffer) {
            let Highlight(a, b) = step.highlight.expect("working steps highlight");
            assert!(a < values.len() && b < values.len(), "{}: {:?}", algorithm, (a, b));
        }
    }
}

#[test]
fn test_done_is_sticky() {
    for algorithm in Algorithm::ALL {
        let mut buffer = ArrayBuffer::from(vec![3, 2, 1]);
        let mut cursor = Cursor::new(algorithm, 3);

        run_to_completion(&mut cursor, &mut buffer);

        for _ in 0..3 {
            assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
        }
        assert_eq!(buffer.as_slice(), &[1, 2, 3]);
    }
}

#[test]
fn test_empty_and_single_inputs_finish_immediately() {
    for algorithm in Algorithm::ALL {
        for values in [vec![], vec![7]] {
            let mut buffer = ArrayBuffer::from(values.clone());
            let mut cursor = Cursor::new(algorithm, values.len());
            let steps = run_to_completion(&mut cursor, &mut buffer);

            assert_eq!(buffer.as_slice(), values.as_slice());

            // insertion spends one step dropping the lone key back in place
            match algorithm {
                Algorithm::Insertion => assert_eq!(steps.len(), values.len()),
                _ => assert!(steps.is_empty(), "{}", algorithm),
            }
        }
    }
}

#[test]
fn test_bubble_trivial_inputs_are_done_without_mutation() {
    for values in [vec![], vec![9]] {
        let mut buffer = ArrayBuffer::from(values.clone());
        let mut cursor = BubbleCursor::default();

        assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
        assert_eq!(buffer.as_slice(), values.as_slice());
    }
}

#[test]
fn test_bubble_steps_one_comparison_at_a_time() {
    let mut buffer = ArrayBuffer::from(vec![3, 1, 2]);
    let mut cursor = BubbleCursor::default();

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 1));
    assert_eq!(buffer.as_slice(), &[1, 3, 2]);

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(1, 2));
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);

    // second pass only compares the first pair
    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 1));
    assert_eq!((cursor.outer(), cursor.inner()), (1, 1));

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_bubble_comparison_count() {
    let size = 20;
    let mut buffer = ArrayBuffer::from(random_values(size, TEST_SEED));
    let mut cursor = BubbleCursor::default();

    let steps = run_to_completion(&mut cursor, &mut buffer);

    assert_eq!(steps.len(), size * (size - 1) / 2);
}

#[test]
fn test_bubble_does_not_swap_equal_values() {
    let mut buffer = ArrayBuffer::from(vec![4, 4]);
    let mut cursor = BubbleCursor::default();

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 1));
    assert_eq!(buffer.as_slice(), &[4, 4]);
}

#[test]
fn test_selection_trace_of_three_values() {
    let mut buffer = ArrayBuffer::from(vec![3, 1, 2]);
    let mut cursor = SelectionCursor::default();

    let step = cursor.step(&mut buffer).unwrap();
    assert_eq!(step, Step::touched(0, 1));
    assert_eq!(cursor.min_index(), 1);
    assert_eq!(buffer.as_slice(), &[1, 3, 2]);
    assert_eq!(cursor.outer(), 1);

    let step = cursor.step(&mut buffer).unwrap();
    assert_eq!(step, Step::touched(1, 2));
    assert_eq!(cursor.min_index(), 2);
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
    assert_eq!(cursor.outer(), 2);

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_selection_takes_one_step_per_outer_pass() {
    let size = 50;
    let mut buffer = ArrayBuffer::from(random_values(size, TEST_SEED));
    let mut cursor = SelectionCursor::default();

    assert_eq!(run_to_completion(&mut cursor, &mut buffer).len(), size - 1);
}

#[test]
fn test_selection_keeps_first_minimum() {
    let mut buffer = ArrayBuffer::from(vec![2, 1, 1]);
    let mut cursor = SelectionCursor::default();

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 1));
}

#[test]
fn test_insertion_sorts_descending_input() {
    let mut buffer = ArrayBuffer::from(vec![5, 4, 3, 2, 1]);
    let mut cursor = InsertionCursor::default();

    run_to_completion(&mut cursor, &mut buffer);

    assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_insertion_last_pass_shifts_four_times() {
    let mut buffer = ArrayBuffer::from(vec![5, 4, 3, 2, 1]);
    let mut cursor = InsertionCursor::default();

    while cursor.outer() < 4 {
        cursor.step(&mut buffer).unwrap();
    }
    assert_eq!(buffer.as_slice(), &[2, 3, 4, 5, 1]);

    let mut shifts = 0;
    loop {
        let step = cursor.step(&mut buffer).unwrap();

        if cursor.outer() == 4 {
            let Highlight(j, hole) = step.highlight.unwrap();
            assert_eq!(hole, j + 1);
            assert_eq!(cursor.key(), Some(1));
            shifts += 1;
        } else {
            // the insert itself
            assert_eq!(step, Step::touched(4, 0));
            break;
        }
    }

    assert_eq!(shifts, 4);
    assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
}

#[test]
fn test_insertion_shift_reports_pair() {
    let mut buffer = ArrayBuffer::from(vec![2, 1]);
    let mut cursor = InsertionCursor::default();

    // i = 0 has nothing to its left
    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 0));

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(0, 1));
    assert_eq!(cursor.inner(), None);
    assert_eq!(cursor.key(), Some(1));
    assert_eq!(buffer.as_slice(), &[2, 2]);

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::touched(1, 0));
    assert_eq!(buffer.as_slice(), &[1, 2]);
    assert_eq!(cursor.key(), None);
}

#[test]
fn test_quick_initial_stack() {
    assert_eq!(QuickCursor::new(0).pending().len(), 0);
    assert_eq!(QuickCursor::new(1).pending().len(), 0);

    let cursor = QuickCursor::new(10);
    assert_eq!(cursor.pending(), &[Partition { low: 0, high: 9 }]);
    assert!(!cursor.mid_partition());
}

#[test]
fn test_quick_pushes_only_multi_value_partitions() {
    let mut buffer = ArrayBuffer::from(vec![4, 1, 3, 2, 5]);
    let mut cursor = QuickCursor::new(5);

    // pivot 5 is already the largest, only the left side remains
    cursor.step(&mut buffer).unwrap();
    assert_eq!(cursor.pending(), &[Partition { low: 0, high: 3 }]);

    cursor.step(&mut buffer).unwrap();

    // pivot 2 splits off a single value on the left
    cursor.step(&mut buffer).unwrap();
    assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(cursor.pending(), &[Partition { low: 2, high: 3 }]);
}

#[test]
fn test_quick_holds_each_partition_for_two_steps() {
    let mut buffer = ArrayBuffer::from(vec![3, 1, 2]);
    let mut cursor = QuickCursor::new(3);

    // pivot 2 lands in the middle, both sides are single values
    let step = cursor.step(&mut buffer).unwrap();
    assert_eq!(step, Step::touched(1, 2));
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
    assert!(cursor.mid_partition());
    assert!(cursor.pending().is_empty());

    let hold = cursor.step(&mut buffer).unwrap();
    assert_eq!(hold, step);
    assert!(!cursor.mid_partition());

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
}

#[test]
fn test_quick_terminates_on_sorted_input() {
    let size = 200;
    let values: Vec<Value> = (0..size as Value).collect();
    let mut buffer = ArrayBuffer::from(values.clone());
    let mut cursor = QuickCursor::new(size);

    let steps = run_to_completion(&mut cursor, &mut buffer);

    // every partition fixes one pivot, and is shown twice
    assert!(steps.len() <= 2 * size);
    assert_eq!(buffer.as_slice(), values.as_slice());
}

#[test]
fn test_quick_empty_stack_is_done() {
    let mut buffer = ArrayBuffer::from(vec![2, 1]);
    let mut cursor = QuickCursor::default();

    assert_eq!(cursor.step(&mut buffer).unwrap(), Step::done());
    assert_eq!(buffer.as_slice(), &[2, 1]);
}

#[test]
fn test_cursor_reports_algorithm() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Cursor::new(algorithm, 5).algorithm(), algorithm);
    }
}

#[test]
fn test_algorithm_from_str() {
    assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
    assert_eq!("Bubble".parse::<Algorithm>(), Ok(Algorithm::Bubble));
    assert!("merge".parse::<Algorithm>().is_err());
}

#[test]
fn test_buffer_bounds_checks() {
    let mut buffer = ArrayBuffer::from(vec![1, 2, 3]);

    assert_eq!(buffer.get(2), Ok(3));
    assert_eq!(
        buffer.get(3),
        Err(BufferError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        buffer.set(5, 1),
        Err(BufferError::IndexOutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(
        buffer.swap(0, 3),
        Err(BufferError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);

    buffer.swap(0, 2).unwrap();
    buffer.set(1, 9).unwrap();
    assert_eq!(buffer.as_slice(), &[3, 9, 1]);
}

#[test]
fn test_buffer_reset_fills_range() {
    let range = ValueRange::new(50, 780).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);
    let mut buffer = ArrayBuffer::new();

    buffer.reset(100, range, &mut rng);
    assert_eq!(buffer.len(), 100);
    assert!(buffer.as_slice().iter().all(|&v| range.contains(v)));

    buffer.reset(10, range, &mut rng);
    assert_eq!(buffer.len(), 10);
}

#[test]
fn test_value_range_parsing() {
    assert_eq!(ValueRange::for_height(800), ValueRange::new(50, 780));
    assert!(ValueRange::for_height(60).is_err());
    assert_eq!("1..10".parse::<ValueRange>(), ValueRange::new(1, 10));
    assert!("10..1".parse::<ValueRange>().is_err());
    assert!("10".parse::<ValueRange>().is_err());
}
