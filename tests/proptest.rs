use arena_deque::{CountingArena, Deque, Error, FixedArena, HeapArena};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::VecDeque;

proptest! {
    #[test]
    fn random_push_and_pop(
        pushes in proptest::collection::vec(any::<bool>(), 0..64),
        pops in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut l: Deque<usize> = Deque::new();

        let len = pushes.len();

        for (p, v) in pushes.into_iter().zip(0..len) {
            if p {
                l.push_front(v).unwrap();
            } else {
                l.push_back(v).unwrap();
            }
        }

        let mut popped = 0;
        for p in pops {
            let r = if p { l.pop_front() } else { l.pop_back() };
            if r.is_ok() {
                popped += 1;
            }
        }

        prop_assert_eq!(len.saturating_sub(popped), l.len());
        prop_assert_eq!(l.len() == 0, l.is_empty());
    }
}

proptest! {
    #[test]
    fn random_interleaving_matches_the_std_deque(
        actions in proptest::collection::vec(any::<u8>(), 0..256)
    ) {
        let mut ours: Deque<u8> = Deque::new();
        let mut model: VecDeque<u8> = VecDeque::new();

        for a in actions {
            match a & 0x03 {
                0x00 => {
                    ours.push_front(a).unwrap();
                    model.push_front(a);
                }
                0x01 => {
                    ours.push_back(a).unwrap();
                    model.push_back(a);
                }
                0x02 => {
                    prop_assert_eq!(model.pop_front().ok_or(Error::Empty), ours.pop_front());
                }
                0x03 => {
                    prop_assert_eq!(model.pop_back().ok_or(Error::Empty), ours.pop_back());
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), ours.len());
            prop_assert_eq!(model.is_empty(), ours.is_empty());
            prop_assert_eq!(model.front().ok_or(Error::Empty), ours.front());
            prop_assert_eq!(model.back().ok_or(Error::Empty), ours.back());
        }

        prop_assert_eq!(
            model.iter().collect::<Vec<&u8>>(),
            ours.iter().collect::<Vec<&u8>>()
        );
        prop_assert_eq!(
            model.iter().rev().collect::<Vec<&u8>>(),
            ours.iter().rev().collect::<Vec<&u8>>()
        );
    }
}

proptest! {
    #[test]
    fn pushed_values_round_trip_in_both_directions(
        values in proptest::collection::vec(any::<i32>(), 0..64)
    ) {
        let deque: Deque<i32> = values.iter().cloned().collect();

        prop_assert_eq!(
            values.iter().collect::<Vec<&i32>>(),
            deque.iter().collect::<Vec<&i32>>()
        );

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(
            reversed.iter().collect::<Vec<&i32>>(),
            deque.iter().rev().collect::<Vec<&i32>>()
        );

        prop_assert_eq!(values, deque.into_iter().collect::<Vec<i32>>());
    }
}

proptest! {
    #[test]
    fn cursor_walks_agree_with_iteration(
        values in proptest::collection::vec(any::<u8>(), 1..32)
    ) {
        let deque: Deque<u8> = values.iter().cloned().collect();

        let mut walked = Vec::new();
        let mut c = deque.cursor();
        while !c.is_end() {
            walked.push(*c.get().unwrap());
            c.advance().unwrap();
        }
        prop_assert_eq!(&values, &walked);

        // Walking back from the end position visits the same elements
        // in reverse, and stops with an error at the front.
        let mut retreated = Vec::new();
        let mut c = deque.cursor_end();
        while c.retreat().is_ok() {
            retreated.push(*c.get().unwrap());
        }
        retreated.reverse();
        prop_assert_eq!(&values, &retreated);
    }
}

proptest! {
    #[test]
    fn random_appends_concatenate_without_allocating(
        seed in any::<u64>(),
        values in proptest::collection::vec(any::<u16>(), 0..64)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);

        // Random cut points split the values into chunks; each chunk
        // becomes its own deque, appended in turn onto the whole.
        let mut cuts = vec![0, values.len()];
        for _ in 0..3 {
            cuts.push(rng.gen_range(0, values.len() + 1));
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut whole: Deque<u16, CountingArena<HeapArena<u16>>> =
            Deque::new_in(CountingArena::default());

        for pair in cuts.windows(2) {
            let mut part: Deque<u16, CountingArena<HeapArena<u16>>> =
                Deque::new_in(CountingArena::default());
            for v in &values[pair[0]..pair[1]] {
                part.push_back(*v).unwrap();
            }

            whole.append(&mut part).unwrap();
            prop_assert!(part.is_empty());
        }

        // Every node was allocated by the donors; appending moved them.
        prop_assert_eq!(0, whole.arena().allocations());
        prop_assert_eq!(
            values.iter().collect::<Vec<&u16>>(),
            whole.iter().collect::<Vec<&u16>>()
        );
    }
}

proptest! {
    #[test]
    fn fixed_arena_never_exceeds_its_limit(
        ops in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let mut d: Deque<u8, FixedArena<u8>> = Deque::new_in(FixedArena::with_capacity(8));

        for op in ops {
            if 0 == op & 1 {
                match d.push_back(op) {
                    Ok(()) => {}
                    Err(err) => {
                        prop_assert_eq!(Error::OutOfMemory, err);
                        prop_assert_eq!(8, d.len());
                    }
                }
            } else {
                let _ = d.pop_front();
            }

            prop_assert!(d.len() <= 8);
        }
    }
}
