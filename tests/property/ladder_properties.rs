use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::VecDeque;
use word_ladder::core::{LadderError, Word};
use word_ladder::ladder::{
    Dictionary, SearchConfig, WordLadder, reconstruct, reconstruct_by_scan, search,
};

/// Plain queue-based BFS over the dictionary, returning the step count or `None`
fn reference_distance(words: &[Word], from: usize, to: usize) -> Option<usize> {
    let mut dist = vec![None; words.len()];
    let mut queue = VecDeque::new();
    dist[from] = Some(0);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        let d = dist[node]?;
        if node == to {
            return Some(d);
        }
        for (i, word) in words.iter().enumerate() {
            if dist[i].is_none() && words[node].distance(word) == Some(1) {
                dist[i] = Some(d + 1);
                queue.push_back(i);
            }
        }
    }
    None
}

fn small_dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{3}", 1..24)
}

proptest! {
    #[test]
    fn ladder_is_shortest_and_adjacent(raw in small_dictionary(), a in any::<Index>(), b in any::<Index>()) {
        let dict = Dictionary::build(&raw, 3);
        let source = a.index(dict.len());
        let target = b.index(dict.len());
        let expected = reference_distance(dict.words(), source, target);

        let ladder = WordLadder::new(
            dict.word(source).text(),
            dict.word(target).text(),
            &raw,
        )
        .unwrap();

        match (ladder.solve(&SearchConfig::default()), expected) {
            (Ok(result), Some(steps)) => {
                prop_assert_eq!(result.steps(), steps);
                prop_assert_eq!(&result.words[0], dict.word(source));
                prop_assert_eq!(result.words.last().unwrap(), dict.word(target));
                for pair in result.words.windows(2) {
                    prop_assert!(pair[0].distance(&pair[1]).unwrap() <= 1);
                }
            }
            (Err(LadderError::NoPath { .. }), None) => {}
            (other, expected) => {
                prop_assert!(false, "got {:?}, reference {:?}", other, expected);
            }
        }
    }

    #[test]
    fn same_word_is_one_word_ladder(raw in small_dictionary(), a in any::<Index>()) {
        let dict = Dictionary::build(&raw, 3);
        let word = dict.word(a.index(dict.len())).text().to_string();

        let result = WordLadder::new(&word, &word, &raw)
            .unwrap()
            .solve(&SearchConfig::default())
            .unwrap();
        prop_assert_eq!(result.texts(), vec![word.as_str()]);
    }

    #[test]
    fn waves_are_bfs_depths(raw in small_dictionary(), a in any::<Index>(), b in any::<Index>()) {
        let dict = Dictionary::build(&raw, 3);
        let source = a.index(dict.len());
        let target = b.index(dict.len());

        let Ok(state) = search(&dict, source, target, &SearchConfig::default()) else {
            return Ok(());
        };

        prop_assert_eq!(state.wave(0), vec![source]);
        for i in 0..dict.len() {
            let Some(wave) = state.wave_of(i) else { continue };
            // Every visited word is exactly as deep as the reference BFS says
            prop_assert_eq!(reference_distance(dict.words(), source, i), Some(wave));
            if wave > 0 {
                let prev = state.predecessor_of(i).unwrap();
                prop_assert_eq!(state.wave_of(prev), Some(wave - 1));
            }
        }

        let path = reconstruct(&dict, &state, target).unwrap();
        prop_assert_eq!(path.len(), state.wave_of(target).unwrap() + 1);
        prop_assert_eq!(path, reconstruct_by_scan(&dict, &state, target).unwrap());
    }

    #[test]
    fn length_mismatch_is_invalid_input(source in "[abc]{1,4}", target in "[abc]{5,6}", raw in small_dictionary()) {
        let err = WordLadder::new(&source, &target, &raw).unwrap_err();
        prop_assert!(
            matches!(err, LadderError::LengthMismatch { .. }),
            "unexpected error: {:?}",
            err
        );
    }
}
