use rand::Rng;
use std::cmp::Ordering;

/// Extends `Iterator` with the `argmax` and `argmax_random` methods.
pub trait IteratorExt: Iterator {
    /**
    Returns the first element achieving the maximum score, in a single pass.

    Returns `None` if the iterator is empty. An element whose score is not
    equal to itself (NaN) is never selectable. To restrict the candidates,
    chain `Iterator::filter` in front; `None` is then returned if no element
    passes the filter.

    ```
    use watset::ext::iterator::IteratorExt;
    let words = vec!["a", "bb", "cc", "d"];
    let longest = words.into_iter().argmax(|w| w.len());
    assert_eq!(longest, Some("bb"));
    ```
    */
    fn argmax<S, F>(self, scorer: F) -> Option<Self::Item>
    where
        Self: Sized,
        S: PartialOrd,
        F: FnMut(&Self::Item) -> S;

    /**
    Returns a uniformly random element among those tied at the maximum score,
    in a single pass.

    Returns `None` if the iterator is empty. An element whose score is not
    equal to itself (NaN) is never selectable. The choice is deterministic
    for a fixed, seeded `rng`.

    ```
    use rand::{rngs::StdRng, SeedableRng};
    use watset::ext::iterator::IteratorExt;
    let mut rng = StdRng::seed_from_u64(1);
    let best = vec![3, 1, 3, 2].into_iter().argmax_random(|i| *i, &mut rng);
    assert_eq!(best, Some(3));
    ```
    */
    fn argmax_random<S, F, R>(self, scorer: F, rng: &mut R) -> Option<Self::Item>
    where
        Self: Sized,
        S: PartialOrd,
        F: FnMut(&Self::Item) -> S,
        R: Rng;
}

impl<I> IteratorExt for I
where
    I: Iterator,
{
    fn argmax<S, F>(self, mut scorer: F) -> Option<Self::Item>
    where
        Self: Sized,
        S: PartialOrd,
        F: FnMut(&Self::Item) -> S,
    {
        let mut best: Option<(Self::Item, S)> = None;
        for item in self {
            let score = scorer(&item);
            // a score that is not equal to itself (NaN) can never win
            if score.partial_cmp(&score) != Some(Ordering::Equal) {
                continue;
            }
            match &best {
                None => best = Some((item, score)),
                Some((_, best_score)) => {
                    if score.partial_cmp(best_score) == Some(Ordering::Greater) {
                        best = Some((item, score));
                    }
                }
            }
        }
        best.map(|(item, _)| item)
    }

    fn argmax_random<S, F, R>(self, mut scorer: F, rng: &mut R) -> Option<Self::Item>
    where
        Self: Sized,
        S: PartialOrd,
        F: FnMut(&Self::Item) -> S,
        R: Rng,
    {
        let mut best: Vec<Self::Item> = vec![];
        let mut best_score: Option<S> = None;
        for item in self {
            let score = scorer(&item);
            if score.partial_cmp(&score) != Some(Ordering::Equal) {
                continue;
            }
            match &best_score {
                None => {
                    best.push(item);
                    best_score = Some(score);
                }
                Some(current) => match score.partial_cmp(current) {
                    Some(Ordering::Greater) => {
                        best.clear();
                        best.push(item);
                        best_score = Some(score);
                    }
                    Some(Ordering::Equal) => {
                        best.push(item);
                    }
                    _ => {}
                },
            }
        }
        match best.is_empty() {
            true => None,
            false => {
                let chosen = rng.gen_range(0..best.len());
                Some(best.swap_remove(chosen))
            }
        }
    }
}
