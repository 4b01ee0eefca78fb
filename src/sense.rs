use crate::ext::iterator::IteratorExt;
use crate::{Error, ErrorKind};
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/// The sparse weight map describing the neighborhood of an item or a sense.
pub type Context<T> = HashMap<T, f64>;

/// Maps each item to its induced senses and their contexts.
pub type SenseInventory<T> = HashMap<T, HashMap<Sense<T>, Context<T>>>;

/**
Identifies one sense of an ambiguous item as the pair (`item`, `index`).

Indexes are assigned per item, densely from `0`. Two senses are equal iff
both the item and the index match, so constructing the same pair twice
yields equal senses.

# Examples

```
use watset::Sense;

let sense = Sense::new("bank", 1);
assert_eq!(sense.item(), &"bank");
assert_eq!(sense.index(), 1);
assert_eq!(sense, Sense::new("bank", 1));
assert_eq!(sense.to_string(), "bank#1");
```
*/
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sense<T> {
    item: T,
    index: usize,
}

impl<T> Sense<T> {
    /// Creates the sense of `item` with the given per-item `index`.
    pub fn new(item: T, index: usize) -> Sense<T> {
        Sense { item, index }
    }

    /// Returns the item this sense belongs to.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the per-item index of this sense.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Sense<T>
where
    T: Eq + Clone + Hash + Display,
{
    /**
    Rewrites a `context` over items into a context over senses.

    For every (`item`, `weight`) entry of `context` whose item is not in
    `exclude`, the sense of that item whose own context is most similar to
    `context` is selected and written to the result with `weight`. Ties are
    broken in favor of the lowest sense index. Items that have no senses in
    the `inventory` are silently skipped.

    # Returns

    An `Err` with `ErrorKind::SenseUnresolved` if an item has a non-empty
    sense set but none of its senses could be selected (e.g. the similarity
    returned NaN for all of them).
    */
    pub fn disambiguate<F>(
        inventory: &SenseInventory<T>,
        similarity: F,
        context: &Context<T>,
        exclude: &HashSet<T>,
    ) -> Result<HashMap<Sense<T>, f64>, Error>
    where
        F: Fn(&Context<T>, &Context<T>) -> f64,
    {
        let mut result = HashMap::with_capacity(context.len());
        for (item, weight) in context {
            if exclude.contains(item) {
                continue;
            }
            let senses = match inventory.get(item) {
                None => continue,
                Some(senses) => senses,
            };
            if senses.is_empty() {
                continue;
            }
            let selected = senses
                .keys()
                .sorted_by_key(|sense| sense.index())
                .argmax(|sense| similarity(context, senses.get(*sense).unwrap()));
            match selected {
                None => {
                    return Err(Error {
                        kind: ErrorKind::SenseUnresolved,
                        message: format!(
                            "None of the {} senses of '{}' could be selected for the context.",
                            senses.len(),
                            item
                        ),
                    });
                }
                Some(sense) => {
                    result.insert(sense.clone(), *weight);
                }
            }
        }
        Ok(result)
    }
}

impl<T: PartialEq> PartialEq for Sense<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item && self.index == other.index
    }
}

impl<T: Eq> Eq for Sense<T> {}

impl<T: Hash> Hash for Sense<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        self.index.hash(state);
    }
}

impl<T: Debug> fmt::Debug for Sense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sense")
            .field("item", &self.item)
            .field("index", &self.index)
            .finish()
    }
}

impl<T: Display> fmt::Display for Sense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.item, self.index)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cosine_similarity;

    fn context(pairs: Vec<(&'static str, f64)>) -> Context<&'static str> {
        pairs.into_iter().collect()
    }

    fn inventory_entry(
        inventory: &mut SenseInventory<&'static str>,
        item: &'static str,
        contexts: Vec<Vec<(&'static str, f64)>>,
    ) {
        let senses = contexts
            .into_iter()
            .enumerate()
            .map(|(index, pairs)| (Sense::new(item, index), context(pairs)))
            .collect();
        inventory.insert(item, senses);
    }

    #[test]
    fn test_sense_identity() {
        assert_eq!(Sense::new("bank", 0), Sense::new("bank", 0));
        assert_ne!(Sense::new("bank", 0), Sense::new("bank", 1));
        assert_ne!(Sense::new("bank", 0), Sense::new("river", 0));
    }

    #[test]
    fn test_disambiguate_picks_most_similar_sense() {
        let mut inventory = SenseInventory::new();
        inventory_entry(
            &mut inventory,
            "bank",
            vec![
                vec![("river", 1.0), ("water", 1.0)],
                vec![("money", 1.0), ("loan", 1.0)],
            ],
        );
        let ctx = context(vec![("bank", 1.0), ("money", 1.0)]);
        let exclude = vec!["money"].into_iter().collect::<HashSet<&str>>();
        let result =
            Sense::disambiguate(&inventory, cosine_similarity, &ctx, &exclude).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(&Sense::new("bank", 1)), Some(&1.0));
    }

    #[test]
    fn test_disambiguate_skips_items_without_senses() {
        let inventory = SenseInventory::new();
        let ctx = context(vec![("bank", 1.0)]);
        let exclude = HashSet::new();
        let result =
            Sense::disambiguate(&inventory, cosine_similarity, &ctx, &exclude).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_disambiguate_ties_prefer_lowest_index() {
        let mut inventory = SenseInventory::new();
        // both senses score 0 against a disjoint context
        inventory_entry(
            &mut inventory,
            "bank",
            vec![vec![("river", 1.0)], vec![("money", 1.0)]],
        );
        let ctx = context(vec![("bank", 1.0), ("slope", 1.0)]);
        let exclude = vec!["slope"].into_iter().collect::<HashSet<&str>>();
        let result =
            Sense::disambiguate(&inventory, cosine_similarity, &ctx, &exclude).unwrap();
        assert_eq!(result.get(&Sense::new("bank", 0)), Some(&1.0));
    }

    #[test]
    fn test_disambiguate_unresolved_on_nan_scores() {
        let mut inventory = SenseInventory::new();
        inventory_entry(&mut inventory, "bank", vec![vec![("river", 1.0)]]);
        let ctx = context(vec![("bank", 1.0)]);
        let exclude = HashSet::new();
        let result = Sense::disambiguate(&inventory, |_, _| f64::NAN, &ctx, &exclude);
        assert_eq!(result.unwrap_err().kind, ErrorKind::SenseUnresolved);
    }
}
